//! Depth controller: maps the clock and material on the board to a search
//! depth before each move.
//!
//! The budget is chosen once, up front. A search never checks the clock while
//! it runs, so the bands below are deliberately conservative.

use std::time::Duration;

use chess_core::Clock;

use crate::config::{SearchConfig, TimeConfig};

/// Exchange depth large enough that no capture sequence reaches it.
pub const UNBOUNDED_EXCHANGE: u8 = u8::MAX;

/// Plies for the principal search and the exchange search below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthBudget {
    pub max_ply: u8,
    pub exchange_depth: u8,
}

impl DepthBudget {
    pub const fn new(max_ply: u8, exchange_depth: u8) -> Self {
        Self {
            max_ply,
            exchange_depth,
        }
    }

    pub fn is_exchange_unbounded(&self) -> bool {
        self.exchange_depth == UNBOUNDED_EXCHANGE
    }
}

/// Picks the depth budget for the next search.
///
/// Bands by remaining time: under `panic_ms` one ply and no exchange search;
/// under `low_ms` two plies with one exchange ply; under `moderate_ms` three
/// plies with two. Those bands always win, since nothing stops a search once
/// it has started. With more time left, at most `endgame_pieces` pieces on
/// the board get `endgame_ply`; otherwise `opening_ply` during the first
/// `opening_plies` half-moves and `full_ply` after. All three use unbounded
/// exchanges.
pub fn choose_budget(
    clock: &Clock,
    piece_count: u32,
    game_ply: u32,
    cfg: &TimeConfig,
) -> DepthBudget {
    let remaining = clock.remaining;
    if remaining < Duration::from_millis(cfg.panic_ms) {
        DepthBudget::new(1, 0)
    } else if remaining < Duration::from_millis(cfg.low_ms) {
        DepthBudget::new(2, 1)
    } else if remaining < Duration::from_millis(cfg.moderate_ms) {
        DepthBudget::new(3, 2)
    } else if piece_count <= cfg.endgame_pieces {
        DepthBudget::new(cfg.endgame_ply, UNBOUNDED_EXCHANGE)
    } else if game_ply < cfg.opening_plies {
        DepthBudget::new(cfg.opening_ply, UNBOUNDED_EXCHANGE)
    } else {
        DepthBudget::new(cfg.full_ply, UNBOUNDED_EXCHANGE)
    }
}

/// Like [`choose_budget`], but a fixed depth in the search config wins.
pub fn resolve_budget(
    clock: &Clock,
    piece_count: u32,
    game_ply: u32,
    config: &SearchConfig,
    time: &TimeConfig,
) -> DepthBudget {
    match config.fixed_ply {
        Some(ply) => DepthBudget::new(
            ply,
            config.fixed_exchange_depth.unwrap_or(UNBOUNDED_EXCHANGE),
        ),
        None => choose_budget(clock, piece_count, game_ply, time),
    }
}

#[cfg(test)]
#[path = "depth_tests.rs"]
mod depth_tests;
