//! Classical Chess Engine
//!
//! Alpha-beta search with material and piece-square evaluation.
//! Each move runs one fixed-depth search whose depth comes from the clock.

mod config;
mod depth;
mod eval;
mod exchange;
mod ordering;
mod pst;
mod search;
mod stats;

use std::time::{Duration, Instant};

use chess_core::{Clock, Engine, Move, Position, PositionOracle, SearchResult};
use tracing::debug;

pub use config::{ConfigError, EngineConfig, SearchConfig, TimeConfig};
pub use depth::{choose_budget, resolve_budget, DepthBudget, UNBOUNDED_EXCHANGE};
pub use eval::{
    evaluate, material_score, piece_value, terminal_score, Score, DRAW_SCORE, INFINITY,
    MATE_SCORE,
};
pub use exchange::exchange;
pub use ordering::{move_order_score, order_moves};
pub use pst::pst_value;
pub use search::{search, SearchParams};
pub use stats::SearchStats;

/// Everything one call to [`ClassicalEngine::think_with`] produced.
#[derive(Debug, Clone, Copy)]
pub struct Thought {
    pub result: SearchResult,
    pub budget: DepthBudget,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

/// Classical chess engine using negamax with alpha-beta pruning.
///
/// This engine uses:
/// - Negamax search with fail-hard alpha-beta pruning
/// - Capture-only exchange search at the leaves
/// - Material plus piece-square evaluation
/// - Static move ordering
/// - A depth chosen from the remaining clock and material
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    config: EngineConfig,
    /// Counters from the most recent search
    last_stats: SearchStats,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            last_stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }

    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    /// Searches any oracle once and returns the move with its diagnostics.
    ///
    /// `result.best_move` is `None` only when the side to move has no legal
    /// move. If the budget leaves nothing to expand (a zero-ply search, or a
    /// position already drawn by rule) the first ordered legal move is played.
    pub fn think_with<P: PositionOracle>(&self, pos: &mut P, clock: &Clock) -> Thought {
        let start = Instant::now();
        let budget = resolve_budget(
            clock,
            pos.piece_count(),
            pos.game_ply(),
            &self.config.search,
            &self.config.time,
        );
        let params = SearchParams::new(budget, &self.config.search);
        let mut stats = SearchStats::default();

        let mut result = search(pos, budget.max_ply, -INFINITY, INFINITY, &params, &mut stats);
        if result.best_move.is_none() {
            result.best_move = first_legal_move(pos, params.move_ordering);
        }

        let elapsed = start.elapsed();
        debug!(
            max_ply = budget.max_ply,
            exchange_depth = budget.exchange_depth,
            score = result.score,
            best_move = ?result.best_move,
            expected_reply = ?result.expected_reply,
            nodes = stats.nodes,
            exchange_nodes = stats.exchange_nodes,
            cutoffs = stats.cutoffs,
            elapsed_ms = elapsed.as_millis() as u64,
            "search finished"
        );

        Thought {
            result,
            budget,
            stats,
            elapsed,
        }
    }
}

fn first_legal_move<P: PositionOracle>(pos: &P, ordered: bool) -> Option<Move> {
    let mut moves = Vec::with_capacity(64);
    pos.legal_moves(&mut moves);
    if ordered {
        order_moves(&mut moves);
    }
    moves.first().copied()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Some(true),
        "false" | "off" | "0" => Some(false),
        _ => None,
    }
}

impl Engine for ClassicalEngine {
    fn think(&mut self, pos: &mut Position, clock: &Clock) -> SearchResult {
        let thought = self.think_with(pos, clock);
        self.last_stats = thought.stats;
        thought.result
    }

    fn name(&self) -> &str {
        "Classical v2.0"
    }

    fn author(&self) -> &str {
        "ML-chess"
    }

    fn new_game(&mut self) {
        self.last_stats = SearchStats::default();
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        let search = &mut self.config.search;
        match name {
            "MoveOrdering" => parse_bool(value).map(|v| search.move_ordering = v).is_some(),
            "PieceSquareTables" => parse_bool(value).map(|v| search.use_pst = v).is_some(),
            // 0 hands the choice back to the clock
            "Depth" => match value.trim().parse::<u8>() {
                Ok(0) => {
                    search.fixed_ply = None;
                    true
                }
                Ok(d) => {
                    search.fixed_ply = Some(d);
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
