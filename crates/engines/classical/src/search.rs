//! Negamax search with alpha-beta pruning

use chess_core::{PositionOracle, SearchResult};

use crate::config::SearchConfig;
use crate::depth::{DepthBudget, UNBOUNDED_EXCHANGE};
use crate::eval::{terminal_score, Score};
use crate::exchange::exchange;
use crate::ordering::order_moves;
use crate::stats::SearchStats;

/// Settings that stay fixed for the whole search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Capture plies allowed below each principal leaf
    pub exchange_depth: u8,
    pub move_ordering: bool,
    pub use_pst: bool,
}

impl SearchParams {
    pub fn new(budget: DepthBudget, config: &SearchConfig) -> Self {
        Self {
            exchange_depth: budget.exchange_depth,
            move_ordering: config.move_ordering,
            use_pst: config.use_pst,
        }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            exchange_depth: UNBOUNDED_EXCHANGE,
            move_ordering: true,
            use_pst: true,
        }
    }
}

/// Recursive negamax search with fail-hard alpha-beta pruning.
///
/// Scores are relative to the side to move at each node. `max_ply == 0` is a
/// leaf scored by the exchange search; a finished game takes the evaluator's
/// mate or draw score. Otherwise every
/// legal move is tried in order; a child refuting the window returns
/// `(beta, move, None)` at once, and after all moves the node returns
/// `(alpha, best move, the child's best move)`.
///
/// The first ordered move is the fallback best move, and only a strictly
/// better score replaces it, so ties go to whichever move was searched first.
///
/// # Panics
/// Panics if the oracle reports no legal moves for a position it does not
/// consider finished.
pub fn search<P: PositionOracle>(
    pos: &mut P,
    max_ply: u8,
    mut alpha: Score,
    beta: Score,
    params: &SearchParams,
    stats: &mut SearchStats,
) -> SearchResult {
    debug_assert!(alpha < beta, "empty window ({alpha}, {beta})");
    stats.nodes += 1;

    if max_ply == 0 {
        let score = exchange(pos, params.exchange_depth, alpha, beta, params, stats);
        return SearchResult::leaf(score);
    }
    if let Some(score) = terminal_score(pos) {
        return SearchResult::leaf(score);
    }

    let mut moves = Vec::with_capacity(64);
    pos.legal_moves(&mut moves);
    assert!(
        !moves.is_empty(),
        "oracle returned no legal moves for an unfinished position"
    );
    if params.move_ordering {
        order_moves(&mut moves);
    }

    let side = pos.side_to_move();
    let mut best_move = moves[0];
    let mut expected_reply = None;

    for mv in moves {
        pos.make_move(mv);
        let child = search(pos, max_ply - 1, -beta, -alpha, params, stats);
        pos.unmake_move();
        debug_assert_eq!(pos.side_to_move(), side, "make/unmake out of step");

        let score = -child.score;
        if score >= beta {
            stats.cutoffs += 1;
            return SearchResult {
                score: beta,
                best_move: Some(mv),
                expected_reply: None,
            };
        }
        if score > alpha {
            alpha = score;
            best_move = mv;
            expected_reply = child.best_move;
        }
    }

    SearchResult {
        score: alpha,
        best_move: Some(best_move),
        expected_reply,
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
