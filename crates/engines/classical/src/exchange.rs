//! Exchange (quiescence) search.
//!
//! Follows capture sequences past the principal search horizon so a leaf is
//! never scored in the middle of a trade. The side to move may always stand
//! pat, so the static score is a lower bound at every node.

use chess_core::PositionOracle;

use crate::eval::{material_score, piece_value, terminal_score, Score};
use crate::ordering::order_moves;
use crate::search::SearchParams;
use crate::stats::SearchStats;

/// Capture-only negamax below the principal search.
///
/// Finished games score through the evaluator before anything else. The
/// stand-pat score is returned as is when `depth` is spent or it already
/// reaches `beta`; a capture that refutes the window returns exactly `beta`.
///
/// Captures where the victim is worth no more than the capturing piece are
/// skipped outright. That is cheaper than a real exchange evaluation and
/// misses some winning sequences that start with an even or losing trade;
/// en passant (pawn takes pawn) is always skipped by the same rule.
pub fn exchange<P: PositionOracle>(
    pos: &mut P,
    depth: u8,
    alpha: Score,
    beta: Score,
    params: &SearchParams,
    stats: &mut SearchStats,
) -> Score {
    stats.exchange_nodes += 1;

    if let Some(score) = terminal_score(pos) {
        return score;
    }

    stats.evaluations += 1;
    let stand_pat = material_score(pos, params.use_pst);
    if depth == 0 || stand_pat >= beta {
        return stand_pat;
    }
    let mut alpha = alpha.max(stand_pat);

    let mut captures = Vec::with_capacity(16);
    pos.capture_moves(&mut captures);
    if params.move_ordering {
        order_moves(&mut captures);
    }

    for mv in captures {
        let Some(victim) = mv.captured else {
            continue;
        };
        if piece_value(victim) <= piece_value(mv.piece) {
            continue;
        }

        pos.make_move(mv);
        let score = -exchange(pos, depth - 1, -beta, -alpha, params, stats);
        pos.unmake_move();

        if score >= beta {
            stats.cutoffs += 1;
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

#[cfg(test)]
#[path = "exchange_tests.rs"]
mod exchange_tests;
