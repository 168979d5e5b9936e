//! Static move ordering.
//!
//! Each move gets an additive score from its flags plus the value of the
//! piece being moved; higher scores are searched first. No search feedback
//! is involved, and this is not a static exchange evaluation: a capture that
//! loses material still sorts ahead of a quiet developing move.

use std::cmp::Reverse;

use chess_core::{Move, PieceKind};

use crate::eval::{piece_value, Score};

const PROMOTION_BONUS: Score = 8_000;
const CAPTURE_BONUS: Score = 4_000;
const CASTLE_BONUS: Score = 4_000;
const EN_PASSANT_BONUS: Score = 2_000;

/// Ordering key for a single move.
pub fn move_order_score(mv: &Move) -> Score {
    let mut score = 0;
    if mv.is_promotion() {
        score += PROMOTION_BONUS;
    }
    if mv.is_capture() {
        score += CAPTURE_BONUS;
    }
    if mv.is_castle {
        score += CASTLE_BONUS;
    }
    if mv.is_en_passant {
        score += EN_PASSANT_BONUS;
    }
    // King moves would otherwise outrank everything
    if mv.piece != PieceKind::King {
        score += piece_value(mv.piece);
    }
    score
}

/// Sorts `moves` best-first. The sort is stable, so equal keys keep the
/// generator's order and the search stays deterministic.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mv| Reverse(move_order_score(mv)));
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
