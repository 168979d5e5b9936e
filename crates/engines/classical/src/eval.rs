//! Material plus piece-square evaluation.

use chess_core::{Color, PieceKind, PositionOracle};

use crate::pst::pst_value;

/// Centipawn score, always relative to the side to move.
pub type Score = i32;

/// Score for "the side to move mates"; its negation means "is mated".
pub const MATE_SCORE: Score = 1_000_000;
/// Strictly outside every reachable score; bounds the root window.
pub const INFINITY: Score = MATE_SCORE + 1;
pub const DRAW_SCORE: Score = 0;

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [Score; 6] = [100, 280, 320, 479, 929, 60_000];

/// Returns the material value of a piece in centipawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> Score {
    PIECE_VALUES[kind.idx()]
}

/// Evaluates the position from the side-to-move's perspective.
///
/// Checkmate scores `-MATE_SCORE` (the side to move is mated) and any draw
/// the oracle recognises scores exactly `DRAW_SCORE`. Otherwise the score is
/// material plus, when `use_pst` is set, the piece-square bonus of every
/// piece, White minus Black, negated when Black is to move.
pub fn evaluate<P: PositionOracle>(pos: &P, use_pst: bool) -> Score {
    terminal_score(pos).unwrap_or_else(|| material_score(pos, use_pst))
}

/// Score of a finished game, or `None` while play continues.
pub fn terminal_score<P: PositionOracle>(pos: &P) -> Option<Score> {
    if pos.is_checkmate() {
        Some(-MATE_SCORE)
    } else if pos.is_draw() {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

/// Material and placement relative to the side to move, ignoring whether
/// the game is over.
pub fn material_score<P: PositionOracle>(pos: &P, use_pst: bool) -> Score {
    let score = static_score(pos, use_pst);

    // Convert to side-to-move perspective
    if pos.side_to_move() == Color::White {
        score
    } else {
        -score
    }
}

/// White-minus-Black material and placement, ignoring game state.
pub fn static_score<P: PositionOracle>(pos: &P, use_pst: bool) -> Score {
    let mut score = 0;
    for sq in 0..64u8 {
        let Some(pc) = pos.piece_at(sq) else {
            continue;
        };
        let mut v = piece_value(pc.kind);
        if use_pst {
            v += pst_value(pc.kind, pc.color, sq);
        }
        score += if pc.color == Color::White { v } else { -v };
    }
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
pub(crate) mod eval_tests;
