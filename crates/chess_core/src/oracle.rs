//! The contract between the search core and whatever owns the game rules.
//!
//! The engines never implement chess rules themselves; they only talk to a
//! `PositionOracle`. Moves are applied and undone in strict LIFO order, and
//! after a balanced sequence of `make_move`/`unmake_move` calls the oracle
//! must be in exactly the state it started in.

use crate::types::{Color, Move, Piece};

pub trait PositionOracle {
    /// Appends every legal move for the side to move to `out`.
    fn legal_moves(&self, out: &mut Vec<Move>);

    /// Appends only the legal capturing moves (en passant included).
    fn capture_moves(&self, out: &mut Vec<Move>) {
        let mut all = Vec::with_capacity(64);
        self.legal_moves(&mut all);
        out.extend(all.into_iter().filter(|mv| mv.is_capture()));
    }

    fn side_to_move(&self) -> Color;

    /// True if the side to move is in check.
    fn in_check(&self) -> bool;

    /// Side to move is in check and has no legal moves.
    fn is_checkmate(&self) -> bool;

    /// Stalemate, fifty-move rule, threefold repetition or insufficient material.
    fn is_draw(&self) -> bool;

    fn is_square_attacked(&self, sq: u8, by: Color) -> bool;

    fn piece_at(&self, sq: u8) -> Option<Piece>;

    /// Number of pieces on the board, kings and pawns included.
    fn piece_count(&self) -> u32;

    /// Half-moves played since the start of the game.
    fn game_ply(&self) -> u32;

    /// Applies a legal move.
    fn make_move(&mut self, mv: Move);

    /// Undoes the most recently applied move.
    ///
    /// # Panics
    /// Panics if no move has been applied.
    fn unmake_move(&mut self);
}
