//! `Position`: the rules oracle used by the engines.
//!
//! Move generation, legality and attack tables come from `cozy-chess`; this
//! type adds the pieces the search needs on top of it: an undo stack so moves
//! can be pushed and popped in place, and a key history for repetition
//! detection.

use cozy_chess::{self as cozy, Board};

use crate::oracle::PositionOracle;
use crate::types::*;
use crate::PositionError;

#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    /// Boards as they were before each applied move.
    undo: Vec<Board>,
    /// Hash of every position reached, current one last.
    keys: Vec<u64>,
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let board = Board::from_fen(fen.trim(), false)
            .map_err(|_| PositionError::InvalidFen(fen.trim().to_string()))?;
        Ok(Self::from_board(board))
    }

    fn from_board(board: Board) -> Self {
        let key = board.hash();
        Self {
            board,
            undo: Vec::with_capacity(64),
            keys: vec![key],
        }
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    pub fn position_hash(&self) -> u64 {
        self.board.hash()
    }

    /// Number of moves that can still be undone.
    pub fn history_len(&self) -> usize {
        self.undo.len()
    }

    pub fn halfmove_clock(&self) -> u8 {
        self.board.halfmove_clock()
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.board.halfmove_clock() >= 100
    }

    pub fn is_threefold_repetition(&self) -> bool {
        let current = self.board.hash();
        self.keys.iter().filter(|&&k| k == current).count() >= 3
    }

    /// Positions where neither side can possibly deliver mate.
    pub fn is_insufficient_material(&self) -> bool {
        let b = &self.board;
        let heavy = b.pieces(cozy::Piece::Pawn)
            | b.pieces(cozy::Piece::Rook)
            | b.pieces(cozy::Piece::Queen);
        if !heavy.is_empty() {
            return false;
        }

        let knights = b.pieces(cozy::Piece::Knight);
        let bishops = b.pieces(cozy::Piece::Bishop);
        match (knights.len(), bishops.len()) {
            (0, 0) | (1, 0) | (0, 1) => true,
            (0, 2) => {
                // K+B vs K+B with both bishops on the same square colour
                let white = bishops & b.colors(cozy::Color::White);
                let colours: Vec<u8> = bishops
                    .into_iter()
                    .map(|s| {
                        let s = from_cozy_sq(s);
                        ((s % 8) + (s / 8)) % 2
                    })
                    .collect();
                white.len() == 1 && colours[0] == colours[1]
            }
            _ => false,
        }
    }

    fn has_legal_move(&self) -> bool {
        let mut found = false;
        self.board.generate_moves(|moves| {
            found = !moves.to.is_empty();
            found
        });
        found
    }

    fn classify(&self, raw: cozy::Move, piece: cozy::Piece) -> Move {
        let b = &self.board;
        let us = b.side_to_move();
        let from = from_cozy_sq(raw.from);
        let raw_to = from_cozy_sq(raw.to);
        let mut mv = Move::new(from, raw_to, piece.into());
        mv.promo = raw.promotion.map(PieceKind::from);

        if piece == cozy::Piece::King && b.colors(us).has(raw.to) {
            // cozy encodes castling as "king takes own rook"
            mv.is_castle = true;
            let back_rank = from & !7;
            mv.to = if raw_to % 8 > from % 8 {
                back_rank + 6
            } else {
                back_rank + 2
            };
        } else if b.colors(!us).has(raw.to) {
            mv.captured = b.piece_on(raw.to).map(PieceKind::from);
        } else if piece == cozy::Piece::Pawn && raw_to % 8 != from % 8 {
            mv.is_en_passant = true;
            mv.captured = Some(PieceKind::Pawn);
        }
        mv
    }

    fn to_cozy(&self, mv: Move) -> cozy::Move {
        let to = if mv.is_castle {
            let rights = self.board.castle_rights(self.board.side_to_move());
            let kingside = mv.to % 8 > mv.from % 8;
            let default_file = if kingside { 7 } else { 0 };
            let rook_file = (if kingside { rights.short } else { rights.long })
                .map(|f| f as u8)
                .unwrap_or(default_file);
            (mv.from & !7) + rook_file
        } else {
            mv.to
        };
        cozy::Move {
            from: to_cozy_sq(mv.from),
            to: to_cozy_sq(to),
            promotion: mv.promo.map(cozy::Piece::from),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl PositionOracle for Position {
    fn legal_moves(&self, out: &mut Vec<Move>) {
        self.board.generate_moves(|moves| {
            let piece = moves.piece;
            for raw in moves {
                out.push(self.classify(raw, piece));
            }
            false
        });
    }

    fn capture_moves(&self, out: &mut Vec<Move>) {
        let them = self.board.colors(!self.board.side_to_move());
        self.board.generate_moves(|mut moves| {
            let piece = moves.piece;
            // pawns keep every target so en passant survives; the rest only
            // need squares holding an enemy piece (this also drops castling)
            if piece != cozy::Piece::Pawn {
                moves.to = moves.to & them;
            }
            for raw in moves {
                let mv = self.classify(raw, piece);
                if mv.is_capture() {
                    out.push(mv);
                }
            }
            false
        });
    }

    fn side_to_move(&self) -> Color {
        self.board.side_to_move().into()
    }

    fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_legal_move()
    }

    fn is_draw(&self) -> bool {
        if !self.has_legal_move() {
            return !self.in_check();
        }
        self.is_fifty_move_draw()
            || self.is_threefold_repetition()
            || self.is_insufficient_material()
    }

    fn is_square_attacked(&self, sq: u8, by: Color) -> bool {
        let b = &self.board;
        let target = to_cozy_sq(sq);
        let theirs = b.colors(by.into());
        let occupied = b.occupied();
        let diagonal = b.pieces(cozy::Piece::Bishop) | b.pieces(cozy::Piece::Queen);
        let straight = b.pieces(cozy::Piece::Rook) | b.pieces(cozy::Piece::Queen);

        let attackers = (cozy::get_pawn_attacks(target, by.other().into())
            & b.pieces(cozy::Piece::Pawn))
            | (cozy::get_knight_moves(target) & b.pieces(cozy::Piece::Knight))
            | (cozy::get_king_moves(target) & b.pieces(cozy::Piece::King))
            | (cozy::get_bishop_moves(target, occupied) & diagonal)
            | (cozy::get_rook_moves(target, occupied) & straight);
        !(attackers & theirs).is_empty()
    }

    fn piece_at(&self, sq: u8) -> Option<Piece> {
        let s = to_cozy_sq(sq);
        let kind = self.board.piece_on(s)?;
        let color = self.board.color_on(s)?;
        Some(Piece {
            color: color.into(),
            kind: kind.into(),
        })
    }

    fn piece_count(&self) -> u32 {
        self.board.occupied().len()
    }

    fn game_ply(&self) -> u32 {
        let full = u32::from(self.board.fullmove_number().max(1));
        (full - 1) * 2 + u32::from(self.board.side_to_move() == cozy::Color::Black)
    }

    fn make_move(&mut self, mv: Move) {
        let raw = self.to_cozy(mv);
        debug_assert!(self.board.is_legal(raw), "illegal move {mv:?} in {}", self.fen());
        let mut next = self.board.clone();
        next.play_unchecked(raw);
        self.keys.push(next.hash());
        self.undo.push(std::mem::replace(&mut self.board, next));
    }

    fn unmake_move(&mut self) {
        let Some(prev) = self.undo.pop() else {
            panic!("unmake_move called with no move to undo");
        };
        self.board = prev;
        self.keys.pop();
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
