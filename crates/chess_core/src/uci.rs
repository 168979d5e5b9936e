use std::time::Duration;

use crate::{board::Position, oracle::PositionOracle, time_control::Clock, types::*, PositionError};

pub fn move_to_uci(mv: Move) -> String {
    let mut s = String::new();
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        let ch = match p {
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            _ => 'q',
        };
        s.push(ch);
    }
    s
}

pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    // We parse and then match against legal moves so flags (castle/ep) are correct.
    if txt.len() < 4 || !txt.is_ascii() {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = match txt.as_bytes().get(4).map(|b| b.to_ascii_lowercase()) {
        Some(b'q') => Some(PieceKind::Queen),
        Some(b'r') => Some(PieceKind::Rook),
        Some(b'b') => Some(PieceKind::Bishop),
        Some(b'n') => Some(PieceKind::Knight),
        Some(_) => return None,
        None => None,
    };

    let mut legals = Vec::with_capacity(64);
    pos.legal_moves(&mut legals);
    legals
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promo == promo)
}

/// Applies a UCI `position` command (everything after the keyword).
///
/// Supports `startpos [moves ...]` and `fen <fields> [moves ...]`. On error
/// the position is left untouched.
pub fn set_position_from_uci(pos: &mut Position, args: &[&str]) -> Result<(), PositionError> {
    let moves_at = args.iter().position(|&a| a == "moves");
    let (setup, moves) = match moves_at {
        Some(i) => (&args[..i], &args[i + 1..]),
        None => (args, &[][..]),
    };

    let mut next = match setup.first() {
        None | Some(&"startpos") => Position::startpos(),
        Some(&"fen") => Position::from_fen(&setup[1..].join(" "))?,
        Some(other) => return Err(PositionError::InvalidFen((*other).to_string())),
    };

    for txt in moves {
        let mv = parse_uci_move(&next, txt)
            .ok_or_else(|| PositionError::IllegalMove((*txt).to_string()))?;
        next.make_move(mv);
    }

    *pos = next;
    Ok(())
}

/// Parsed arguments of a UCI `go` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    pub wtime: Option<u64>,
    pub btime: Option<u64>,
    pub winc: Option<u64>,
    pub binc: Option<u64>,
    pub movetime: Option<u64>,
    pub depth: Option<u8>,
}

impl GoParams {
    /// Unknown tokens and malformed numbers are skipped.
    pub fn parse(args: &[&str]) -> Self {
        let mut go = GoParams::default();
        let mut i = 0;
        while i < args.len() {
            let value = args.get(i + 1).copied().unwrap_or("");
            let consumed = match args[i] {
                "wtime" => set(&mut go.wtime, value),
                "btime" => set(&mut go.btime, value),
                "winc" => set(&mut go.winc, value),
                "binc" => set(&mut go.binc, value),
                "movetime" => set(&mut go.movetime, value),
                "depth" => set(&mut go.depth, value),
                _ => false,
            };
            i += if consumed { 2 } else { 1 };
        }
        go
    }

    /// Clock of the side to move. `movetime` wins over the game clock; with
    /// neither the clock is unlimited.
    pub fn clock_for(&self, side: Color) -> Clock {
        let (time, inc) = match side {
            Color::White => (self.wtime, self.winc),
            Color::Black => (self.btime, self.binc),
        };
        match self.movetime.or(time) {
            Some(ms) => {
                Clock::from_millis(ms).with_increment(Duration::from_millis(inc.unwrap_or(0)))
            }
            None => Clock::unlimited(),
        }
    }
}

fn set<T: std::str::FromStr>(slot: &mut Option<T>, value: &str) -> bool {
    match value.parse() {
        Ok(v) => {
            *slot = Some(v);
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
