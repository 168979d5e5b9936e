use cozy_chess as cozy;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl From<cozy::Color> for Color {
    fn from(c: cozy::Color) -> Self {
        match c {
            cozy::Color::White => Color::White,
            cozy::Color::Black => Color::Black,
        }
    }
}

impl From<Color> for cozy::Color {
    fn from(c: Color) -> Self {
        match c {
            Color::White => cozy::Color::White,
            Color::Black => cozy::Color::Black,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn idx(self) -> usize {
        self as usize
    }
}

impl From<cozy::Piece> for PieceKind {
    fn from(p: cozy::Piece) -> Self {
        match p {
            cozy::Piece::Pawn => PieceKind::Pawn,
            cozy::Piece::Knight => PieceKind::Knight,
            cozy::Piece::Bishop => PieceKind::Bishop,
            cozy::Piece::Rook => PieceKind::Rook,
            cozy::Piece::Queen => PieceKind::Queen,
            cozy::Piece::King => PieceKind::King,
        }
    }
}

impl From<PieceKind> for cozy::Piece {
    fn from(p: PieceKind) -> Self {
        match p {
            PieceKind::Pawn => cozy::Piece::Pawn,
            PieceKind::Knight => cozy::Piece::Knight,
            PieceKind::Bishop => cozy::Piece::Bishop,
            PieceKind::Rook => cozy::Piece::Rook,
            PieceKind::Queen => cozy::Piece::Queen,
            PieceKind::King => cozy::Piece::King,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

/// A fully classified legal move.
///
/// Castling is stored with the king's destination square (e1g1), not the
/// rook square. `captured` is `Some(Pawn)` for en passant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: u8, // 0..63
    pub to: u8,   // 0..63
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub promo: Option<PieceKind>,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl Move {
    pub fn new(from: u8, to: u8, piece: PieceKind) -> Self {
        Self {
            from,
            to,
            piece,
            captured: None,
            promo: None,
            is_en_passant: false,
            is_castle: false,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promo.is_some()
    }
}

// Square helpers. a1 = 0, h8 = 63.

/// Flips a square vertically (a1 <-> a8).
#[inline]
pub fn mirror_sq(sq: u8) -> u8 {
    sq ^ 56
}

pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + (sq % 8)) as char;
    let r = (b'1' + (sq / 8)) as char;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    let file = f - b'a';
    let rank = r - b'1';
    Some(rank * 8 + file)
}

pub(crate) fn to_cozy_sq(sq: u8) -> cozy::Square {
    cozy::Square::index(sq as usize)
}

pub(crate) fn from_cozy_sq(sq: cozy::Square) -> u8 {
    sq as u8
}
