use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MoveError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}
impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }
    /// Rank-index step of a pawn advance. Rank indices count down from the eighth rank,
    /// so White advances towards index 0.
    pub fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }
    /// Rank index of the back rank (kings and rooks start here).
    pub fn home_rank(self) -> u8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }
    /// Rank index pawns start on.
    pub fn pawn_rank(self) -> u8 {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Piece letter as written in a move token. Pawns have none.
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c {
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Promotion letter after `=`, accepted in either case.
    pub fn from_promotion_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'Q' => Some(PieceKind::Queen),
            'R' => Some(PieceKind::Rook),
            'B' => Some(PieceKind::Bishop),
            'N' => Some(PieceKind::Knight),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    /// Board-diagram letter: uppercase for White, lowercase for Black.
    pub fn to_char(self) -> char {
        match self.side {
            Side::White => self.kind.letter(),
            Side::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.side, self.kind)
    }
}

/// A board square. `file` 0..8 is a..h; `rank` 0..8 is the eighth rank down to the
/// first, so (0, 0) is a8 at the top-left of a White-oriented diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        (file < 8 && rank < 8).then_some(Square { file, rank })
    }

    /// Unchecked constructor for coordinates known to be on the board.
    pub(crate) const fn at(file: u8, rank: u8) -> Square {
        Square { file, rank }
    }

    /// `idx` must be below 64.
    pub(crate) fn from_index(idx: usize) -> Square {
        Square::at((idx % 8) as u8, (idx / 8) as u8)
    }

    /// 0 is the a-file.
    pub fn file(self) -> u8 {
        self.file
    }

    /// 0 is the eighth rank.
    pub fn rank(self) -> u8 {
        self.rank
    }

    pub fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// The square `df` files and `dr` rank indices away, if it is on the board.
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file as i8 + df;
        let rank = self.rank as i8 + dr;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::at(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// Squares walked outward along `(df, dr)`, excluding `self`, up to the board edge.
    pub fn ray(self, (df, dr): (i8, i8)) -> impl Iterator<Item = Square> {
        std::iter::successors(self.offset(df, dr), move |s| s.offset(df, dr))
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file) as char
    }

    pub fn rank_char(self) -> char {
        (b'8' - self.rank) as char
    }

    pub fn parse(s: &str) -> Result<Square, MoveError> {
        coord_to_square(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        coord_to_square(s)
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> String {
        sq.to_string()
    }
}

impl TryFrom<String> for Square {
    type Error = MoveError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        coord_to_square(&s)
    }
}

// Helpers
pub fn file_from_char(c: char) -> Option<u8> {
    ('a'..='h').contains(&c).then(|| c as u8 - b'a')
}

/// Rank index for a rank digit; '8' maps to 0.
pub fn rank_from_char(c: char) -> Option<u8> {
    ('1'..='8').contains(&c).then(|| b'8' - c as u8)
}

pub fn square_to_coord(sq: Square) -> String {
    sq.to_string()
}

pub fn coord_to_square(c: &str) -> Result<Square, MoveError> {
    let invalid = || MoveError::InvalidSquare(c.to_string());
    let mut chars = c.chars();
    let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };
    let file = file_from_char(f).ok_or_else(invalid)?;
    let rank = rank_from_char(r).ok_or_else(invalid)?;
    Ok(Square::at(file, rank))
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
