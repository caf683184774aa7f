//! Simplified algebraic notation.
//!
//! Recognized shapes, tried in order:
//! - `O-O` / `O-O-O`
//! - any move with a `=Q`, `=R`, `=B` or `=N` promotion suffix
//! - captures: `exd5`, `Nxe5`, `Nfxd4`, `N3xd4`, `Nf3xd4`
//! - plain moves: `e4`, `Nf3`, `Rhh3`, `R1a3`, `Qh4e1`
//!
//! A trailing `+` or `#` is accepted and ignored.

use crate::error::MoveError;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Where the king lands.
    pub fn king_target(self, side: Side) -> Square {
        match self {
            CastleSide::Kingside => Square::at(6, side.home_rank()),
            CastleSide::Queenside => Square::at(2, side.home_rank()),
        }
    }

    pub fn rook_origin(self, side: Side) -> Square {
        match self {
            CastleSide::Kingside => Square::at(7, side.home_rank()),
            CastleSide::Queenside => Square::at(0, side.home_rank()),
        }
    }

    pub fn rook_target(self, side: Side) -> Square {
        match self {
            CastleSide::Kingside => Square::at(5, side.home_rank()),
            CastleSide::Queenside => Square::at(3, side.home_rank()),
        }
    }

    /// Files between king and rook, all of which must be empty.
    pub(crate) fn between_files(self) -> &'static [u8] {
        match self {
            CastleSide::Kingside => &[5, 6],
            CastleSide::Queenside => &[1, 2, 3],
        }
    }
}

/// Origin constraints given by a disambiguator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Origin {
    pub file: Option<u8>,
    pub rank: Option<u8>,
}

impl Origin {
    pub fn matches(self, sq: Square) -> bool {
        self.file.is_none_or(|f| f == sq.file()) && self.rank.is_none_or(|r| r == sq.rank())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceMove {
    pub kind: PieceKind,
    pub origin: Origin,
    pub to: Square,
    pub capture: bool,
    pub promotion: Option<PieceKind>,
}

/// A decoded move token, not yet checked against any position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveIntent {
    Castle(CastleSide),
    Piece(PieceMove),
}

impl MoveIntent {
    /// The square the moving piece (the king, when castling) ends up on.
    pub fn destination(&self, side: Side) -> Square {
        match self {
            MoveIntent::Castle(castle) => castle.king_target(side),
            MoveIntent::Piece(mv) => mv.to,
        }
    }
}

/// Drops trailing check/mate annotations.
pub fn strip_annotation(token: &str) -> &str {
    token.trim_end_matches(['+', '#'])
}

/// Drops a leading move number such as `12.` or `12...`.
pub fn strip_move_number(token: &str) -> &str {
    let after_digits = token.trim_start_matches(|c: char| c.is_ascii_digit());
    if after_digits.len() == token.len() {
        return token;
    }
    let after_dots = after_digits.trim_start_matches('.');
    if after_dots.len() == after_digits.len() {
        token
    } else {
        after_dots
    }
}

pub fn parse_move(token: &str) -> Result<MoveIntent, MoveError> {
    let token = token.trim();
    if !token.is_ascii() {
        return Err(MoveError::InvalidMove(token.to_string()));
    }
    let body = strip_annotation(token);

    match body {
        "O-O" => return Ok(MoveIntent::Castle(CastleSide::Kingside)),
        "O-O-O" => return Ok(MoveIntent::Castle(CastleSide::Queenside)),
        _ => {}
    }

    let (base, promotion) = match body.rsplit_once('=') {
        Some((base, letter)) => (base, Some(parse_promotion(letter)?)),
        None => (body, None),
    };

    let mut mv = match base.split_once('x') {
        Some((from, to)) => parse_capture(base, from, to)?,
        None => parse_plain(base)?,
    };

    if promotion.is_some() && mv.kind != PieceKind::Pawn {
        return Err(MoveError::InvalidPromotion(token.to_string()));
    }
    mv.promotion = promotion;
    Ok(MoveIntent::Piece(mv))
}

fn parse_promotion(letter: &str) -> Result<PieceKind, MoveError> {
    let mut chars = letter.chars();
    let kind = match (chars.next(), chars.next()) {
        (Some(c), None) => PieceKind::from_promotion_letter(c),
        _ => None,
    };
    kind.ok_or_else(|| MoveError::InvalidPromotion(letter.to_string()))
}

fn parse_capture(base: &str, from: &str, to: &str) -> Result<PieceMove, MoveError> {
    let invalid = || MoveError::InvalidMove(base.to_string());
    let to = coord_to_square(to)?;

    let mut chars = from.chars();
    let first = chars.next().ok_or_else(invalid)?;
    let rest = chars.as_str();

    if first.is_ascii_lowercase() {
        // Pawn capture, origin file given: exd5
        if !rest.is_empty() {
            return Err(invalid());
        }
        let file = file_from_char(first).ok_or_else(invalid)?;
        return Ok(PieceMove {
            kind: PieceKind::Pawn,
            origin: Origin {
                file: Some(file),
                rank: None,
            },
            to,
            capture: true,
            promotion: None,
        });
    }

    let kind = PieceKind::from_letter(first).ok_or_else(invalid)?;
    let origin = parse_origin(rest).ok_or_else(invalid)?;
    Ok(PieceMove {
        kind,
        origin,
        to,
        capture: true,
        promotion: None,
    })
}

fn parse_plain(base: &str) -> Result<PieceMove, MoveError> {
    let invalid = || MoveError::InvalidMove(base.to_string());

    if base.len() < 2 {
        return Err(invalid());
    }
    if base.len() == 2 {
        return Ok(PieceMove {
            kind: PieceKind::Pawn,
            origin: Origin::default(),
            to: coord_to_square(base)?,
            capture: false,
            promotion: None,
        });
    }

    // Last two characters are the destination, everything before is piece and origin
    let (head, dest) = base.split_at(base.len() - 2);
    let mut chars = head.chars();
    let kind = chars
        .next()
        .and_then(PieceKind::from_letter)
        .ok_or_else(invalid)?;
    let origin = parse_origin(chars.as_str()).ok_or_else(invalid)?;
    Ok(PieceMove {
        kind,
        origin,
        to: coord_to_square(dest)?,
        capture: false,
        promotion: None,
    })
}

/// File, rank, or file-and-rank disambiguator following the piece letter.
fn parse_origin(s: &str) -> Option<Origin> {
    let mut chars = s.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (None, _, _) => Some(Origin::default()),
        (Some(c), None, _) => {
            if let Some(file) = file_from_char(c) {
                Some(Origin {
                    file: Some(file),
                    rank: None,
                })
            } else {
                rank_from_char(c).map(|rank| Origin {
                    file: None,
                    rank: Some(rank),
                })
            }
        }
        (Some(f), Some(r), None) => Some(Origin {
            file: Some(file_from_char(f)?),
            rank: Some(rank_from_char(r)?),
        }),
        _ => None,
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
