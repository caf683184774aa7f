//! Attack detection over the mailbox grid.
//!
//! Everything here is a read-only query, so it is safe to call on a scratch
//! position after a speculative move.

use crate::board::Position;
use crate::types::*;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

impl Position {
    /// Is `side`'s king attacked? A side without a king is never in check.
    pub fn in_check(&self, side: Side) -> bool {
        match self.king_square(side) {
            Some(ksq) => self.is_square_attacked(ksq, side.other()),
            None => false,
        }
    }

    /// The first occupied square walking outward from `from` along `dir`.
    pub fn first_occupied(&self, from: Square, dir: (i8, i8)) -> Option<(Square, Piece)> {
        from.ray(dir)
            .find_map(|s| self.piece_at(s).map(|pc| (s, pc)))
    }

    pub fn is_square_attacked(&self, target: Square, by: Side) -> bool {
        let holds = |s: Option<Square>, kind: PieceKind| {
            s.and_then(|s| self.piece_at(s)) == Some(Piece::new(kind, by))
        };

        // Sliding: rook/queen on files and ranks, bishop/queen on diagonals
        for dir in ORTHOGONALS {
            if let Some((_, pc)) = self.first_occupied(target, dir)
                && pc.side == by
                && matches!(pc.kind, PieceKind::Rook | PieceKind::Queen)
            {
                return true;
            }
        }
        for dir in DIAGONALS {
            if let Some((_, pc)) = self.first_occupied(target, dir)
                && pc.side == by
                && matches!(pc.kind, PieceKind::Bishop | PieceKind::Queen)
            {
                return true;
            }
        }

        if KNIGHT_OFFSETS
            .iter()
            .any(|&(df, dr)| holds(target.offset(df, dr), PieceKind::Knight))
        {
            return true;
        }

        // Pawns of `by` capture towards their forward direction, so they sit one
        // rank behind the target from their own point of view.
        let behind = -by.forward();
        if [-1, 1]
            .iter()
            .any(|&df| holds(target.offset(df, behind), PieceKind::Pawn))
        {
            return true;
        }

        // King adjacency
        KING_OFFSETS
            .iter()
            .any(|&(df, dr)| holds(target.offset(df, dr), PieceKind::King))
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
