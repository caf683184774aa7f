use crate::error::SetupError;
use crate::types::*;

/// The 8×8 grid, the side to move, and where each side's king stands.
///
/// Grid cells are indexed by [`Square::index`], so index 0 is a8 and index 63 is h1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: [Option<Piece>; 64],
    side_to_move: Side,
    kings: [Option<Square>; 2],
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    /// An empty board with `side_to_move` to play. Use [`Position::place`] to set it up.
    pub fn empty(side_to_move: Side) -> Self {
        Position {
            board: [None; 64],
            side_to_move,
            kings: [None; 2],
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position::empty(Side::White);

        // Pawns
        for f in 0..8 {
            p.set_piece(
                Square::at(f, Side::White.pawn_rank()),
                Some(Piece::new(PieceKind::Pawn, Side::White)),
            );
            p.set_piece(
                Square::at(f, Side::Black.pawn_rank()),
                Some(Piece::new(PieceKind::Pawn, Side::Black)),
            );
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            for side in [Side::White, Side::Black] {
                p.set_piece(
                    Square::at(f as u8, side.home_rank()),
                    Some(Piece::new(kind, side)),
                );
            }
        }
        p
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub(crate) fn flip_turn(&mut self) {
        self.side_to_move = self.side_to_move.other();
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()]
    }

    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.kings[side.idx()]
    }

    /// Puts `piece` on `sq`, replacing whatever stood there.
    ///
    /// Fails if this would give a side a second king.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Result<(), SetupError> {
        if piece.kind == PieceKind::King
            && let Some(existing) = self.king_square(piece.side)
            && existing != sq
        {
            return Err(SetupError::DuplicateKing(piece.side, existing));
        }
        self.set_piece(sq, Some(piece));
        Ok(())
    }

    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        let old = self.piece_at(sq);
        self.set_piece(sq, None);
        old
    }

    /// Every square with its occupant, row by row from a8 to h1.
    pub fn squares(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        self.board
            .iter()
            .enumerate()
            .map(|(i, pc)| (Square::from_index(i), *pc))
    }

    /// Writes a cell and keeps the king lookup in sync.
    pub(crate) fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        if let Some(old) = self.board[sq.index()]
            && old.kind == PieceKind::King
            && self.kings[old.side.idx()] == Some(sq)
        {
            self.kings[old.side.idx()] = None;
        }
        self.board[sq.index()] = pc;
        if let Some(new) = pc
            && new.kind == PieceKind::King
        {
            self.kings[new.side.idx()] = Some(sq);
        }
    }

    /// Moves the occupant of `from` onto `to`, capturing anything there.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        let moved = self.piece_at(from);
        self.set_piece(from, None);
        self.set_piece(to, moved);
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
