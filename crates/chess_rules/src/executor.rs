//! Per-piece move execution.
//!
//! Each executor works backwards from the destination: it searches the squares a
//! piece of the requested kind could have come from, filters them through the
//! token's disambiguator, and moves the single match. Callers check destination
//! occupancy and king safety; see [`crate::Game::apply_move`].

use tracing::trace;

use crate::attacks::{DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS};
use crate::board::Position;
use crate::error::MoveError;
use crate::notation::{CastleSide, MoveIntent, PieceMove};
use crate::types::*;

/// Applies `intent` for the side to move, mutating `pos` in place.
pub fn execute(pos: &mut Position, intent: MoveIntent) -> Result<(), MoveError> {
    let side = pos.side_to_move();
    let mv = match intent {
        MoveIntent::Castle(castle) => return castle_king(pos, side, castle),
        MoveIntent::Piece(mv) => mv,
    };

    if mv.promotion.is_some() && mv.to.rank() != side.other().home_rank() {
        return Err(MoveError::InvalidPromotion(format!(
            "pawn cannot promote on {}",
            mv.to
        )));
    }

    let from = match mv.kind {
        PieceKind::Pawn if mv.capture => pawn_capture_origin(pos, side, &mv)?,
        PieceKind::Pawn => pawn_push_origin(pos, side, &mv)?,
        PieceKind::Knight => single(step_candidates(pos, side, &mv, &KNIGHT_OFFSETS), &mv)?,
        PieceKind::Bishop => first(ray_candidates(pos, side, &mv, &DIAGONALS, mv.kind), &mv)?,
        PieceKind::Rook => single(ray_candidates(pos, side, &mv, &ORTHOGONALS, mv.kind), &mv)?,
        PieceKind::Queen => queen_origin(pos, side, &mv)?,
        PieceKind::King => first(step_candidates(pos, side, &mv, &KING_OFFSETS), &mv)?,
    };

    trace!(kind = %mv.kind, %from, to = %mv.to, "resolved origin");
    pos.relocate(from, mv.to);
    if let Some(kind) = mv.promotion {
        pos.set_piece(mv.to, Some(Piece::new(kind, side)));
    }
    Ok(())
}

fn no_piece(mv: &PieceMove) -> MoveError {
    MoveError::NoPieceCanReach {
        kind: mv.kind,
        square: mv.to,
    }
}

/// Exactly one candidate, or an error naming how many there were.
fn single(candidates: Vec<Square>, mv: &PieceMove) -> Result<Square, MoveError> {
    match candidates.as_slice() {
        [] => Err(no_piece(mv)),
        [from] => Ok(*from),
        many => Err(MoveError::AmbiguousMove {
            kind: mv.kind,
            count: many.len(),
            square: mv.to,
        }),
    }
}

fn first(candidates: Vec<Square>, mv: &PieceMove) -> Result<Square, MoveError> {
    candidates.first().copied().ok_or_else(|| no_piece(mv))
}

/// Own pieces of `mv.kind` one fixed step away from the destination.
fn step_candidates(
    pos: &Position,
    side: Side,
    mv: &PieceMove,
    offsets: &[(i8, i8)],
) -> Vec<Square> {
    let wanted = Piece::new(mv.kind, side);
    offsets
        .iter()
        .filter_map(|&(df, dr)| mv.to.offset(df, dr))
        .filter(|&s| mv.origin.matches(s) && pos.piece_at(s) == Some(wanted))
        .collect()
}

/// Own pieces of `kind` that are the first piece met on a ray out of the destination.
fn ray_candidates(
    pos: &Position,
    side: Side,
    mv: &PieceMove,
    dirs: &[(i8, i8)],
    kind: PieceKind,
) -> Vec<Square> {
    let wanted = Piece::new(kind, side);
    let found: Vec<Square> = dirs
        .iter()
        .filter_map(|&dir| pos.first_occupied(mv.to, dir))
        .filter(|&(s, pc)| pc == wanted && mv.origin.matches(s))
        .map(|(s, _)| s)
        .collect();
    trace!(%kind, to = %mv.to, candidates = found.len(), "ray walk");
    found
}

/// Diagonal queens win outright; only when none exists are the files and ranks
/// searched, so a diagonal and an orthogonal queen are never reported as ambiguous.
fn queen_origin(pos: &Position, side: Side, mv: &PieceMove) -> Result<Square, MoveError> {
    match ray_candidates(pos, side, mv, &DIAGONALS, PieceKind::Queen).first() {
        Some(&from) => Ok(from),
        None => single(
            ray_candidates(pos, side, mv, &ORTHOGONALS, PieceKind::Queen),
            mv,
        ),
    }
}

fn pawn_push_origin(pos: &Position, side: Side, mv: &PieceMove) -> Result<Square, MoveError> {
    // Pawns only capture diagonally
    if pos.piece_at(mv.to).is_some() {
        return Err(no_piece(mv));
    }

    let pawn = Some(Piece::new(PieceKind::Pawn, side));
    let back = -side.forward();

    let one = mv.to.offset(0, back).ok_or_else(|| no_piece(mv))?;
    match pos.piece_at(one) {
        found if found == pawn => return Ok(one),
        Some(_) => return Err(no_piece(mv)),
        None => {}
    }

    // Double step from the starting rank through the empty square checked above
    match one.offset(0, back) {
        Some(two) if two.rank() == side.pawn_rank() && pos.piece_at(two) == pawn => Ok(two),
        _ => Err(no_piece(mv)),
    }
}

fn pawn_capture_origin(pos: &Position, side: Side, mv: &PieceMove) -> Result<Square, MoveError> {
    let file = mv
        .origin
        .file
        .ok_or_else(|| MoveError::InvalidMove(format!("pawn capture on {} needs a file", mv.to)))?;

    if (file as i8 - mv.to.file() as i8).abs() != 1 {
        return Err(no_piece(mv));
    }
    let from = mv
        .to
        .offset(file as i8 - mv.to.file() as i8, -side.forward())
        .ok_or_else(|| no_piece(mv))?;

    if pos.piece_at(from) != Some(Piece::new(PieceKind::Pawn, side)) {
        return Err(no_piece(mv));
    }
    // No en passant: something must be there to take
    if !pos.piece_at(mv.to).is_some_and(|pc| pc.side != side) {
        return Err(no_piece(mv));
    }
    Ok(from)
}

/// Castling checks current occupancy only: king and rook on their home squares and
/// nothing in between. Whether either has moved before is not tracked.
fn castle_king(pos: &mut Position, side: Side, castle: CastleSide) -> Result<(), MoveError> {
    let rank = side.home_rank();
    let king_from = Square::at(4, rank);
    let rook_from = castle.rook_origin(side);

    if pos.piece_at(king_from) != Some(Piece::new(PieceKind::King, side)) {
        return Err(MoveError::InvalidCastle(format!(
            "no {side} king on {king_from}"
        )));
    }
    for &file in castle.between_files() {
        let sq = Square::at(file, rank);
        if let Some(pc) = pos.piece_at(sq) {
            return Err(MoveError::InvalidCastle(format!("{sq} occupied by {pc}")));
        }
    }
    if pos.piece_at(rook_from) != Some(Piece::new(PieceKind::Rook, side)) {
        return Err(MoveError::InvalidCastle(format!(
            "no {side} rook on {rook_from}"
        )));
    }

    pos.relocate(king_from, castle.king_target(side));
    pos.relocate(rook_from, castle.rook_target(side));
    Ok(())
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod executor_tests;
