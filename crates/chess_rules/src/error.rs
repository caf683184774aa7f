//! Error types for move application and position setup.

use thiserror::Error;

use crate::types::{Piece, PieceKind, Side, Square};

/// Reasons a move token is rejected. A rejected move never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Malformed coordinate string
    #[error("square does not exist: {0}")]
    InvalidSquare(String),

    /// Token does not match any recognized move shape
    #[error("invalid move: {0}")]
    InvalidMove(String),

    /// Promotion letter is not one of Q/R/B/N, or the move is not a pawn move
    #[error("invalid promotion: {0}")]
    InvalidPromotion(String),

    #[error("invalid castle move: {0}")]
    InvalidCastle(String),

    /// The destination holds a piece of the moving side
    #[error("position {square} blocked by {piece}")]
    DestinationBlocked { square: Square, piece: Piece },

    #[error("no {kind} found that can move to {square}")]
    NoPieceCanReach { kind: PieceKind, square: Square },

    #[error("move ambiguous: {count} {kind}s can move to {square}")]
    AmbiguousMove {
        kind: PieceKind,
        count: usize,
        square: Square,
    },

    /// The move would leave the mover's own king attacked
    #[error("king is in check")]
    OwnKingInCheck,
}

/// Errors raised while building a custom position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("{0} already has a king on {1}")]
    DuplicateKing(Side, Square),
}
