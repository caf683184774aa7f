//! Game controller: applies notation tokens to a position and keeps the move log.

use tracing::debug;

use crate::board::Position;
use crate::error::MoveError;
use crate::executor::execute;
use crate::notation::{parse_move, strip_move_number};
use crate::types::*;

/// Wraps the serialized move log for display.
pub const NOTATION_DELIMITER: char = '`';

/// A game in progress: the position plus every accepted move token, in order.
///
/// Moves are applied atomically. A rejected token leaves the position, the side to
/// move and the log exactly as they were.
#[derive(Clone, Debug, Default)]
pub struct Game {
    position: Position,
    moves: Vec<String>,
}

impl Game {
    /// A game from the standard starting position.
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    /// A game from a custom setup, with an empty move log.
    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            moves: Vec::new(),
        }
    }

    /// A game from the starting position with `moves` already played.
    pub fn from_moves(moves: &str) -> Result<Self, MoveError> {
        let mut game = Self::new();
        game.play(moves)?;
        Ok(game)
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn side_to_move(&self) -> Side {
        self.position.side_to_move()
    }

    /// Side the board is viewed from when rendered: the side to move.
    pub fn orientation(&self) -> Side {
        self.side_to_move()
    }

    /// Accepted tokens, `+`-annotated where they gave check.
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    pub fn piece_at(&self, square: &str) -> Result<Option<Piece>, MoveError> {
        Ok(self.position.piece_at(Square::parse(square)?))
    }

    /// Is the side to move in check?
    pub fn in_check(&self) -> bool {
        self.position.in_check(self.side_to_move())
    }

    /// Applies whitespace-separated tokens in order, skipping move numbers like `1.`.
    ///
    /// Stops at the first rejected token; the moves before it stay applied.
    pub fn play(&mut self, sequence: &str) -> Result<(), MoveError> {
        for token in sequence.split_whitespace() {
            let token = strip_move_number(token);
            if token.is_empty() {
                continue;
            }
            self.apply_move(token)?;
        }
        Ok(())
    }

    /// Applies a single move token.
    pub fn apply_move(&mut self, token: &str) -> Result<(), MoveError> {
        let token = strip_move_number(token.trim());
        let mover = self.side_to_move();

        let next = match self.resolve(token) {
            Ok(next) => next,
            Err(err) => {
                debug!(%token, side = %mover, error = %err, "move rejected");
                return Err(err);
            }
        };
        self.position = next;

        let check = self.in_check();
        let mut entry = token.to_string();
        if check && !entry.ends_with(['+', '#']) {
            entry.push('+');
        }
        debug!(token = %entry, side = %mover, check, "move applied");
        self.moves.push(entry);
        Ok(())
    }

    /// Plays `token` on a scratch copy and returns it with the turn passed on.
    fn resolve(&self, token: &str) -> Result<Position, MoveError> {
        let intent = parse_move(token)?;
        let side = self.side_to_move();

        let to = intent.destination(side);
        if let Some(piece) = self.position.piece_at(to)
            && piece.side == side
        {
            return Err(MoveError::DestinationBlocked { square: to, piece });
        }

        let mut scratch = self.position.clone();
        execute(&mut scratch, intent)?;
        if scratch.in_check(side) {
            return Err(MoveError::OwnKingInCheck);
        }
        scratch.flip_turn();
        Ok(scratch)
    }

    /// The move log as numbered notation, e.g. `` `1.e4 e5 2.Nf3` ``.
    /// An empty log gives an empty string.
    pub fn algebraic_notation(&self) -> String {
        if self.moves.is_empty() {
            return String::new();
        }
        let text = self
            .moves
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| format!("{}.{}", i + 1, pair.join(" ")))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{NOTATION_DELIMITER}{text}{NOTATION_DELIMITER}")
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
