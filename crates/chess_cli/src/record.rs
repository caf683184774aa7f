//! Game records saved as JSON

use std::path::Path;

use anyhow::{Context, Result, ensure};
use chess_rules::{Game, Side};
use serde::{Deserialize, Serialize};

/// A finished or in-progress game as written to disk.
///
/// Only `moves` is authoritative. Loading replays them from the starting
/// position, and the other fields must agree with the replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    /// Backtick-delimited numbered notation
    pub notation: String,
    pub side_to_move: Side,
    pub in_check: bool,
}

impl GameRecord {
    pub fn from_game(game: &Game) -> Self {
        Self {
            moves: game.moves().to_vec(),
            notation: game.algebraic_notation(),
            side_to_move: game.side_to_move(),
            in_check: game.in_check(),
        }
    }

    /// Rebuilds the game by playing every recorded move.
    pub fn replay(&self) -> Result<Game> {
        let game = Game::from_moves(&self.moves.join(" ")).context("recorded moves do not replay")?;
        ensure!(
            game.side_to_move() == self.side_to_move,
            "record says {} to move, replay gives {}",
            self.side_to_move,
            game.side_to_move()
        );
        ensure!(
            game.in_check() == self.in_check,
            "record says in_check = {}, replay gives {}",
            self.in_check,
            game.in_check()
        );
        ensure!(
            game.algebraic_notation() == self.notation,
            "record notation {:?} does not match the moves",
            self.notation
        );
        Ok(game)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize game record")?;
        std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
