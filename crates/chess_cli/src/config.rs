//! Driver settings, read from an optional TOML file

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chess_rules::{DiagramOptions, Orientation};
use serde::{Deserialize, Serialize};

/// Settings for the `chessbot` driver. Every field has a default, so a config
/// file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Print the board after every accepted move
    pub show_board: bool,
    pub orientation: Orientation,
    /// Draw file and rank labels around the board
    pub coordinates: bool,
    /// Used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Write the game record here after every accepted move
    pub autosave: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            orientation: Orientation::SideToMove,
            coordinates: true,
            log_filter: "info".to_string(),
            autosave: None,
        }
    }
}

impl CliConfig {
    /// Loads `path`, falling back to the defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn diagram_options(&self) -> DiagramOptions {
        DiagramOptions {
            orientation: self.orientation,
            coordinates: self.coordinates,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
