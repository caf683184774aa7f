//! Plain-text board diagrams.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::types::*;

/// Which side of the board is drawn at the bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Flip with the turn, the way a player at the board sees it
    #[default]
    SideToMove,
    White,
    Black,
}

impl Orientation {
    pub fn viewer(self, pos: &Position) -> Side {
        match self {
            Orientation::SideToMove => pos.side_to_move(),
            Orientation::White => Side::White,
            Orientation::Black => Side::Black,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagramOptions {
    pub orientation: Orientation,
    pub coordinates: bool,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::SideToMove,
            coordinates: true,
        }
    }
}

/// Renders `pos` as eight text rows: uppercase White, lowercase Black, `.` empty.
pub fn diagram(pos: &Position, options: DiagramOptions) -> String {
    let flipped = options.orientation.viewer(pos) == Side::Black;
    let mut out = String::new();

    for row in 0..8u8 {
        let rank = if flipped { 7 - row } else { row };
        let cells: Vec<String> = (0..8u8)
            .map(|col| {
                let file = if flipped { 7 - col } else { col };
                pos.piece_at(Square::at(file, rank))
                    .map_or('.', |pc| pc.to_char())
                    .to_string()
            })
            .collect();

        if options.coordinates {
            out.push(Square::at(0, rank).rank_char());
            out.push(' ');
        }
        out.push_str(&cells.join(" "));
        out.push('\n');
    }

    if options.coordinates {
        let files: Vec<String> = (0..8u8)
            .map(|col| {
                let file = if flipped { 7 - col } else { col };
                Square::at(file, 0).file_char().to_string()
            })
            .collect();
        out.push_str("  ");
        out.push_str(&files.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
