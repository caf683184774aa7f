//! Line-oriented command loop over a single game

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use chess_rules::{Game, diagram};
use tracing::{debug, info, warn};

use crate::config::CliConfig;
use crate::record::GameRecord;

pub const HELP: &str = "\
commands:
  new [moves...]     start over, optionally playing moves from the start
  move <token>       play one move, e.g. e4, Nbd7, exd5, O-O, e8=Q
  moves <tokens...>  play several moves, stopping at the first rejected one
  at <square>        show the piece on a square
  check              is the side to move in check?
  turn               show the side to move
  notation           print the move log
  board              draw the board
  save <path>        write the game record as JSON
  load <path>        replace the game with a saved record
  help               show this text
  quit               leave";

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    game: Game,
    config: CliConfig,
}

impl Session {
    pub fn new(config: CliConfig) -> Self {
        Self {
            game: Game::new(),
            config,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Reads commands until `quit` or end of input. A failing command prints
    /// `error: ...` and the loop carries on.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read command")?;
            match self.execute(&line, out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => {
                    warn!(command = %line.trim(), "{err:#}");
                    writeln!(out, "error: {err:#}")?;
                }
            }
            out.flush()?;
        }
        Ok(())
    }

    /// Runs a single command line.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let line = line.trim();
        let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        debug!(cmd, rest, "command");

        match cmd {
            "" => {}
            "new" => {
                let game = Game::from_moves(rest)?;
                self.game = game;
                self.after_moves(out)?;
            }
            "move" => {
                if rest.is_empty() {
                    bail!("usage: move <token>");
                }
                self.game.apply_move(rest)?;
                self.after_moves(out)?;
            }
            "moves" => {
                let before = self.game.moves().len();
                let result = self.game.play(rest);
                if self.game.moves().len() > before {
                    self.after_moves(out)?;
                }
                result?;
            }
            "at" => {
                let piece = self.game.piece_at(rest)?;
                match piece {
                    Some(pc) => writeln!(out, "{rest}: {pc}")?,
                    None => writeln!(out, "{rest}: empty")?,
                }
            }
            "check" => {
                let side = self.game.side_to_move();
                if self.game.in_check() {
                    writeln!(out, "{side} is in check")?;
                } else {
                    writeln!(out, "{side} is not in check")?;
                }
            }
            "turn" => writeln!(out, "{} to move", self.game.side_to_move())?,
            "notation" => writeln!(out, "{}", self.game.algebraic_notation())?,
            "board" => self.print_board(out)?,
            "save" => {
                if rest.is_empty() {
                    bail!("usage: save <path>");
                }
                self.save(Path::new(rest))?;
                writeln!(out, "saved {} moves to {rest}", self.game.moves().len())?;
            }
            "load" => {
                if rest.is_empty() {
                    bail!("usage: load <path>");
                }
                self.game = GameRecord::load(Path::new(rest))?.replay()?;
                info!(path = rest, moves = self.game.moves().len(), "game loaded");
                writeln!(out, "loaded {} moves from {rest}", self.game.moves().len())?;
                if self.config.show_board {
                    self.print_board(out)?;
                }
            }
            "help" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => bail!("unknown command `{other}`, try `help`"),
        }
        Ok(Flow::Continue)
    }

    fn after_moves<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.game.moves().last() {
            Some(last) => writeln!(out, "ok {last}")?,
            None => writeln!(out, "ok")?,
        }
        if self.config.show_board {
            self.print_board(out)?;
        }
        if let Some(path) = &self.config.autosave {
            self.save(path)?;
        }
        Ok(())
    }

    fn print_board<W: Write>(&self, out: &mut W) -> Result<()> {
        let text = diagram(self.game.position(), self.config.diagram_options());
        write!(out, "{text}")?;
        Ok(())
    }

    fn save(&self, path: &Path) -> Result<()> {
        GameRecord::from_game(&self.game).save(path)?;
        info!(path = %path.display(), moves = self.game.moves().len(), "game saved");
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
