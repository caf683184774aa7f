//! chessbot: play a game by typing moves in algebraic notation

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chess_cli::{CliConfig, Session};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chessbot", version, about = "Play chess by typing moves in algebraic notation")]
struct Args {
    /// TOML settings file; defaults apply if it does not exist
    #[arg(short, long, default_value = "chessbot.toml")]
    config: PathBuf,

    /// Moves to play before reading commands, e.g. "e4 e5 Nf3"
    #[arg(short, long)]
    moves: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = CliConfig::load(&args.config)?;

    // RUST_LOG wins over the config file
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut session = Session::new(config);
    let mut stdout = io::stdout().lock();
    if let Some(moves) = args.moves {
        session.execute(&format!("new {moves}"), &mut stdout)?;
    }
    session.run(io::stdin().lock(), &mut stdout)
}
