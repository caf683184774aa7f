//! Command-line driver for `chess_rules`
//!
//! Reads one command per line from stdin and prints results to stdout.
//! Settings come from a TOML file and games can be saved as JSON records.

pub mod config;
pub mod record;
pub mod session;

pub use config::CliConfig;
pub use record::GameRecord;
pub use session::{Flow, HELP, Session};
