//! Chess rules engine driven by simplified algebraic notation.
//!
//! A [`Game`] holds the board, the side to move and the log of accepted moves.
//! Tokens such as `e4`, `Nfxd4`, `O-O` or `bxa8=Q` are parsed, checked against the
//! position (reach, blocking, ambiguity, own-king safety) and applied atomically.
//!
//! ```
//! use chess_rules::{Game, PieceKind, Side};
//!
//! let mut game = Game::from_moves("e4 e5 Qh5 Nc6 Qxf7").unwrap();
//! assert!(game.in_check());
//! assert_eq!(game.moves().last().map(String::as_str), Some("Qxf7+"));
//!
//! game.apply_move("Kxf7").unwrap();
//! let king = game.piece_at("f7").unwrap().unwrap();
//! assert_eq!((king.kind, king.side), (PieceKind::King, Side::Black));
//! ```

pub mod attacks;
pub mod board;
pub mod error;
pub mod executor;
pub mod game;
pub mod notation;
pub mod render;
pub mod types;

pub use attacks::*;
pub use board::*;
pub use error::*;
pub use executor::execute;
pub use game::*;
pub use notation::*;
pub use render::*;
pub use types::*;
