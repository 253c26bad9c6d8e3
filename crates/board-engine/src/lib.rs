//! Rule engine for chess and checkers.
//!
//! This crate provides:
//! - [`Board`] - 8x8 grid of optional pieces, generic over the game
//! - [`SquareSet`] - 64-bit set of squares returned by every move query
//! - [`RuleSet`] - trait implemented by [`StandardChess`] and [`Checkers`]
//! - [`GameSession`] - select-then-destination turn management
//! - [`EngineConfig`] - rule policies loaded from TOML
//! - Text diagrams via [`render`]
//!
//! # Architecture
//!
//! Move queries are layered. Per-piece rules produce geometric candidates;
//! for chess a legality filter plays each candidate on a cloned board and
//! drops those leaving the mover's king attacked; an executor commits the
//! chosen move, handling castling, en passant, promotion, checkers jumps,
//! crowning and capture chains. The session sits on top and owns the board.
//!
//! # Example
//!
//! ```
//! use board_core::Square;
//! use board_engine::{GameSession, StandardChess};
//!
//! let mut session = GameSession::new(StandardChess);
//! let e2 = session.parse_square("e2").unwrap();
//! let targets = session.select(e2).unwrap();
//! println!("{}", session.render(targets));
//!
//! session.choose_destination(Square::from_algebraic("e4").unwrap(), None).unwrap();
//! assert_eq!(session.turn().ply, 1);
//! ```

mod board;
pub mod checkers;
pub mod chess;
mod config;
mod error;
mod movelist;
mod rays;
mod render;
pub mod rules;
mod session;
mod square_set;

pub use board::Board;
pub use config::{CheckersConfig, ConfigError, EngineConfig};
pub use error::{GameError, SelectionFault};
pub use movelist::MoveList;
pub use render::{render, Labels};
pub use rules::{Checkers, CommitResult, RuleSet, StandardChess};
pub use session::{GameSession, Phase, TurnState};
pub use square_set::SquareSet;
