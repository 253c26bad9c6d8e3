//! Core types for chess and checkers.
//!
//! This crate provides the fundamental types shared by the rule engine:
//! - [`Color`] for the two sides
//! - [`Square`] for board coordinates, with text parsing
//! - [`ChessPiece`], [`Checker`] and the [`BoardPiece`] trait
//! - [`Move`] for move requests
//! - placement strings for describing positions

mod color;
mod mov;
mod piece;
mod placement;
mod square;

pub use color::Color;
pub use mov::{Move, MoveFlag};
pub use piece::{
    BoardPiece, Checker, CheckerKind, ChessPiece, PieceKind, PromotionChoice, PromotionParseError,
};
pub use placement::{parse_placement, write_placement, PlacementError, CHESS_STARTPOS};
pub use square::{Square, SquareParseError};
