//! Checkers: man and king movement, jumps, crowning and capture chains.
//!
//! Men move and capture diagonally forward; kings fly along open diagonals
//! in every direction. The rule set wrapping these is
//! [`Checkers`](crate::Checkers).

mod board;
pub mod executor;
pub mod pieces;

pub use pieces::{can_capture, candidate_moves, jumped_square, CheckerMoves};
