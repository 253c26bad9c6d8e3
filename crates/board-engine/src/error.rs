//! Error types for game sessions.

use board_core::{Square, SquareParseError};
use thiserror::Error;

/// Why a square could not be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionFault {
    #[error("the square is empty")]
    Empty,
    #[error("the piece belongs to the other side")]
    WrongColor,
    #[error("the piece has no legal moves")]
    NoLegalMoves,
}

/// Errors returned by session and executor operations.
///
/// None of these are fatal: the session state is left exactly as it was
/// before the rejected request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("cannot select {square}: {reason}")]
    InvalidSelection { square: Square, reason: SelectionFault },

    #[error("illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("no piece is selected")]
    NothingSelected,

    #[error("the capture sequence must continue from {0}")]
    ChainInProgress(Square),

    #[error("moving to {0} promotes: a promotion choice is required")]
    PromotionRequired(Square),

    #[error("no piece on {0} to move")]
    EmptySource(Square),

    #[error("malformed input: {0}")]
    MalformedInput(#[from] SquareParseError),
}
