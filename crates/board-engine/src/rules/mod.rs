//! Rule set abstraction over the supported games.
//!
//! This module provides the [`RuleSet`] trait which abstracts over chess and
//! checkers. The session is rule-agnostic: it delegates move generation,
//! move construction and commits to the active rule set.

mod checkers;
mod standard;

pub use checkers::Checkers;
pub use standard::StandardChess;

use board_core::{BoardPiece, Color, Move, PromotionChoice, Square, SquareParseError};

use crate::render::Labels;
use crate::{Board, GameError, SquareSet};

/// What a committed move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitResult<P> {
    /// The move as committed, with its special-move flag filled in.
    pub mv: Move,
    /// The piece taken off the board, if any.
    pub captured: Option<P>,
    /// True if the moving piece was promoted (pawn promotion or crowning).
    pub promoted: bool,
    /// Further captures the same piece must continue with, if the turn is
    /// not over yet.
    pub chain: Option<SquareSet>,
}

/// Trait for implementing a game's rules.
///
/// # Example
///
/// ```
/// use board_core::{Color, Square};
/// use board_engine::rules::RuleSet;
/// use board_engine::StandardChess;
///
/// let board = StandardChess.initial_board();
/// let e2 = Square::from_algebraic("e2").unwrap();
/// let targets = StandardChess.legal_targets(&board, e2, None);
/// assert_eq!(targets.count(), 2);
/// assert!(StandardChess.has_legal_moves(&board, Color::White, None));
/// ```
pub trait RuleSet {
    /// The piece type this game is played with.
    type Piece: BoardPiece;

    /// Returns the initial layout for this game.
    fn initial_board(&self) -> Board<Self::Piece>;

    /// Returns the legal destinations of the piece on `from`.
    ///
    /// Empty when the square is empty or the piece cannot move.
    fn legal_targets(
        &self,
        board: &Board<Self::Piece>,
        from: Square,
        last_move: Option<Move>,
    ) -> SquareSet;

    /// Returns true if moving from `from` to `to` needs a promotion choice.
    fn requires_promotion(&self, _board: &Board<Self::Piece>, _from: Square, _to: Square) -> bool {
        false
    }

    /// Builds the move request for a destination taken from the legal targets.
    fn build_move(
        &self,
        board: &Board<Self::Piece>,
        from: Square,
        to: Square,
        promotion: Option<PromotionChoice>,
    ) -> Move;

    /// Commits a move to the board.
    fn apply(
        &self,
        board: &mut Board<Self::Piece>,
        mv: Move,
    ) -> Result<CommitResult<Self::Piece>, GameError>;

    /// Returns true if `color` is in check. Games without check return false.
    fn is_in_check(&self, _board: &Board<Self::Piece>, _color: Color) -> bool {
        false
    }

    /// Returns true if any piece of `color` has a legal target.
    fn has_legal_moves(
        &self,
        board: &Board<Self::Piece>,
        color: Color,
        last_move: Option<Move>,
    ) -> bool {
        board
            .pieces_of(color)
            .any(|(from, _)| !self.legal_targets(board, from, last_move).is_empty())
    }

    /// Parses a square as players of this game type it.
    fn parse_square(&self, text: &str) -> Result<Square, SquareParseError>;

    /// Returns the label style for board diagrams.
    fn labels(&self) -> Labels;
}
