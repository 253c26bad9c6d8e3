//! Turn-by-turn game management.
//!
//! A [`GameSession`] owns the board and turn state of one game and walks the
//! select-then-destination protocol:
//!
//! - `AwaitingSelection`: the active color picks one of its pieces
//! - `AwaitingDestination`: the legal targets of that piece are known and
//!   one of them is chosen, committing the move
//!
//! A checkers capture that can continue keeps the same color in
//! `AwaitingDestination` on the landing square until the chain ends. Every
//! rejected request leaves the session exactly as it was.

use board_core::{BoardPiece, Color, Move, PlacementError, PromotionChoice, Square};

use crate::render::render;
use crate::rules::{CommitResult, RuleSet, StandardChess};
use crate::{Board, GameError, SelectionFault, SquareSet};

/// Whose turn it is and how many turns have been completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    /// The color to move.
    pub active: Color,
    /// Completed turns. A whole checkers capture chain counts once.
    pub ply: u32,
}

/// Where the session is in the selection protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the active color to pick a piece.
    AwaitingSelection,
    /// A piece is selected and its legal targets are known.
    AwaitingDestination {
        /// The selected piece's square.
        from: Square,
        /// Where the selected piece may legally move.
        targets: SquareSet,
        /// True while a checkers capture chain is in progress; the selection
        /// cannot be changed or cancelled.
        chained: bool,
    },
}

/// One game in progress under a rule set.
#[derive(Debug, Clone)]
pub struct GameSession<R: RuleSet> {
    rules: R,
    board: Board<R::Piece>,
    turn: TurnState,
    /// The most recently committed move, kept for en passant.
    last_move: Option<Move>,
    phase: Phase,
}

impl Default for GameSession<StandardChess> {
    fn default() -> Self {
        Self::new(StandardChess)
    }
}

impl<R: RuleSet> GameSession<R> {
    /// Creates a session at the game's initial layout, White to move.
    pub fn new(rules: R) -> Self {
        let board = rules.initial_board();
        Self::from_board(rules, board, Color::White)
    }

    /// Creates a session from a custom board.
    pub fn from_board(rules: R, board: Board<R::Piece>, active: Color) -> Self {
        GameSession {
            rules,
            board,
            turn: TurnState { active, ply: 0 },
            last_move: None,
            phase: Phase::AwaitingSelection,
        }
    }

    /// Creates a session from a placement string.
    pub fn from_placement(rules: R, placement: &str, active: Color) -> Result<Self, PlacementError> {
        let board = Board::from_placement(placement)?;
        Ok(Self::from_board(rules, board, active))
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board<R::Piece> {
        &self.board
    }

    /// Returns the turn state.
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Returns the color to move.
    pub fn active_color(&self) -> Color {
        self.turn.active
    }

    /// Returns the most recently committed move.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Returns the selection phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the rule set.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Returns the squares the piece on `from` may move to right now.
    ///
    /// Empty for squares not holding a piece of the active color. During a
    /// capture chain only the chaining piece has targets.
    pub fn legal_targets(&self, from: Square) -> SquareSet {
        match self.phase {
            Phase::AwaitingDestination {
                from: chain_from,
                targets,
                chained: true,
            } => {
                if chain_from == from {
                    targets
                } else {
                    SquareSet::EMPTY
                }
            }
            _ if self.board.is_color(from, self.turn.active) => {
                self.rules.legal_targets(&self.board, from, self.last_move)
            }
            _ => SquareSet::EMPTY,
        }
    }

    /// Selects the piece on `sq` and returns its legal targets.
    ///
    /// A different piece may be selected while a destination is pending,
    /// except during a capture chain.
    pub fn select(&mut self, sq: Square) -> Result<SquareSet, GameError> {
        if let Phase::AwaitingDestination {
            from,
            chained: true,
            ..
        } = self.phase
        {
            tracing::debug!("Selection of {} rejected: chain continues from {}", sq, from);
            return Err(GameError::ChainInProgress(from));
        }

        let fault = match self.board.piece_at(sq) {
            None => Some(SelectionFault::Empty),
            Some(piece) if piece.color() != self.turn.active => Some(SelectionFault::WrongColor),
            Some(_) => None,
        };
        if let Some(reason) = fault {
            tracing::debug!("Selection of {} rejected: {}", sq, reason);
            return Err(GameError::InvalidSelection { square: sq, reason });
        }

        let targets = self.rules.legal_targets(&self.board, sq, self.last_move);
        if targets.is_empty() {
            tracing::debug!("Selection of {} rejected: no legal moves", sq);
            return Err(GameError::InvalidSelection {
                square: sq,
                reason: SelectionFault::NoLegalMoves,
            });
        }

        tracing::debug!("{} selected {} with {} targets", self.turn.active, sq, targets.count());
        self.phase = Phase::AwaitingDestination {
            from: sq,
            targets,
            chained: false,
        };
        Ok(targets)
    }

    /// Drops the current selection.
    pub fn cancel_selection(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::AwaitingDestination {
                from,
                chained: true,
                ..
            } => Err(GameError::ChainInProgress(from)),
            _ => {
                self.phase = Phase::AwaitingSelection;
                Ok(())
            }
        }
    }

    /// Returns true if moving the selected piece to `to` needs a promotion choice.
    pub fn requires_promotion(&self, to: Square) -> bool {
        match self.phase {
            Phase::AwaitingDestination { from, .. } => {
                self.rules.requires_promotion(&self.board, from, to)
            }
            Phase::AwaitingSelection => false,
        }
    }

    /// Moves the selected piece to `to` and commits the move.
    ///
    /// The turn passes to the other color unless a capture chain continues.
    pub fn choose_destination(
        &mut self,
        to: Square,
        promotion: Option<PromotionChoice>,
    ) -> Result<CommitResult<R::Piece>, GameError> {
        let (from, targets) = match self.phase {
            Phase::AwaitingSelection => return Err(GameError::NothingSelected),
            Phase::AwaitingDestination { from, targets, .. } => (from, targets),
        };

        if !targets.contains(to) {
            tracing::debug!("Move {} to {} rejected: not a legal target", from, to);
            return Err(GameError::IllegalMove { from, to });
        }
        if promotion.is_none() && self.rules.requires_promotion(&self.board, from, to) {
            tracing::debug!("Move {} to {} rejected: promotion choice missing", from, to);
            return Err(GameError::PromotionRequired(to));
        }

        let mv = self.rules.build_move(&self.board, from, to, promotion);
        let commit = self.rules.apply(&mut self.board, mv)?;
        self.last_move = Some(commit.mv);

        match commit.chain {
            Some(targets) => {
                tracing::debug!("{} played {}, capture chain continues", self.turn.active, commit.mv);
                self.phase = Phase::AwaitingDestination {
                    from: to,
                    targets,
                    chained: true,
                };
            }
            None => {
                tracing::debug!("{} played {}", self.turn.active, commit.mv);
                self.turn.active = self.turn.active.opposite();
                self.turn.ply += 1;
                self.phase = Phase::AwaitingSelection;
            }
        }

        Ok(commit)
    }

    /// Selects `from` and moves it to `to` in one call.
    ///
    /// During a capture chain `from` must be the chaining piece. If the
    /// destination is rejected, the selection is dropped.
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PromotionChoice>,
    ) -> Result<CommitResult<R::Piece>, GameError> {
        match self.phase {
            Phase::AwaitingDestination {
                from: chain_from,
                chained: true,
                ..
            } => {
                if chain_from != from {
                    return Err(GameError::ChainInProgress(chain_from));
                }
                self.choose_destination(to, promotion)
            }
            _ => {
                self.select(from)?;
                let result = self.choose_destination(to, promotion);
                if result.is_err() {
                    self.phase = Phase::AwaitingSelection;
                }
                result
            }
        }
    }

    /// Returns true if the active color is in check.
    pub fn is_in_check(&self) -> bool {
        self.rules.is_in_check(&self.board, self.turn.active)
    }

    /// Returns true if the active color has any legal move.
    pub fn has_legal_moves(&self) -> bool {
        self.rules
            .has_legal_moves(&self.board, self.turn.active, self.last_move)
    }

    /// Parses a square as players of this game type it.
    pub fn parse_square(&self, text: &str) -> Result<Square, GameError> {
        Ok(self.rules.parse_square(text)?)
    }

    /// Draws the board with the given squares highlighted.
    pub fn render(&self, highlighted: SquareSet) -> String {
        render(&self.board, highlighted, self.rules.labels())
    }
}
