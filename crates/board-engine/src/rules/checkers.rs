//! Checkers rules implementation.

use board_core::{Checker, Move, MoveFlag, PromotionChoice, Square, SquareParseError};

use super::{CommitResult, RuleSet};
use crate::checkers::{can_capture, candidate_moves, executor, jumped_square};
use crate::config::CheckersConfig;
use crate::render::Labels;
use crate::{Board, GameError, SquareSet};

/// Checkers on the 8x8 board with flying kings.
///
/// - Men step and capture diagonally forward
/// - Crowning on the far row
/// - Multi-jump chains (configurable)
/// - Forced capture (configurable, off by default)
#[derive(Debug, Clone, Copy, Default)]
pub struct Checkers {
    config: CheckersConfig,
}

impl Checkers {
    /// Creates the rule set with the given policies.
    pub fn new(config: CheckersConfig) -> Self {
        Checkers { config }
    }

    /// Returns the active policies.
    pub fn config(&self) -> CheckersConfig {
        self.config
    }
}

impl RuleSet for Checkers {
    type Piece = Checker;

    fn initial_board(&self) -> Board<Checker> {
        Board::<Checker>::standard()
    }

    fn legal_targets(
        &self,
        board: &Board<Checker>,
        from: Square,
        _last_move: Option<Move>,
    ) -> SquareSet {
        let Some(piece) = board.piece_at(from) else {
            return SquareSet::EMPTY;
        };

        let moves = candidate_moves(board, piece, from);
        if self.config.forced_capture && can_capture(board, piece.color) {
            moves.captures
        } else {
            moves.all()
        }
    }

    fn build_move(
        &self,
        board: &Board<Checker>,
        from: Square,
        to: Square,
        _promotion: Option<PromotionChoice>,
    ) -> Move {
        let jumps = match (board.piece_at(from), jumped_square(board, from, to)) {
            (Some(piece), Some(victim)) => board.is_color(victim, piece.color.opposite()),
            _ => false,
        };
        let flag = if jumps { MoveFlag::Jump } else { MoveFlag::Normal };
        Move::new(from, to, flag)
    }

    fn apply(
        &self,
        board: &mut Board<Checker>,
        mv: Move,
    ) -> Result<CommitResult<Checker>, GameError> {
        executor::apply(board, mv, self.config.chain_captures)
    }

    fn parse_square(&self, text: &str) -> Result<Square, SquareParseError> {
        Square::parse_coords(text)
    }

    fn labels(&self) -> Labels {
        Labels::Numeric
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::Color;

    fn at(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn capture_position() -> Board<Checker> {
        let mut board = Board::empty();
        board.place(at(5, 0), Checker::man(Color::White));
        board.place(at(5, 4), Checker::man(Color::White));
        board.place(at(4, 1), Checker::man(Color::Black));
        board
    }

    #[test]
    fn captures_optional_by_default() {
        let rules = Checkers::default();
        let board = capture_position();
        let targets = rules.legal_targets(&board, at(5, 4), None);
        assert_eq!(targets, [at(4, 3), at(4, 5)].into_iter().collect());
    }

    #[test]
    fn forced_capture_narrows_every_piece() {
        let rules = Checkers::new(CheckersConfig {
            forced_capture: true,
            chain_captures: true,
        });
        let board = capture_position();
        assert!(rules.legal_targets(&board, at(5, 4), None).is_empty());
        assert_eq!(
            rules.legal_targets(&board, at(5, 0), None),
            SquareSet::from_square(at(3, 2))
        );
        assert!(rules.has_legal_moves(&board, Color::White, None));
    }

    #[test]
    fn build_move_flags_jumps() {
        let rules = Checkers::default();
        let board = capture_position();
        assert_eq!(rules.build_move(&board, at(5, 0), at(3, 2), None).flag(), MoveFlag::Jump);
        assert_eq!(rules.build_move(&board, at(5, 4), at(4, 3), None).flag(), MoveFlag::Normal);
    }

    #[test]
    fn no_check_in_checkers() {
        let rules = Checkers::default();
        let board = rules.initial_board();
        assert!(!rules.is_in_check(&board, Color::White));
        assert!(!rules.requires_promotion(&board, at(1, 0), at(0, 1)));
        assert!(rules.has_legal_moves(&board, Color::White, None));
    }

    #[test]
    fn blocked_side_has_no_moves() {
        let rules = Checkers::default();
        let mut board = Board::empty();
        board.place(at(0, 1), Checker::man(Color::White));
        board.place(at(7, 0), Checker::man(Color::Black));
        assert!(!rules.has_legal_moves(&board, Color::White, None));
        assert!(!rules.has_legal_moves(&board, Color::Black, None));
    }

    #[test]
    fn squares_parse_as_coordinates() {
        let rules = Checkers::default();
        assert_eq!(rules.parse_square("5 0"), Ok(at(5, 0)));
        assert!(rules.parse_square("e2").is_err());
        assert!(rules.parse_square("8 0").is_err());
        assert_eq!(rules.labels(), Labels::Numeric);
    }
}
