//! Standard chess rules implementation.

use board_core::{ChessPiece, Color, Move, PieceKind, PromotionChoice, Square, SquareParseError};

use super::{CommitResult, RuleSet};
use crate::chess::{executor, legality};
use crate::render::Labels;
use crate::{Board, GameError, SquareSet};

/// Standard chess rules.
///
/// - Standard piece movement
/// - Castling (kingside and queenside)
/// - En passant
/// - Pawn promotion
/// - Check detection and king-safety filtering
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChess;

impl RuleSet for StandardChess {
    type Piece = ChessPiece;

    fn initial_board(&self) -> Board<ChessPiece> {
        Board::<ChessPiece>::standard()
    }

    fn legal_targets(
        &self,
        board: &Board<ChessPiece>,
        from: Square,
        last_move: Option<Move>,
    ) -> SquareSet {
        match board.piece_at(from) {
            Some(piece) => legality::legal_moves(board, piece, from, last_move),
            None => SquareSet::EMPTY,
        }
    }

    fn requires_promotion(&self, board: &Board<ChessPiece>, from: Square, to: Square) -> bool {
        board.piece_at(from).is_some_and(|piece| {
            piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank()
        })
    }

    fn build_move(
        &self,
        board: &Board<ChessPiece>,
        from: Square,
        to: Square,
        promotion: Option<PromotionChoice>,
    ) -> Move {
        match promotion {
            Some(choice) if self.requires_promotion(board, from, to) => {
                Move::promoting(from, to, choice)
            }
            _ => Move::new(from, to, legality::classify(board, from, to)),
        }
    }

    fn apply(
        &self,
        board: &mut Board<ChessPiece>,
        mv: Move,
    ) -> Result<CommitResult<ChessPiece>, GameError> {
        executor::apply(board, mv)
    }

    fn is_in_check(&self, board: &Board<ChessPiece>, color: Color) -> bool {
        board.is_in_check(color)
    }

    fn has_legal_moves(
        &self,
        board: &Board<ChessPiece>,
        color: Color,
        last_move: Option<Move>,
    ) -> bool {
        legality::has_legal_moves(board, color, last_move)
    }

    fn parse_square(&self, text: &str) -> Result<Square, SquareParseError> {
        Square::parse_algebraic(text)
    }

    fn labels(&self) -> Labels {
        Labels::Algebraic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::MoveFlag;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn initial_board_is_standard() {
        let board = StandardChess.initial_board();
        assert_eq!(board.population(), 32);
        assert!(StandardChess.has_legal_moves(&board, Color::White, None));
        assert!(!StandardChess.is_in_check(&board, Color::White));
    }

    #[test]
    fn legal_targets_of_empty_square() {
        let board = StandardChess.initial_board();
        assert!(StandardChess.legal_targets(&board, sq("e4"), None).is_empty());
    }

    #[test]
    fn build_move_fills_flags() {
        let board = Board::<ChessPiece>::from_placement("7k/P7/8/8/8/8/4P3/4K2R").unwrap();
        let castle = StandardChess.build_move(&board, Square::E1, Square::G1, None);
        assert_eq!(castle.flag(), MoveFlag::CastleKingside);

        let push = StandardChess.build_move(&board, sq("e2"), sq("e4"), Some(PromotionChoice::Queen));
        assert_eq!(push.flag(), MoveFlag::DoublePush);

        let promote = StandardChess.build_move(&board, sq("a7"), sq("a8"), Some(PromotionChoice::Knight));
        assert_eq!(promote.promotion(), Some(PromotionChoice::Knight));
    }

    #[test]
    fn promotion_is_required_on_the_last_rank() {
        let board = Board::<ChessPiece>::from_placement("7k/P7/8/8/8/8/4P3/4K3").unwrap();
        assert!(StandardChess.requires_promotion(&board, sq("a7"), sq("a8")));
        assert!(!StandardChess.requires_promotion(&board, sq("e2"), sq("e3")));
        assert!(!StandardChess.requires_promotion(&board, sq("h8"), sq("h7")));
    }

    #[test]
    fn squares_parse_algebraically() {
        assert_eq!(StandardChess.parse_square(" E2 "), Ok(sq("e2")));
        assert!(StandardChess.parse_square("5 0").is_err());
        assert_eq!(StandardChess.labels(), Labels::Algebraic);
    }
}
