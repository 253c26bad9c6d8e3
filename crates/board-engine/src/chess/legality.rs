//! King-safety filtering of candidate moves.
//!
//! Every candidate is played on a scratch copy of the board; it survives only
//! if the mover's king is not attacked afterwards. The real board is never
//! touched.

use board_core::{ChessPiece, Color, Move, MoveFlag, PieceKind, Square};

use super::pieces::{candidate_moves, is_en_passant_capture};
use crate::{Board, MoveList, SquareSet};

/// Returns the candidates of `piece` on `from` that do not leave its own
/// king in check.
pub fn legal_moves(
    board: &Board<ChessPiece>,
    piece: ChessPiece,
    from: Square,
    last_move: Option<Move>,
) -> SquareSet {
    candidate_moves(board, piece, from, last_move)
        .iter()
        .filter(|&to| !exposes_king(board, piece, from, to))
        .collect()
}

/// Plays the move on a scratch board and reports whether the mover ends in check.
fn exposes_king(board: &Board<ChessPiece>, piece: ChessPiece, from: Square, to: Square) -> bool {
    let mut scratch = board.clone();
    if is_en_passant_capture(board, piece, from, to) {
        if let Some(victim) = Square::new(from.rank(), to.file()) {
            scratch.remove(victim);
        }
    }
    scratch.move_raw(from, to);
    scratch.is_in_check(piece.color)
}

/// Returns true if any piece of `color` has a legal move.
pub fn has_legal_moves(board: &Board<ChessPiece>, color: Color, last_move: Option<Move>) -> bool {
    board
        .pieces_of(color)
        .any(|(from, piece)| !legal_moves(board, piece, from, last_move).is_empty())
}

/// Generates every legal move of `color`, one entry per promotion choice.
pub fn generate_moves(board: &Board<ChessPiece>, color: Color, last_move: Option<Move>) -> MoveList {
    let mut moves = MoveList::new();

    for (from, piece) in board.pieces_of(color) {
        for to in legal_moves(board, piece, from, last_move) {
            if piece.kind == PieceKind::Pawn && to.rank() == color.promotion_rank() {
                moves.push_promotions(from, to);
            } else {
                moves.push(from, to, classify(board, from, to));
            }
        }
    }

    moves
}

/// Names the special action a non-promoting move from `from` to `to` performs.
pub fn classify(board: &Board<ChessPiece>, from: Square, to: Square) -> MoveFlag {
    let Some(piece) = board.piece_at(from) else {
        return MoveFlag::Normal;
    };

    match piece.kind {
        PieceKind::King if from.file().abs_diff(to.file()) == 2 => {
            if to.file() > from.file() {
                MoveFlag::CastleKingside
            } else {
                MoveFlag::CastleQueenside
            }
        }
        PieceKind::Pawn if from.rank().abs_diff(to.rank()) == 2 => MoveFlag::DoublePush,
        PieceKind::Pawn if is_en_passant_capture(board, piece, from, to) => MoveFlag::EnPassant,
        _ => MoveFlag::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::PromotionChoice;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn legal_at(board: &Board<ChessPiece>, square: &str, last: Option<Move>) -> SquareSet {
        let from = sq(square);
        legal_moves(board, board.piece_at(from).unwrap(), from, last)
    }

    #[test]
    fn startpos_has_twenty_moves() {
        let board = Board::<ChessPiece>::standard();
        assert_eq!(generate_moves(&board, Color::White, None).len(), 20);
        assert_eq!(generate_moves(&board, Color::Black, None).len(), 20);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let board = Board::<ChessPiece>::from_placement("4r1k1/8/8/8/8/8/4B3/4K3").unwrap();
        assert_eq!(legal_at(&board, "e2", None), SquareSet::EMPTY);
    }

    #[test]
    fn pinned_rook_may_slide_along_the_pin() {
        let board = Board::<ChessPiece>::from_placement("4r1k1/8/8/8/8/8/4R3/4K3").unwrap();
        let rook = legal_at(&board, "e2", None);
        assert!(rook.contains(sq("e8")));
        assert!(rook.contains(sq("e5")));
        assert!(!rook.contains(sq("d2")));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let board = Board::<ChessPiece>::from_placement("3r2k1/8/8/8/8/8/8/4K3").unwrap();
        let king = legal_at(&board, "e1", None);
        assert!(!king.contains(sq("d1")));
        assert!(!king.contains(sq("d2")));
        assert!(king.contains(sq("f2")));
    }

    #[test]
    fn en_passant_exposing_the_king_is_illegal() {
        let board = Board::<ChessPiece>::from_placement("8/8/8/K2pP2r/8/8/8/7k").unwrap();
        let push = Move::new(sq("d7"), sq("d5"), MoveFlag::DoublePush);
        let pawn = legal_at(&board, "e5", Some(push));
        assert!(!pawn.contains(sq("d6")));
        assert!(pawn.contains(sq("e6")));
    }

    #[test]
    fn checkmate_has_no_legal_moves() {
        // Back-rank mate.
        let board = Board::<ChessPiece>::from_placement("3R2k1/5ppp/8/8/8/8/8/6K1").unwrap();
        assert!(board.is_in_check(Color::Black));
        assert!(!has_legal_moves(&board, Color::Black, None));
        assert!(has_legal_moves(&board, Color::White, None));
    }

    #[test]
    fn stalemate_has_no_legal_moves() {
        let board = Board::<ChessPiece>::from_placement("7k/5Q2/6K1/8/8/8/8/8").unwrap();
        assert!(!board.is_in_check(Color::Black));
        assert!(!has_legal_moves(&board, Color::Black, None));
    }

    #[test]
    fn promotions_expand_to_four_moves() {
        let board = Board::<ChessPiece>::from_placement("7k/P7/8/8/8/8/8/K7").unwrap();
        let moves = generate_moves(&board, Color::White, None);
        let promotions = moves.iter().filter(|m| m.flag().is_promotion()).count();
        assert_eq!(promotions, 4);
        assert!(moves.contains(&Move::promoting(sq("a7"), sq("a8"), PromotionChoice::Knight)));
    }

    #[test]
    fn classify_special_moves() {
        let board = Board::<ChessPiece>::from_placement("8/8/8/3pP3/8/8/4P3/4K2R").unwrap();
        assert_eq!(classify(&board, sq("e2"), sq("e4")), MoveFlag::DoublePush);
        assert_eq!(classify(&board, sq("e5"), sq("d6")), MoveFlag::EnPassant);
        assert_eq!(classify(&board, Square::E1, Square::G1), MoveFlag::CastleKingside);
        assert_eq!(classify(&board, sq("e2"), sq("e3")), MoveFlag::Normal);
        assert_eq!(classify(&board, sq("a3"), sq("a4")), MoveFlag::Normal);
    }
}
