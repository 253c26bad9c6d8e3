//! Chess-specific board services.

use board_core::{ChessPiece, Color, PieceKind, Square};

use super::pieces::attack_targets;
use crate::Board;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board<ChessPiece> {
    /// Returns the standard chess starting position.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (file, &kind) in (0u8..).zip(BACK_RANK.iter()) {
                if let Some(sq) = Square::new(color.back_rank(), file) {
                    board.place(sq, ChessPiece::new(kind, color));
                }
                if let Some(sq) = Square::new(color.pawn_start_rank(), file) {
                    board.place(sq, ChessPiece::new(PieceKind::Pawn, color));
                }
            }
        }
        board
    }

    /// Moves a piece and marks it as moved, returning whatever stood on `to`.
    ///
    /// A king moving two files drags the corner rook of that side to the
    /// square it crossed. En passant victims are not removed here.
    pub fn move_raw(&mut self, from: Square, to: Square) -> Option<ChessPiece> {
        let mut piece = self.remove(from)?;

        if piece.kind == PieceKind::King && from.file().abs_diff(to.file()) == 2 {
            let (rook_file, step) = if to.file() > from.file() { (7, 1) } else { (0, -1) };
            if let (Some(rook_from), Some(rook_to)) =
                (Square::new(from.rank(), rook_file), from.offset(0, step))
            {
                if let Some(mut rook) = self.remove(rook_from) {
                    rook.moved = true;
                    self.place(rook_to, rook);
                }
            }
        }

        piece.moved = true;
        self.place(to, piece)
    }

    /// Returns the square of the given color's king.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.iter()
            .find(|(_, piece)| piece.is(PieceKind::King, color))
            .map(|(sq, _)| sq)
    }

    /// Returns true if any piece of the side opposing `defender` attacks `sq`.
    pub fn is_square_attacked(&self, sq: Square, defender: Color) -> bool {
        self.pieces_of(defender.opposite())
            .any(|(from, piece)| attack_targets(self, piece, from).contains(sq))
    }

    /// Returns true if the given color's king is attacked.
    ///
    /// A board without that king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::CHESS_STARTPOS;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn standard_matches_startpos() {
        let board = Board::<ChessPiece>::standard();
        assert_eq!(board.to_placement(), CHESS_STARTPOS);
        assert!(board.iter().all(|(_, piece)| !piece.moved));
    }

    #[test]
    fn move_raw_marks_moved_and_returns_capture() {
        let mut board = Board::<ChessPiece>::from_placement("8/8/8/3p4/8/8/8/3R4").unwrap();
        let captured = board.move_raw(sq("d1"), sq("d5"));
        assert_eq!(captured, Some(ChessPiece::new(PieceKind::Pawn, Color::Black)));
        assert!(board.piece_at(sq("d5")).unwrap().moved);
    }

    #[test]
    fn move_raw_castles_the_rook() {
        let mut board = Board::<ChessPiece>::from_placement("r3k3/8/8/8/8/8/8/4K2R").unwrap();
        board.move_raw(Square::E1, Square::G1);
        assert!(board.piece_at(Square::F1).unwrap().is(PieceKind::Rook, Color::White));
        assert!(board.piece_at(Square::F1).unwrap().moved);
        assert!(board.is_empty(Square::H1));

        board.move_raw(Square::E8, Square::C8);
        assert!(board.piece_at(Square::D8).unwrap().is(PieceKind::Rook, Color::Black));
        assert!(board.is_empty(Square::A8));
    }

    #[test]
    fn move_raw_from_empty_square_does_nothing() {
        let mut board = Board::<ChessPiece>::standard();
        assert_eq!(board.move_raw(sq("e4"), sq("e5")), None);
        assert_eq!(board, Board::<ChessPiece>::standard());
    }

    #[test]
    fn attack_queries() {
        let board = Board::<ChessPiece>::standard();
        assert!(board.is_square_attacked(sq("f3"), Color::Black));
        assert!(!board.is_square_attacked(sq("e4"), Color::Black));
        assert!(board.is_square_attacked(sq("f6"), Color::White));
        assert!(!board.is_in_check(Color::White));
    }

    #[test]
    fn check_detection() {
        let board = Board::<ChessPiece>::from_placement("4k3/8/8/8/8/8/8/4R2K").unwrap();
        assert!(board.is_in_check(Color::Black));
        assert!(!board.is_in_check(Color::White));
        assert_eq!(board.king_square(Color::Black), Some(Square::E8));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let board = Board::<ChessPiece>::from_placement("8/8/8/8/8/8/8/4R3").unwrap();
        assert!(!board.is_in_check(Color::Black));
        assert_eq!(board.king_square(Color::Black), None);
    }
}
