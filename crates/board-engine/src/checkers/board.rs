//! Checkers-specific board services.

use board_core::{Checker, Color, Square};

use crate::Board;

impl Board<Checker> {
    /// Returns the checkers starting layout: men on the dark squares of rows
    /// 0-2 (Black) and 5-7 (White).
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for sq in Square::ALL {
            let dark = (sq.rank() + sq.file()) % 2 == 1;
            let color = match sq.rank() {
                0..=2 => Color::Black,
                5..=7 => Color::White,
                _ => continue,
            };
            if dark {
                board.place(sq, Checker::man(color));
            }
        }
        board
    }
}
