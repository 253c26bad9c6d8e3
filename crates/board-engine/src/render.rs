//! Text diagrams of a board.
//!
//! Rendering is pure: callers receive a `String` and decide where it goes.

use board_core::{BoardPiece, Square};

use crate::{Board, SquareSet};

/// How rows and columns are labelled and which row is drawn on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Labels {
    /// Chess style: rank 8 on top, ranks `1`-`8`, files `a`-`h`.
    Algebraic,
    /// Checkers style: row 0 on top, rows and columns `0`-`7`.
    Numeric,
}

pub(crate) const DIVIDER: &str = "  ---------------------------------";

/// Draws the board as a bordered grid, marking highlighted squares with `*`.
pub fn render<P: BoardPiece>(board: &Board<P>, highlighted: SquareSet, labels: Labels) -> String {
    let rows: Vec<u8> = match labels {
        Labels::Algebraic => (0..8).rev().collect(),
        Labels::Numeric => (0..8).collect(),
    };

    let mut out = String::new();
    out.push_str(DIVIDER);
    out.push('\n');

    for rank in rows {
        let label = match labels {
            Labels::Algebraic => (b'1' + rank) as char,
            Labels::Numeric => (b'0' + rank) as char,
        };
        out.push(label);
        out.push_str(" |");

        for sq in Square::ALL[rank as usize * 8..rank as usize * 8 + 8].iter() {
            let symbol = if highlighted.contains(*sq) {
                '*'
            } else {
                board.symbol_at(*sq).unwrap_or(' ')
            };
            out.push(' ');
            out.push(symbol);
            out.push_str(" |");
        }

        out.push('\n');
        out.push_str(DIVIDER);
        out.push('\n');
    }

    out.push_str("   ");
    for file in 0..8u8 {
        let label = match labels {
            Labels::Algebraic => (b'a' + file) as char,
            Labels::Numeric => (b'0' + file) as char,
        };
        out.push_str("  ");
        out.push(label);
        out.push(' ');
    }
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::{Checker, ChessPiece, CHESS_STARTPOS};

    #[test]
    fn algebraic_puts_rank_eight_on_top() {
        let board = Board::<ChessPiece>::from_placement(CHESS_STARTPOS).unwrap();
        let text = render(&board, SquareSet::EMPTY, Labels::Algebraic);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], DIVIDER);
        assert_eq!(lines[1], "8 | r | n | b | q | k | b | n | r |");
        assert_eq!(lines[15], "1 | R | N | B | Q | K | B | N | R |");
        assert_eq!(lines[17].split_whitespace().collect::<String>(), "abcdefgh");
    }

    #[test]
    fn highlighted_squares_are_starred() {
        let board = Board::<ChessPiece>::from_placement(CHESS_STARTPOS).unwrap();
        let targets = SquareSet::from_square(Square::from_algebraic("e3").unwrap())
            .with(Square::from_algebraic("e4").unwrap());
        let text = render(&board, targets, Labels::Algebraic);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[9], "4 |   |   |   |   | * |   |   |   |");
        assert_eq!(lines[11], "3 |   |   |   |   | * |   |   |   |");
    }

    #[test]
    fn numeric_puts_row_zero_on_top() {
        let board = Board::<Checker>::from_placement("8/8/8/8/8/8/8/M7").unwrap();
        let text = render(&board, SquareSet::EMPTY, Labels::Numeric);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "0 | M |   |   |   |   |   |   |   |");
        assert_eq!(lines[17].split_whitespace().collect::<String>(), "01234567");
    }

    #[test]
    fn display_uses_algebraic_labels() {
        let board = Board::<ChessPiece>::from_placement(CHESS_STARTPOS).unwrap();
        assert_eq!(
            board.to_string(),
            render(&board, SquareSet::EMPTY, Labels::Algebraic)
        );
    }
}
