//! Piece-placement strings: the board field of FEN, reused for both games.
//!
//! Rows are separated by `/`, highest rank first. Digits 1-8 stand for runs
//! of empty squares; letters are read by [`BoardPiece::from_symbol`].

use crate::{BoardPiece, Square};
use thiserror::Error;

/// Errors that can occur when parsing a placement string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid placement: row {row} covers {squares} squares, expected 8")]
    InvalidRow { row: u8, squares: u32 },

    #[error("invalid placement: unexpected character '{character}' in row {row}")]
    InvalidCharacter { row: u8, character: char },
}

/// The standard chess starting placement.
pub const CHESS_STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Parses a placement string into occupied squares.
pub fn parse_placement<P: BoardPiece>(placement: &str) -> Result<Vec<(Square, P)>, PlacementError> {
    let rows: Vec<&str> = placement.trim().split('/').collect();
    if rows.len() != 8 {
        return Err(PlacementError::InvalidRowCount(rows.len()));
    }

    let mut pieces = Vec::new();
    for (i, row_text) in rows.iter().enumerate() {
        let rank = 7 - i as u8;
        let mut file = 0u32;

        for c in row_text.chars() {
            if let Some(run) = c.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(PlacementError::InvalidCharacter { row: rank, character: c });
                }
                file += run;
            } else if let Some(piece) = P::from_symbol(c) {
                if let Some(sq) = Square::new(rank, file as u8).filter(|_| file < 8) {
                    pieces.push((sq, piece));
                }
                file += 1;
            } else {
                return Err(PlacementError::InvalidCharacter { row: rank, character: c });
            }
        }

        if file != 8 {
            return Err(PlacementError::InvalidRow {
                row: rank,
                squares: file,
            });
        }
    }

    Ok(pieces)
}

/// Writes a placement string from a lookup function, highest rank first.
pub fn write_placement<P: BoardPiece>(piece_at: impl Fn(Square) -> Option<P>) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0;
        for sq in Square::ALL[rank as usize * 8..rank as usize * 8 + 8].iter() {
            match piece_at(*sq) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    out.push(piece.symbol());
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            out.push_str(&empty_count.to_string());
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChessPiece, Checker, Color, PieceKind};
    use std::collections::HashMap;

    #[test]
    fn parse_startpos() {
        let pieces = parse_placement::<ChessPiece>(CHESS_STARTPOS).unwrap();
        assert_eq!(pieces.len(), 32);

        let by_square: HashMap<Square, ChessPiece> = pieces.into_iter().collect();
        assert_eq!(
            by_square.get(&Square::E1),
            Some(&ChessPiece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            by_square.get(&Square::D8),
            Some(&ChessPiece::new(PieceKind::Queen, Color::Black))
        );
    }

    #[test]
    fn write_matches_parse() {
        let text = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R";
        let by_square: HashMap<Square, ChessPiece> =
            parse_placement(text).unwrap().into_iter().collect();
        assert_eq!(write_placement(|sq| by_square.get(&sq).copied()), text);
    }

    #[test]
    fn checkers_letters() {
        let pieces = parse_placement::<Checker>("8/8/8/8/8/8/8/M6k").unwrap();
        assert_eq!(
            pieces,
            vec![
                (Square::A1, Checker::man(Color::White)),
                (Square::H1, Checker::king(Color::Black)),
            ]
        );
    }

    #[test]
    fn invalid_row_count() {
        assert_eq!(
            parse_placement::<ChessPiece>("8/8/8/8/8/8/8"),
            Err(PlacementError::InvalidRowCount(7))
        );
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            parse_placement::<ChessPiece>("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR"),
            Err(PlacementError::InvalidCharacter {
                row: 1,
                character: 'X'
            })
        );
        // Checker letters are not chess pieces.
        assert!(parse_placement::<ChessPiece>("8/8/8/8/8/8/8/m7").is_err());
        assert!(parse_placement::<ChessPiece>("8/8/8/8/8/8/8/08").is_err());
    }

    #[test]
    fn invalid_row_width() {
        assert_eq!(
            parse_placement::<ChessPiece>("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(PlacementError::InvalidRow { row: 7, squares: 9 })
        );
        assert_eq!(
            parse_placement::<ChessPiece>("8/8/8/8/8/8/8/7"),
            Err(PlacementError::InvalidRow { row: 0, squares: 7 })
        );
    }

    #[test]
    fn error_display() {
        let err = PlacementError::InvalidRowCount(3);
        assert!(format!("{}", err).contains("3"));

        let err = PlacementError::InvalidCharacter {
            row: 2,
            character: 'z',
        };
        assert!(format!("{}", err).contains("'z'"));
    }
}
