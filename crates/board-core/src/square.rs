//! Board square representation and parsing.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when reading a square from user text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SquareParseError {
    #[error("expected a file letter and a rank digit (e.g. 'e4'), got {0:?}")]
    InvalidLength(String),

    #[error("invalid file '{0}': expected a-h")]
    InvalidFile(char),

    #[error("invalid rank '{0}': expected 1-8")]
    InvalidRank(char),

    #[error("expected two integers in 0..8 separated by whitespace, got {0:?}")]
    InvalidCoordinates(String),
}

/// A square on the 8x8 board, stored as `rank * 8 + file`.
///
/// For chess, rank 0 is White's back rank ("1") and file 0 is the a-file.
/// Checkers uses the same grid, with the rank read as the row number a player
/// types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Every square in index order.
    pub const ALL: [Square; 64] = all_squares();

    /// Creates a square from rank and file, both in `0..8`.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, returning `None` off the board.
    #[inline]
    pub const fn from_coords(rank: i8, file: i8) -> Option<Self> {
        if rank < 0 || file < 0 {
            return None;
        }
        Self::new(rank as u8, file as u8)
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the rank (row) of this square, 0-7.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Returns the file (column) of this square, 0-7.
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Returns the square shifted by the given rank and file deltas, if on the board.
    #[inline]
    pub const fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Self> {
        Self::from_coords(
            self.rank() as i8 + rank_delta,
            self.file() as i8 + file_delta,
        )
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    ///
    /// Surrounding whitespace is ignored and the file letter may be upper case.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        Self::parse_algebraic(s).ok()
    }

    /// Parses a square from algebraic notation, reporting what was wrong.
    pub fn parse_algebraic(s: &str) -> Result<Self, SquareParseError> {
        let text = s.trim();
        let mut chars = text.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(SquareParseError::InvalidLength(text.to_string())),
        };

        let file_index = match file.to_ascii_lowercase() {
            c @ 'a'..='h' => c as u8 - b'a',
            _ => return Err(SquareParseError::InvalidFile(file)),
        };
        let rank_index = match rank {
            c @ '1'..='8' => c as u8 - b'1',
            _ => return Err(SquareParseError::InvalidRank(rank)),
        };

        Square::new(rank_index, file_index).ok_or(SquareParseError::InvalidLength(text.to_string()))
    }

    /// Parses a square from two whitespace-separated integers, row then column
    /// (e.g., "5 0").
    pub fn from_coords_str(s: &str) -> Option<Self> {
        Self::parse_coords(s).ok()
    }

    /// Parses a `row column` pair, reporting malformed or off-board input.
    pub fn parse_coords(s: &str) -> Result<Self, SquareParseError> {
        let invalid = || SquareParseError::InvalidCoordinates(s.trim().to_string());

        let mut parts = s.split_whitespace();
        let (row, col) = match (parts.next(), parts.next(), parts.next()) {
            (Some(row), Some(col), None) => (row, col),
            _ => return Err(invalid()),
        };
        let row: u8 = row.parse().map_err(|_| invalid())?;
        let col: u8 = col.parse().map_err(|_| invalid())?;

        Square::new(row, col).ok_or_else(invalid)
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.file()) as char, self.rank() + 1)
    }

    // Common squares
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

const fn all_squares() -> [Square; 64] {
    let mut squares = [Square(0); 64];
    let mut index = 0;
    while index < 64 {
        squares[index] = Square(index as u8);
        index += 1;
    }
    squares
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_algebraic(s)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
