//! The 8x8 board: a grid of optional pieces.
//!
//! [`Board`] is generic over the piece type so chess and checkers share the
//! same storage, placement strings and read access. Game-specific services
//! (castling relocation, attack queries, initial layouts) live in the
//! `chess` and `checkers` modules as inherent impls on the concrete boards.

use board_core::{parse_placement, write_placement, BoardPiece, Color, PlacementError, Square};
use std::fmt;

use crate::render::{render, Labels};
use crate::SquareSet;

/// An 8x8 board holding at most one piece per square.
///
/// Cloning produces a fully independent copy; hypothetical moves are played
/// on clones and never touch the original.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board<P> {
    cells: [Option<P>; 64],
}

impl<P: BoardPiece> Board<P> {
    /// Creates an empty board.
    pub fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    /// Creates a board from a placement string (the board field of FEN).
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let mut board = Board::empty();
        for (sq, piece) in parse_placement(placement)? {
            board.place(sq, piece);
        }
        Ok(board)
    }

    /// Writes the board as a placement string.
    pub fn to_placement(&self) -> String {
        write_placement(|sq| self.piece_at(sq))
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<P> {
        self.cells[sq.index() as usize]
    }

    /// Puts a piece on a square, returning whatever was there before.
    #[inline]
    pub fn place(&mut self, sq: Square, piece: P) -> Option<P> {
        self.cells[sq.index() as usize].replace(piece)
    }

    /// Lifts the piece off a square.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> Option<P> {
        self.cells[sq.index() as usize].take()
    }

    /// Moves the piece on `from` to `to`, returning the piece it displaced.
    ///
    /// Does nothing when `from` is empty.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<P> {
        match self.remove(from) {
            Some(piece) => self.place(to, piece),
            None => None,
        }
    }

    /// Returns true if the square is empty.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Returns true if the square holds a piece of the given color.
    #[inline]
    pub fn is_color(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq).is_some_and(|p| p.color() == color)
    }

    /// Iterates over occupied squares and their pieces.
    pub fn iter(&self) -> impl Iterator<Item = (Square, P)> + '_ {
        Square::ALL
            .iter()
            .filter_map(move |&sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterates over the pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, P)> + '_ {
        self.iter().filter(move |(_, piece)| piece.color() == color)
    }

    /// Returns the set of occupied squares.
    pub fn occupied(&self) -> SquareSet {
        self.iter().map(|(sq, _)| sq).collect()
    }

    /// Returns the squares occupied by one color.
    pub fn occupied_by(&self, color: Color) -> SquareSet {
        self.pieces_of(color).map(|(sq, _)| sq).collect()
    }

    /// Returns the number of pieces on the board.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns the display symbol of the piece on a square.
    pub fn symbol_at(&self, sq: Square) -> Option<char> {
        self.piece_at(sq).map(|piece| piece.symbol())
    }
}

impl<P: BoardPiece> Default for Board<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P: BoardPiece> fmt::Debug for Board<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

impl<P: BoardPiece> fmt::Display for Board<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, SquareSet::EMPTY, Labels::Algebraic))
    }
}
