//! Piece representation for chess and checkers.

use crate::Color;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Behaviour shared by every piece that can sit on a board cell.
pub trait BoardPiece: Copy + Eq + fmt::Debug {
    /// The side owning this piece.
    fn color(&self) -> Color;

    /// The placement character for this piece (upper case for White).
    fn symbol(&self) -> char;

    /// Reads a placement character back into a piece.
    fn from_symbol(c: char) -> Option<Self>;
}

/// The six types of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Returns the lower-case letter used for this kind.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A chess piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessPiece {
    pub kind: PieceKind,
    pub color: Color,
    /// Set once the piece has left its square; kings and rooks lose castling with it.
    pub moved: bool,
}

impl ChessPiece {
    /// Creates an unmoved piece.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        ChessPiece {
            kind,
            color,
            moved: false,
        }
    }

    /// Returns true if this is a piece of the given kind and color.
    #[inline]
    pub fn is(&self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }
}

impl BoardPiece for ChessPiece {
    fn color(&self) -> Color {
        self.color
    }

    fn symbol(&self) -> char {
        let c = self.kind.letter();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(ChessPiece::new(kind, color))
    }
}

/// Error returned when a promotion choice cannot be read.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid promotion choice {0:?}: expected one of Q, R, B, N")]
pub struct PromotionParseError(pub String);

/// The pieces a pawn may promote to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionChoice {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionChoice {
    /// Every choice, strongest first.
    pub const ALL: [PromotionChoice; 4] = [
        PromotionChoice::Queen,
        PromotionChoice::Rook,
        PromotionChoice::Bishop,
        PromotionChoice::Knight,
    ];

    /// Returns the piece kind the pawn becomes.
    pub const fn kind(self) -> PieceKind {
        match self {
            PromotionChoice::Queen => PieceKind::Queen,
            PromotionChoice::Rook => PieceKind::Rook,
            PromotionChoice::Bishop => PieceKind::Bishop,
            PromotionChoice::Knight => PieceKind::Knight,
        }
    }

    /// Reads `Q`, `R`, `B` or `N` in either case.
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'Q' => Some(PromotionChoice::Queen),
            'R' => Some(PromotionChoice::Rook),
            'B' => Some(PromotionChoice::Bishop),
            'N' => Some(PromotionChoice::Knight),
            _ => None,
        }
    }
}

impl FromStr for PromotionChoice {
    type Err = PromotionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                PromotionChoice::from_char(c).ok_or_else(|| PromotionParseError(text.to_string()))
            }
            _ => Err(PromotionParseError(text.to_string())),
        }
    }
}

/// The two ranks of checkers piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckerKind {
    Man,
    King,
}

/// A checkers piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checker {
    pub kind: CheckerKind,
    pub color: Color,
}

impl Checker {
    /// Creates an uncrowned man.
    #[inline]
    pub const fn man(color: Color) -> Self {
        Checker {
            kind: CheckerKind::Man,
            color,
        }
    }

    /// Creates a crowned king.
    #[inline]
    pub const fn king(color: Color) -> Self {
        Checker {
            kind: CheckerKind::King,
            color,
        }
    }

    /// Returns true once the piece has been crowned.
    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, CheckerKind::King)
    }
}

impl BoardPiece for Checker {
    fn color(&self) -> Color {
        self.color
    }

    fn symbol(&self) -> char {
        let c = match self.kind {
            CheckerKind::Man => 'm',
            CheckerKind::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        match c.to_ascii_lowercase() {
            'm' => Some(Checker::man(color)),
            'k' => Some(Checker::king(color)),
            _ => None,
        }
    }
}
