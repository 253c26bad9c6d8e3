//! Move representation.

use crate::{PromotionChoice, Square};
use std::fmt;

/// Flags for special move types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveFlag {
    /// Normal move (no special action).
    Normal = 0,
    /// Pawn double push from starting rank.
    DoublePush = 1,
    /// Kingside castling (O-O).
    CastleKingside = 2,
    /// Queenside castling (O-O-O).
    CastleQueenside = 3,
    /// En passant capture.
    EnPassant = 4,
    /// Pawn promotion to knight.
    PromoteKnight = 5,
    /// Pawn promotion to bishop.
    PromoteBishop = 6,
    /// Pawn promotion to rook.
    PromoteRook = 7,
    /// Pawn promotion to queen.
    PromoteQueen = 8,
    /// Checkers capture, jumping over an opposing piece.
    Jump = 9,
}

impl MoveFlag {
    /// Returns the flag carrying the given promotion choice.
    #[inline]
    pub const fn promotion(choice: PromotionChoice) -> Self {
        match choice {
            PromotionChoice::Queen => MoveFlag::PromoteQueen,
            PromotionChoice::Rook => MoveFlag::PromoteRook,
            PromotionChoice::Bishop => MoveFlag::PromoteBishop,
            PromotionChoice::Knight => MoveFlag::PromoteKnight,
        }
    }

    /// Returns the promotion choice if this is a promotion move.
    #[inline]
    pub const fn promotion_choice(self) -> Option<PromotionChoice> {
        match self {
            MoveFlag::PromoteKnight => Some(PromotionChoice::Knight),
            MoveFlag::PromoteBishop => Some(PromotionChoice::Bishop),
            MoveFlag::PromoteRook => Some(PromotionChoice::Rook),
            MoveFlag::PromoteQueen => Some(PromotionChoice::Queen),
            _ => None,
        }
    }

    /// Returns true if this is a promotion move.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion_choice().is_some()
    }

    /// Returns true if this is a castling move.
    #[inline]
    pub const fn is_castling(self) -> bool {
        matches!(self, MoveFlag::CastleKingside | MoveFlag::CastleQueenside)
    }

    const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => MoveFlag::DoublePush,
            2 => MoveFlag::CastleKingside,
            3 => MoveFlag::CastleQueenside,
            4 => MoveFlag::EnPassant,
            5 => MoveFlag::PromoteKnight,
            6 => MoveFlag::PromoteBishop,
            7 => MoveFlag::PromoteRook,
            8 => MoveFlag::PromoteQueen,
            9 => MoveFlag::Jump,
            _ => MoveFlag::Normal,
        }
    }
}

/// A move request: source, destination and special-move metadata.
///
/// Encoded compactly: 6 bits from, 6 bits to, 4 bits flags = 16 bits total.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square, flag: MoveFlag) -> Self {
        let encoded = (from.index() as u16) | ((to.index() as u16) << 6) | ((flag as u16) << 12);
        Move(encoded)
    }

    /// Creates a normal move (no special flags).
    #[inline]
    pub const fn normal(from: Square, to: Square) -> Self {
        Self::new(from, to, MoveFlag::Normal)
    }

    /// Creates a pawn move that promotes to the given piece.
    #[inline]
    pub const fn promoting(from: Square, to: Square, choice: PromotionChoice) -> Self {
        Self::new(from, to, MoveFlag::promotion(choice))
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        Square::ALL[(self.0 & 0x3F) as usize]
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        Square::ALL[((self.0 >> 6) & 0x3F) as usize]
    }

    /// Returns the move flag.
    #[inline]
    pub const fn flag(self) -> MoveFlag {
        MoveFlag::from_bits((self.0 >> 12) as u8)
    }

    /// Returns the promotion choice carried by this move, if any.
    #[inline]
    pub const fn promotion(self) -> Option<PromotionChoice> {
        self.flag().promotion_choice()
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_coordinate_string(self) -> String {
        let promo = match self.promotion() {
            Some(PromotionChoice::Knight) => "n",
            Some(PromotionChoice::Bishop) => "b",
            Some(PromotionChoice::Rook) => "r",
            Some(PromotionChoice::Queen) => "q",
            None => "",
        };
        format!("{}{}{}", self.from(), self.to(), promo)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}, {:?})", self.to_coordinate_string(), self.flag())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinate_string())
    }
}
