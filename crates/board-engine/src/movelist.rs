//! Move lists produced by whole-side generation.

use std::ops::Deref;

use board_core::{Move, MoveFlag, PromotionChoice, Square};

/// Every move of one side, with a pawn reaching the last rank listed once
/// per promotion choice.
///
/// Derefs to a slice, so indexing, `len` and `iter` come from `[Move]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Creates an empty move list.
    pub fn new() -> Self {
        MoveList::default()
    }

    /// Adds a non-promoting move with its special-action flag.
    pub fn push(&mut self, from: Square, to: Square, flag: MoveFlag) {
        self.moves.push(Move::new(from, to, flag));
    }

    /// Adds one move per promotion choice for a pawn arriving on `to`.
    pub fn push_promotions(&mut self, from: Square, to: Square) {
        self.moves.extend(
            PromotionChoice::ALL
                .into_iter()
                .map(|choice| Move::promoting(from, to, choice)),
        );
    }
}

impl Deref for MoveList {
    type Target = [Move];

    fn deref(&self) -> &[Move] {
        &self.moves
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn push_keeps_the_flag() {
        let mut list = MoveList::new();
        assert!(list.is_empty());

        list.push(sq("e2"), sq("e4"), MoveFlag::DoublePush);
        list.push(Square::E1, Square::G1, MoveFlag::CastleKingside);

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].flag(), MoveFlag::DoublePush);
        assert_eq!(list[1], Move::new(Square::E1, Square::G1, MoveFlag::CastleKingside));
    }

    #[test]
    fn promotions_expand_to_every_choice() {
        let mut list = MoveList::new();
        list.push_promotions(sq("a7"), sq("b8"));

        assert_eq!(list.len(), PromotionChoice::ALL.len());
        let choices: Vec<_> = list.iter().filter_map(|mv| mv.promotion()).collect();
        assert_eq!(choices, PromotionChoice::ALL);
        assert!(list.iter().all(|mv| mv.from() == sq("a7") && mv.to() == sq("b8")));
        assert!(list.contains(&Move::promoting(sq("a7"), sq("b8"), PromotionChoice::Knight)));
    }
}
