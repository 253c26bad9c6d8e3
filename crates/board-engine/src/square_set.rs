//! Sets of squares packed into a 64-bit mask.
//!
//! Every move query in the engine answers with a [`SquareSet`]: bit 0 = a1,
//! bit 1 = b1, ..., bit 63 = h8 (little-endian rank-file mapping).

use board_core::Square;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub};

/// A set of board squares.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(pub u64);

impl SquareSet {
    /// No squares.
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Every square.
    pub const FULL: SquareSet = SquareSet(!0);

    /// Creates a set with a single square.
    #[inline]
    pub const fn from_square(sq: Square) -> Self {
        SquareSet(1u64 << sq.index())
    }

    /// Returns true if the set is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is in the set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u64 << sq.index())) != 0
    }

    /// Adds the given square.
    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }

    /// Removes the given square.
    #[inline]
    pub fn remove(&mut self, sq: Square) {
        self.0 &= !(1u64 << sq.index());
    }

    /// Returns a copy with the given square added.
    #[inline]
    pub const fn with(self, sq: Square) -> Self {
        SquareSet(self.0 | (1u64 << sq.index()))
    }

    /// Returns true if every square of `self` is also in `other`.
    #[inline]
    pub const fn is_subset(self, other: SquareSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Pops and returns the lowest square.
    #[inline]
    pub fn pop_first(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let index = self.0.trailing_zeros() as usize;
            self.0 &= self.0 - 1;
            Some(Square::ALL[index])
        }
    }

    /// Iterates over the squares in ascending index order.
    #[inline]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self)
    }
}

impl BitAnd for SquareSet {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 & rhs.0)
    }
}

impl BitAndAssign for SquareSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for SquareSet {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Sub for SquareSet {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 & !rhs.0)
    }
}

impl Not for SquareSet {
    type Output = Self;
    #[inline]
    fn not(self) -> Self::Output {
        SquareSet(!self.0)
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the squares of a [`SquareSet`].
pub struct SquareSetIter(SquareSet);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SquareSetIter(self)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_square() {
        let set = SquareSet::from_square(Square::A1);
        assert_eq!(set.0, 1);
        assert!(set.contains(Square::A1));
        assert!(!set.contains(Square::B1));
    }

    #[test]
    fn count() {
        assert_eq!(SquareSet::EMPTY.count(), 0);
        assert_eq!(SquareSet::FULL.count(), 64);
    }

    #[test]
    fn insert_remove() {
        let mut set = SquareSet::EMPTY;
        set.insert(Square::E1);
        set.insert(Square::E8);
        assert_eq!(set.count(), 2);
        set.remove(Square::E1);
        assert!(!set.contains(Square::E1));
        assert!(set.contains(Square::E8));
    }

    #[test]
    fn iterates_in_index_order() {
        let set: SquareSet = [Square::H8, Square::A1, Square::E1].into_iter().collect();
        let squares: Vec<Square> = set.into_iter().collect();
        assert_eq!(squares, vec![Square::A1, Square::E1, Square::H8]);
    }

    #[test]
    fn set_algebra() {
        let a = SquareSet::from_square(Square::A1).with(Square::B1);
        let b = SquareSet::from_square(Square::B1);
        assert_eq!(a & b, b);
        assert_eq!(a - b, SquareSet::from_square(Square::A1));
        assert!(b.is_subset(a));
        assert!(!a.is_subset(b));
    }

    #[test]
    fn debug_lists_squares() {
        let set = SquareSet::from_square(Square::E1);
        assert_eq!(format!("{:?}", set), "{Square(e1)}");
    }
}
