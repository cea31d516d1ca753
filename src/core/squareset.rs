// Copyright 2021-2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::core::Square;
use std::iter::FromIterator;
use std::ops;

/// A set of squares on the chessboard. The implementation of SquareSet is designed to mirror
/// [`std::collections::HashSet`], but stores squares as a single 64-bit word.
///
/// The engine never stores a SquareSet as ground truth; occupancy sets are derived from the rosters on demand.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SquareSet(u64);

impl SquareSet {
    /// Creates a new, empty SquareSet.
    pub const fn empty() -> SquareSet {
        SquareSet(0)
    }

    /// Creates a new SquareSet with all squares present in the set.
    pub const fn all() -> SquareSet {
        SquareSet(u64::MAX)
    }

    /// Tests whether or not the given square is contained within this SquareSet.
    pub const fn contains(&self, square: Square) -> bool {
        self.0 & (1u64 << square.0) != 0
    }

    pub fn insert(&mut self, square: Square) {
        self.0 |= 1u64 << square.0;
    }

    pub fn remove(&mut self, square: Square) {
        self.0 &= !(1u64 << square.0);
    }

    pub const fn len(&self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn and(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 & other.0)
    }

    pub const fn or(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 | other.0)
    }

    pub const fn not(self) -> SquareSet {
        SquareSet(!self.0)
    }
}

impl ops::BitOr for SquareSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl ops::Not for SquareSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.not()
    }
}

impl ops::BitAnd for SquareSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIterator;

    fn into_iter(self) -> Self::IntoIter {
        SquareSetIterator(self.0)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::empty();
        for sq in iter {
            set.insert(sq);
        }

        set
    }
}

pub const SS_RANK_8: SquareSet = SquareSet(0xFF00000000000000);

/// An iterator over squares stored in a [`SquareSet`], in ascending square order.
pub struct SquareSetIterator(u64);

impl Iterator for SquareSetIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let next = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Some(Square(next))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SquareSet, SS_RANK_8};
    use crate::core::*;

    #[test]
    fn test_set_clear() {
        let mut set = SquareSet::empty();
        assert!(!set.contains(A1));
        set.insert(A1);
        assert!(set.contains(A1));
        set.remove(A1);
        assert!(!set.contains(A1));
    }

    #[test]
    fn count() {
        let set: SquareSet = vec![A3, A4, A5, A4].into_iter().collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn iter() {
        let mut set = SquareSet::empty();
        set.insert(A5);
        set.insert(A3);
        set.insert(A4);
        let squares: Vec<_> = set.into_iter().collect();
        assert_eq!(squares, vec![A3, A4, A5]);
    }

    #[test]
    fn goal_rank() {
        assert!(SS_RANK_8.contains(A8));
        assert!(SS_RANK_8.contains(H8));
        assert!(!SS_RANK_8.contains(H7));
        assert_eq!(8, SS_RANK_8.len());
        assert!((SS_RANK_8 & !SS_RANK_8).is_empty());
        assert_eq!(SquareSet::all(), !SquareSet::empty());
    }
}
