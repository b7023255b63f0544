//! A set of digits, optimized for candidate notes.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

use crate::{Digit, GridShape};

/// A set of digits represented as a bitmask.
///
/// Bit `d - 1` of the underlying `u16` represents digit `d`. The type itself
/// is shape-agnostic; [`DigitSet::full`] builds the universe for a given
/// board, and digit construction elsewhere guarantees members fit the board
/// they are used on.
///
/// Used for candidate notes on cells and for permutation checks over
/// constraint groups.
///
/// # Examples
///
/// ```
/// use minidoku_core::{DigitSet, GridShape};
///
/// let shape = GridShape::SIX;
/// let mut notes = DigitSet::EMPTY;
/// notes.insert(shape.digit(2).unwrap());
/// notes.insert(shape.digit(5).unwrap());
///
/// assert_eq!(notes.len(), 2);
/// assert!(notes.contains(shape.digit(5).unwrap()));
/// assert_eq!(DigitSet::full(shape).len(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Returns the set of all digits `1..=N` for a board shape.
    #[must_use]
    pub const fn full(shape: GridShape) -> Self {
        Self((1 << shape.size()) - 1)
    }

    /// Adds a digit to the set.
    pub fn insert(&mut self, digit: Digit) {
        self.0 |= 1 << (digit.value() - 1);
    }

    /// Removes a digit from the set.
    pub fn remove(&mut self, digit: Digit) {
        self.0 &= !(1 << (digit.value() - 1));
    }

    /// Returns whether the set contains a digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & (1 << (digit.value() - 1)) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns an iterator over the digits in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        (1..=9u8)
            .filter(move |&value| self.0 & (1 << (value - 1)) != 0)
            .map(Digit::new_unchecked)
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}
