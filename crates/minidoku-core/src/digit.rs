//! Cell value representation.

use std::fmt::{self, Display};

/// A cell value in the range `1..=N` for a board of size `N`.
///
/// Digits are created through [`GridShape::digit`], which checks the value
/// against the board size, or by iterating [`GridShape::digits`]. The zero
/// "empty" marker of the flat-array model is represented as `None` in
/// [`Grid`] cells rather than as a digit.
///
/// [`GridShape::digit`]: crate::GridShape::digit
/// [`GridShape::digits`]: crate::GridShape::digits
/// [`Grid`]: crate::Grid
///
/// # Examples
///
/// ```
/// use minidoku_core::GridShape;
///
/// let shape = GridShape::SIX;
/// let digit = shape.digit(6).unwrap();
/// assert_eq!(digit.value(), 6);
/// assert!(shape.digit(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit without a shape check.
    ///
    /// Callers must guarantee `1 <= value <= 9` and that the value fits the
    /// board the digit will be used on.
    pub(crate) const fn new_unchecked(value: u8) -> Self {
        debug_assert!(value >= 1 && value <= 9);
        Self(value)
    }

    /// Returns the numeric value of this digit.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}
