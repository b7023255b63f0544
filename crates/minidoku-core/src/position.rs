//! Board position representation.

use std::fmt::{self, Display};

/// An `(x, y)` cell coordinate on a board.
///
/// `x` is the column (left to right) and `y` is the row (top to bottom).
/// Positions are plain coordinates and carry no board size of their own;
/// range validation happens at the [`Grid`] boundary.
///
/// The `Ord` implementation sorts row-major (by `y`, then `x`), matching the
/// board's cell order, so ordered collections of positions iterate in
/// scan order.
///
/// [`Grid`]: crate::Grid
///
/// # Examples
///
/// ```
/// use minidoku_core::Position;
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.x, 2);
/// assert_eq!(pos.y, 5);
/// assert!(Position::new(8, 0) < Position::new(0, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column index (0-based).
    pub x: u8,
    /// Row index (0-based).
    pub y: u8,
}

impl Position {
    /// Creates a position from column and row indices.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
