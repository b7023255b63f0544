//! Constraint group (row, column, box) representation.

use crate::{GridShape, Position};

/// A constraint group: a row, column, or box.
///
/// Every house of a board of size `N` contains exactly `N` cells, and a
/// solved board holds a permutation of `1..=N` in each of its `3N` houses.
///
/// # Examples
///
/// ```
/// use minidoku_core::{GridShape, House};
///
/// let shape = GridShape::SIX;
/// assert_eq!(House::all(shape).count(), 18);
/// for house in House::all(shape) {
///     assert_eq!(house.positions(shape).count(), 6);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate.
    Row {
        /// Row index (0-based).
        y: u8,
    },
    /// A column identified by its x coordinate.
    Column {
        /// Column index (0-based).
        x: u8,
    },
    /// A box identified by its index (left to right, top to bottom).
    Box {
        /// Box index (0-based).
        index: u8,
    },
}

impl House {
    /// Returns an iterator over all houses of a board, rows first, then
    /// columns, then boxes.
    pub fn all(shape: GridShape) -> impl Iterator<Item = Self> {
        let size = shape.size();
        let rows = (0..size).map(|y| Self::Row { y });
        let columns = (0..size).map(|x| Self::Column { x });
        let boxes = (0..size).map(|index| Self::Box { index });
        rows.chain(columns).chain(boxes)
    }

    /// Converts a cell index within the house (`0..N`) into an absolute
    /// position.
    ///
    /// # Panics
    ///
    /// Panics if `i >= shape.size()`.
    #[must_use]
    pub fn position_at(self, shape: GridShape, i: u8) -> Position {
        assert!(i < shape.size());
        match self {
            Self::Row { y } => Position::new(i, y),
            Self::Column { x } => Position::new(x, i),
            Self::Box { index } => shape.box_cell(index, i),
        }
    }

    /// Returns all positions contained in this house.
    pub fn positions(self, shape: GridShape) -> impl Iterator<Item = Position> {
        (0..shape.size()).map(move |i| self.position_at(shape, i))
    }
}
