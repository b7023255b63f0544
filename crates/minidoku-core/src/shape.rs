//! Board shape configuration and index arithmetic.

use std::collections::BTreeSet;

use derive_more::{Display, Error};

use crate::{Digit, Position};

/// The box dimensions of a board.
///
/// A board of shape `(box_width, box_height)` has `N = box_width *
/// box_height` rows, columns, and digits, and is tiled without overlap by
/// `box_height × box_width` boxes. The two configurations used by the game
/// are available as [`GridShape::SIX`] and [`GridShape::CLASSIC`], but any
/// shape with `1 <= N <= 9` is accepted.
///
/// All index arithmetic for the flat row-major cell array lives here:
/// position/index conversion, box lookup, and peer sets.
///
/// # Examples
///
/// ```
/// use minidoku_core::{GridShape, Position};
///
/// let shape = GridShape::SIX;
/// assert_eq!(shape.size(), 6);
/// assert_eq!(shape.cell_count(), 36);
/// assert_eq!(shape.index_of(Position::new(2, 1)), 8);
/// assert_eq!(shape.position_at(8), Position::new(2, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridShape {
    box_width: u8,
    box_height: u8,
}

/// Error returned when constructing a [`GridShape`] from invalid box
/// dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("invalid box dimensions {box_width}×{box_height}: board size must be in 1..=9")]
pub struct ShapeError {
    /// The rejected box width.
    pub box_width: u8,
    /// The rejected box height.
    pub box_height: u8,
}

/// Error returned when a digit value does not fit the board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("digit {value} is outside the range 1..={size}")]
pub struct InvalidDigitError {
    /// The rejected value.
    pub value: u8,
    /// The board size the value was checked against.
    pub size: u8,
}

impl GridShape {
    /// The classic 9×9 board with 3×3 boxes.
    pub const CLASSIC: Self = Self {
        box_width: 3,
        box_height: 3,
    };

    /// The 6×6 board with 3×2 boxes (3 columns × 2 rows per box).
    pub const SIX: Self = Self {
        box_width: 3,
        box_height: 2,
    };

    /// Creates a shape from box dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] unless `1 <= box_width * box_height <= 9`.
    /// The upper bound keeps digits single-character and lets [`DigitSet`]
    /// fit in a `u16`.
    ///
    /// [`DigitSet`]: crate::DigitSet
    pub fn new(box_width: u8, box_height: u8) -> Result<Self, ShapeError> {
        let size = u16::from(box_width) * u16::from(box_height);
        if box_width == 0 || box_height == 0 || size > 9 {
            return Err(ShapeError {
                box_width,
                box_height,
            });
        }
        Ok(Self {
            box_width,
            box_height,
        })
    }

    /// Returns the box width.
    #[must_use]
    pub const fn box_width(self) -> u8 {
        self.box_width
    }

    /// Returns the box height.
    #[must_use]
    pub const fn box_height(self) -> u8 {
        self.box_height
    }

    /// Returns the board size `N` (rows, columns, and digits).
    #[must_use]
    pub const fn size(self) -> u8 {
        self.box_width * self.box_height
    }

    /// Returns the number of cells, `N²`.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        let size = self.size() as usize;
        size * size
    }

    /// Returns whether a position lies on the board.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.x < self.size() && pos.y < self.size()
    }

    /// Converts a position to its flat row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the position is off the board.
    #[must_use]
    pub fn index_of(self, pos: Position) -> usize {
        debug_assert!(self.contains(pos), "position off the board");
        usize::from(pos.y) * usize::from(self.size()) + usize::from(pos.x)
    }

    /// Converts a flat row-major cell index back to a position.
    ///
    /// # Panics
    ///
    /// Panics if `index >= cell_count()`.
    #[must_use]
    pub fn position_at(self, index: usize) -> Position {
        assert!(index < self.cell_count(), "cell index off the board");
        let size = usize::from(self.size());
        #[expect(clippy::cast_possible_truncation)]
        Position::new((index % size) as u8, (index / size) as u8)
    }

    /// Returns an iterator over all positions in row-major scan order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..self.cell_count()).map(move |index| self.position_at(index))
    }

    /// Checks a value against the board size and converts it to a [`Digit`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDigitError`] unless `1 <= value <= size()`.
    pub fn digit(self, value: u8) -> Result<Digit, InvalidDigitError> {
        if value == 0 || value > self.size() {
            return Err(InvalidDigitError {
                value,
                size: self.size(),
            });
        }
        Ok(Digit::new_unchecked(value))
    }

    /// Returns an iterator over all digits `1..=N` in ascending order.
    pub fn digits(self) -> impl Iterator<Item = Digit> {
        (1..=self.size()).map(Digit::new_unchecked)
    }

    /// Returns the top-left position of the box containing `pos`.
    #[must_use]
    pub fn box_origin(self, pos: Position) -> Position {
        Position::new(
            pos.x / self.box_width * self.box_width,
            pos.y / self.box_height * self.box_height,
        )
    }

    /// Returns the index (0-based, left to right, top to bottom) of the box
    /// containing `pos`.
    #[must_use]
    pub fn box_index_of(self, pos: Position) -> u8 {
        let boxes_per_row = self.size() / self.box_width;
        pos.y / self.box_height * boxes_per_row + pos.x / self.box_width
    }

    /// Converts a box index and a cell index within the box (row-major) into
    /// an absolute position.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell` is out of range (both run `0..N`).
    #[must_use]
    pub fn box_cell(self, box_index: u8, cell: u8) -> Position {
        assert!(box_index < self.size() && cell < self.size());
        let boxes_per_row = self.size() / self.box_width;
        let origin_x = box_index % boxes_per_row * self.box_width;
        let origin_y = box_index / boxes_per_row * self.box_height;
        Position::new(origin_x + cell % self.box_width, origin_y + cell / self.box_width)
    }

    /// Returns the positions of the box containing `pos`.
    pub fn box_positions(self, pos: Position) -> impl Iterator<Item = Position> {
        let origin = self.box_origin(pos);
        let (bw, bh) = (self.box_width, self.box_height);
        (0..bh).flat_map(move |dy| (0..bw).map(move |dx| Position::new(origin.x + dx, origin.y + dy)))
    }

    /// Returns the peer set of a cell: every other position sharing its row,
    /// column, or box.
    ///
    /// Purely a function of the position and the shape; the returned set
    /// never includes `pos` itself. Used for constraint checking and for
    /// clearing candidate notes once a digit is placed.
    ///
    /// # Examples
    ///
    /// ```
    /// use minidoku_core::{GridShape, Position};
    ///
    /// // 9×9: 8 row + 8 column + 4 box-only peers
    /// let peers = GridShape::CLASSIC.peers(Position::new(0, 0));
    /// assert_eq!(peers.len(), 20);
    /// assert!(!peers.contains(&Position::new(0, 0)));
    /// ```
    #[must_use]
    pub fn peers(self, pos: Position) -> BTreeSet<Position> {
        let mut peers = BTreeSet::new();
        for x in 0..self.size() {
            peers.insert(Position::new(x, pos.y));
        }
        for y in 0..self.size() {
            peers.insert(Position::new(pos.x, y));
        }
        peers.extend(self.box_positions(pos));
        peers.remove(&pos);
        peers
    }
}
