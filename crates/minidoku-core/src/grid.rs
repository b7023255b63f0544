//! The board itself: a flat row-major sequence of optional digits.

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use derive_more::{Display, Error};

use crate::{Digit, DigitSet, GridShape, House, Position, shape::InvalidDigitError};

/// An `N×N` board stored as a flat row-major sequence of cells.
///
/// Each cell is either empty (`None`) or holds a [`Digit`]. The grid is pure
/// data plus bounds-checked access; the rules of the puzzle live in the
/// solver crate.
///
/// Out-of-range coordinates are rejected with [`GridError::OutOfRange`]
/// rather than clamped; clamping is a UI navigation policy, not a board
/// policy. The [`Index`] operators are available for access at positions
/// already known to be in range (for example those produced by
/// [`GridShape::positions`]).
///
/// # Examples
///
/// ```
/// use minidoku_core::{Grid, GridShape, Position};
///
/// let shape = GridShape::CLASSIC;
/// let mut grid = Grid::new(shape);
/// assert_eq!(grid.empty_count(), 81);
///
/// let five = shape.digit(5).unwrap();
/// grid.set(Position::new(0, 0), Some(five)).unwrap();
/// assert!(grid.set(Position::new(9, 0), Some(five)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    shape: GridShape,
    cells: Vec<Option<Digit>>,
}

/// Error returned by bounds-checked grid access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// A coordinate fell outside `[0, N)`.
    #[display("position {pos} is outside the {size}×{size} board")]
    OutOfRange {
        /// The rejected position.
        pos: Position,
        /// The board size.
        size: u8,
    },
}

/// Error returned when parsing a grid from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridParseError {
    /// A character was neither a digit nor an empty-cell marker.
    #[display("unexpected character {_0:?} in grid text")]
    UnexpectedChar(#[error(not(source))] char),
    /// A digit in the text does not fit the board size.
    #[display("{_0}")]
    InvalidDigit(InvalidDigitError),
    /// The text did not contain exactly `N²` cells.
    #[display("expected {expected} cells, found {found}")]
    WrongCellCount {
        /// The shape's cell count.
        expected: usize,
        /// The number of cells found in the text.
        found: usize,
    },
}

impl Grid {
    /// Creates an all-empty grid of the given shape.
    #[must_use]
    pub fn new(shape: GridShape) -> Self {
        Self {
            shape,
            cells: vec![None; shape.cell_count()],
        }
    }

    /// Returns the shape of this grid.
    #[must_use]
    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    /// Returns the cell at a position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] if the position is off the board.
    pub fn get(&self, pos: Position) -> Result<Option<Digit>, GridError> {
        self.check(pos)?;
        Ok(self.cells[self.shape.index_of(pos)])
    }

    /// Sets the cell at a position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] if the position is off the board.
    pub fn set(&mut self, pos: Position, cell: Option<Digit>) -> Result<(), GridError> {
        self.check(pos)?;
        let index = self.shape.index_of(pos);
        self.cells[index] = cell;
        Ok(())
    }

    fn check(&self, pos: Position) -> Result<(), GridError> {
        if self.shape.contains(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfRange {
                pos,
                size: self.shape.size(),
            })
        }
    }

    /// Returns the first empty cell in row-major scan order.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        let index = self.cells.iter().position(Option::is_none)?;
        Some(self.shape.position_at(index))
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    /// Returns whether every cell holds a digit.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns whether the grid is a complete valid solution: no empty
    /// cells, and every row, column, and box a permutation of `1..=N`.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        if !self.is_filled() {
            return false;
        }
        let full = DigitSet::full(self.shape);
        House::all(self.shape).all(|house| {
            let digits: DigitSet = house
                .positions(self.shape)
                .filter_map(|pos| self[pos])
                .collect();
            digits == full
        })
    }

    /// Parses a grid from text.
    ///
    /// Digits `1..=N` fill cells; `.`, `_`, and `0` mark empty cells;
    /// whitespace is ignored. The text must contain exactly `N²` cells in
    /// row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`GridParseError`] on unexpected characters, digits that do
    /// not fit the shape, or a wrong cell count.
    ///
    /// # Examples
    ///
    /// ```
    /// use minidoku_core::{Grid, GridShape, Position};
    ///
    /// let grid = Grid::parse(
    ///     GridShape::SIX,
    ///     "
    ///     123 456
    ///     ... ...
    ///     ... ...
    ///     ... ...
    ///     ... ...
    ///     ... ...
    ///     ",
    /// )
    /// .unwrap();
    /// assert_eq!(grid[Position::new(3, 0)].unwrap().value(), 4);
    /// ```
    pub fn parse(shape: GridShape, text: &str) -> Result<Self, GridParseError> {
        let mut grid = Self::new(shape);
        let mut count = 0;
        for ch in text.chars().filter(|ch| !ch.is_whitespace()) {
            let cell = match ch {
                '.' | '_' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = ch.to_digit(10).unwrap_or_default() as u8;
                    Some(shape.digit(value).map_err(GridParseError::InvalidDigit)?)
                }
                _ => return Err(GridParseError::UnexpectedChar(ch)),
            };
            if count < grid.cells.len() {
                grid.cells[count] = cell;
            }
            count += 1;
        }
        if count != shape.cell_count() {
            return Err(GridParseError::WrongCellCount {
                expected: shape.cell_count(),
                found: count,
            });
        }
        Ok(grid)
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    /// # Panics
    ///
    /// Panics if the position is off the board; use [`Grid::get`] for
    /// fallible access.
    fn index(&self, pos: Position) -> &Self::Output {
        assert!(self.shape.contains(pos), "position {pos} off the board");
        &self.cells[self.shape.index_of(pos)]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        assert!(self.shape.contains(pos), "position {pos} off the board");
        let index = self.shape.index_of(pos);
        &mut self.cells[index]
    }
}

impl fmt::Display for Grid {
    /// Formats the grid as a flat row-major string, `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED_SIX: &str = "
        123 456
        456 123
        231 564
        564 231
        312 645
        645 312
    ";

    #[test]
    fn test_get_set_bounds() {
        let shape = GridShape::SIX;
        let mut grid = Grid::new(shape);
        let digit = shape.digit(3).unwrap();

        grid.set(Position::new(5, 5), Some(digit)).unwrap();
        assert_eq!(grid.get(Position::new(5, 5)), Ok(Some(digit)));

        let err = grid.set(Position::new(6, 0), Some(digit)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfRange {
                pos: Position::new(6, 0),
                size: 6
            }
        );
        assert!(grid.get(Position::new(0, 6)).is_err());
    }

    #[test]
    fn test_first_empty_scan_order() {
        let shape = GridShape::SIX;
        let mut grid = Grid::new(shape);
        assert_eq!(grid.first_empty(), Some(Position::new(0, 0)));

        let digit = shape.digit(1).unwrap();
        grid.set(Position::new(0, 0), Some(digit)).unwrap();
        grid.set(Position::new(1, 0), Some(digit)).unwrap();
        assert_eq!(grid.first_empty(), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_counts() {
        let shape = GridShape::SIX;
        let mut grid = Grid::new(shape);
        assert_eq!(grid.empty_count(), 36);
        assert_eq!(grid.filled_count(), 0);

        grid.set(Position::new(0, 0), Some(shape.digit(1).unwrap()))
            .unwrap();
        assert_eq!(grid.empty_count(), 35);
        assert_eq!(grid.filled_count(), 1);
        assert!(!grid.is_filled());
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let grid = Grid::parse(GridShape::SIX, SOLVED_SIX).unwrap();
        let text = grid.to_string();
        let reparsed = Grid::parse(GridShape::SIX, &text).unwrap();
        assert_eq!(grid, reparsed);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Grid::parse(GridShape::SIX, "x"),
            Err(GridParseError::UnexpectedChar('x'))
        ));
        assert!(matches!(
            Grid::parse(GridShape::SIX, &"7".repeat(36)),
            Err(GridParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            Grid::parse(GridShape::SIX, "123"),
            Err(GridParseError::WrongCellCount {
                expected: 36,
                found: 3
            })
        ));
    }

    #[test]
    fn test_is_solved() {
        let grid = Grid::parse(GridShape::SIX, SOLVED_SIX).unwrap();
        assert!(grid.is_solved());

        // Swapping two cells in a row breaks the columns.
        let mut broken = grid.clone();
        let a = broken[Position::new(0, 0)];
        let b = broken[Position::new(1, 0)];
        broken[Position::new(0, 0)] = b;
        broken[Position::new(1, 0)] = a;
        assert!(!broken.is_solved());

        // A grid with any empty cell is not solved.
        let mut incomplete = grid;
        incomplete[Position::new(3, 3)] = None;
        assert!(!incomplete.is_solved());
    }
}
