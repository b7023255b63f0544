//! Core data structures for mini sudoku (Latin-square) puzzles.
//!
//! This crate provides the board model shared by the solver, generator, and
//! game session crates. Unlike a classic sudoku library it is not pinned to
//! 9×9: every type is parameterized by a [`GridShape`] describing the box
//! dimensions, with the board size derived as `box_width * box_height`.
//!
//! # Overview
//!
//! - [`shape`]: [`GridShape`], the board configuration (box dimensions,
//!   index arithmetic, peer sets)
//! - [`position`]: [`Position`], an `(x, y)` cell coordinate
//! - [`digit`]: [`Digit`], a cell value in `1..=N`
//! - [`digit_set`]: [`DigitSet`], a bitmask set of digits (candidate notes)
//! - [`grid`]: [`Grid`], the flat row-major board with empty cells
//! - [`house`]: [`House`], a row, column, or box constraint group
//!
//! # Examples
//!
//! ```
//! use minidoku_core::{Grid, GridShape, Position};
//!
//! // A 6×6 board tiled by 3×2 boxes
//! let shape = GridShape::SIX;
//! let mut grid = Grid::new(shape);
//!
//! let digit = shape.digit(4).unwrap();
//! grid.set(Position::new(2, 0), Some(digit)).unwrap();
//! assert_eq!(grid[Position::new(2, 0)], Some(digit));
//! assert_eq!(grid.empty_count(), 35);
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;
pub mod shape;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, GridError, GridParseError},
    house::House,
    position::Position,
    shape::{GridShape, InvalidDigitError, ShapeError},
};
