//! Constraint checking and backtracking search for mini sudoku boards.
//!
//! This crate contains the two rule-aware pieces of the engine:
//!
//! - [`rules`]: stateless constraint checks — [`can_place`] for a single
//!   candidate placement and [`find_conflicts`] for re-validating a whole
//!   partial board after a move.
//! - [`backtracking`]: the randomized exhaustive [`Solver`] that completes a
//!   partial board (or proves it unsolvable), used both to produce fresh
//!   solutions and to verify solvability while carving puzzles.
//!
//! The solver deliberately has no heuristics beyond immediate constraint
//! checking: it takes the first empty cell in scan order and tries the
//! digits in uniformly random order. That random candidate order is the
//! engine's only source of puzzle variety.
//!
//! # Examples
//!
//! ```
//! use minidoku_core::{Grid, GridShape};
//! use minidoku_solver::Solver;
//!
//! let mut grid = Grid::new(GridShape::SIX);
//! let solved = Solver::new().solve(&mut grid, &mut rand::rng()).unwrap();
//! assert!(solved);
//! assert!(grid.is_solved());
//! ```
//!
//! [`can_place`]: rules::can_place
//! [`find_conflicts`]: rules::find_conflicts

pub mod backtracking;
pub mod rules;

pub use self::backtracking::{Solver, SolverError};
