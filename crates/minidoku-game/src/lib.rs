//! Game session management for mini sudoku puzzles.
//!
//! This crate is the stateful layer between the pure engine
//! (`minidoku-core`, `minidoku-solver`, `minidoku-generator`) and a UI. A
//! [`GameSession`] owns one puzzle for its lifetime: the editable cells,
//! the immutable solution it was carved from, the mistake counter, and the
//! current selection. Rendering, input events, timers, and persistence stay
//! with the caller; the session only answers what happened to the board.
//!
//! - [`cell_state`]: the per-cell state machine (given / filled / notes /
//!   empty)
//! - [`session`]: [`GameSession`] and its input operations
//! - [`difficulty`]: the [`Difficulty`] policy mapping a level to a removal
//!   target and scoring parameters
//! - [`score`]: the score formula and the in-memory [`Leaderboard`]
//!
//! # Examples
//!
//! ```
//! use minidoku_core::GridShape;
//! use minidoku_game::{Difficulty, GameSession};
//! use minidoku_generator::PuzzleGenerator;
//!
//! let shape = GridShape::SIX;
//! let generator = PuzzleGenerator::new(shape);
//! let difficulty = Difficulty::Medium;
//! let puzzle = generator.generate(difficulty.removal_target(shape));
//!
//! let session = GameSession::new(puzzle);
//! assert!(!session.is_solved());
//! assert_eq!(session.mistakes(), 0);
//! ```

pub mod cell_state;
pub mod difficulty;
pub mod score;
pub mod session;

pub use self::{
    cell_state::CellState,
    difficulty::Difficulty,
    score::{Leaderboard, ScoreRecord, compute_score, format_time},
    session::{GameError, GameSession, GameStatus, Placement},
};
