//! Puzzle generation for mini sudoku boards.
//!
//! Generation is a two-step pipeline:
//!
//! 1. **Solution generation**: run the randomized backtracking
//!    [`Solver`] on an all-empty board; the random candidate order makes
//!    every run produce a fresh valid solution.
//! 2. **Carving**: walk the board's cells in a random order, zero each one
//!    tentatively, and keep the removal only if a probe on a deep copy shows
//!    the board is still solvable. Stop after `removal_target` successful
//!    removals or when every cell has been tried.
//!
//! Carving guarantees *solvability*, not *uniqueness*: a carved puzzle may
//! admit completions that disagree with the original solution on removed
//! cells. That is a deliberate property of the game this engine powers,
//! which grades against the original solution.
//!
//! Every puzzle is identified by a [`PuzzleSeed`]; generating with the same
//! seed reproduces the same puzzle bit for bit.
//!
//! # Examples
//!
//! ```
//! use minidoku_core::GridShape;
//! use minidoku_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new(GridShape::SIX);
//! let puzzle = generator.generate(16);
//!
//! assert!(puzzle.solution.is_solved());
//! assert_eq!(puzzle.problem.empty_count(), puzzle.removed);
//! ```

use log::debug;
use minidoku_core::{Grid, GridShape, Position};
use minidoku_solver::Solver;
use rand::seq::SliceRandom as _;

pub use self::seed::{ParseSeedError, PuzzleSeed};

mod seed;

/// A generated puzzle: the carved problem, its source solution, and the
/// seed that reproduces both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable board with carved cells empty.
    pub problem: Grid,
    /// The complete solution the problem was carved from.
    pub solution: Grid,
    /// One flag per cell in row-major order: `true` for clue cells that
    /// survived carving (fixed, never editable), `false` for carved cells.
    pub fixed: Vec<bool>,
    /// The number of cells actually removed. May fall short of the
    /// requested target when no further cell can be removed without losing
    /// solvability; that is a silent best-effort outcome, not an error.
    pub removed: usize,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

impl GeneratedPuzzle {
    /// Returns whether the cell at `pos` is a fixed clue.
    ///
    /// # Panics
    ///
    /// Panics if the position is off the board.
    #[must_use]
    pub fn is_fixed(&self, pos: Position) -> bool {
        self.fixed[self.problem.shape().index_of(pos)]
    }
}

/// Generates puzzles of a fixed shape.
///
/// The generator owns no mutable state; each call derives its entire random
/// stream from a [`PuzzleSeed`], so calls are independent and reproducible.
///
/// # Examples
///
/// ```
/// use minidoku_core::GridShape;
/// use minidoku_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new(GridShape::CLASSIC);
/// let seed = PuzzleSeed::from_phrase("docs");
/// let first = generator.generate_with_seed(seed, 46);
/// let second = generator.generate_with_seed(seed, 46);
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator {
    shape: GridShape,
}

impl PuzzleGenerator {
    /// Creates a generator for boards of the given shape.
    #[must_use]
    pub const fn new(shape: GridShape) -> Self {
        Self { shape }
    }

    /// Returns the board shape this generator produces.
    #[must_use]
    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// `removal_target` is the number of cells to carve out; the difficulty
    /// policy that picks it is the caller's (see `minidoku-game`). The
    /// actual removal count is reported in [`GeneratedPuzzle::removed`].
    #[must_use]
    pub fn generate(&self, removal_target: usize) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random(), removal_target)
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// The same `(shape, seed, removal_target)` triple always produces the
    /// same puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed, removal_target: usize) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let solver = Solver::new();

        // An empty board always has a completion, and the solver carries no
        // budget here, so this cannot fail.
        let mut solution = Grid::new(self.shape);
        let solved = solver
            .solve(&mut solution, &mut rng)
            .expect("unbudgeted search cannot be exhausted");
        assert!(solved, "an empty board is always solvable");

        let mut problem = solution.clone();
        let mut order: Vec<Position> = self.shape.positions().collect();
        order.shuffle(&mut rng);

        let mut removed = 0;
        for pos in order {
            if removed >= removal_target {
                break;
            }
            let backup = problem[pos];
            problem[pos] = None;

            // Probe a deep copy; a failed probe must not disturb the
            // working puzzle. Solvability here means *some* completion
            // exists, not that the carved value is forced.
            let mut probe = problem.clone();
            let solvable = solver
                .solve(&mut probe, &mut rng)
                .expect("unbudgeted search cannot be exhausted");
            if solvable {
                removed += 1;
            } else {
                problem[pos] = backup;
            }
        }

        debug!(
            "carved {removed} of {removal_target} requested cells ({} clues remain, seed {seed})",
            problem.filled_count(),
        );

        let fixed = self
            .shape
            .positions()
            .map(|pos| problem[pos].is_some())
            .collect();

        GeneratedPuzzle {
            problem,
            solution,
            fixed,
            removed,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use minidoku_solver::rules;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_solutions_are_valid_for_both_shapes() {
        for shape in [GridShape::SIX, GridShape::CLASSIC] {
            let generator = PuzzleGenerator::new(shape);
            let puzzle = generator.generate(0);
            assert!(puzzle.solution.is_solved());
            assert!(rules::find_conflicts(&puzzle.solution).is_empty());
        }
    }

    #[test]
    fn test_six_by_six_generation_across_many_seeds() {
        // Structural validity must hold for every random seed, not just a
        // lucky one.
        let generator = PuzzleGenerator::new(GridShape::SIX);
        for _ in 0..100 {
            let puzzle = generator.generate(16);
            assert!(puzzle.solution.is_solved());
            assert!(puzzle.removed <= 16);
        }
    }

    #[test]
    fn test_carved_puzzle_remains_solvable() {
        let generator = PuzzleGenerator::new(GridShape::CLASSIC);
        let puzzle = generator.generate(46);

        let mut working = puzzle.problem.clone();
        let solved = Solver::new().solve(&mut working, &mut rand::rng()).unwrap();
        assert!(solved);
        assert!(working.is_solved());
    }

    #[test]
    fn test_fixed_flags_match_problem() {
        let generator = PuzzleGenerator::new(GridShape::SIX);
        let puzzle = generator.generate(16);
        for (index, pos) in GridShape::SIX.positions().enumerate() {
            assert_eq!(puzzle.fixed[index], puzzle.problem[pos].is_some());
            assert_eq!(puzzle.is_fixed(pos), puzzle.problem[pos].is_some());
        }
        assert_eq!(puzzle.problem.empty_count(), puzzle.removed);
    }

    #[test]
    fn test_zero_removal_target_is_identity() {
        let generator = PuzzleGenerator::new(GridShape::SIX);
        let puzzle = generator.generate(0);
        assert_eq!(puzzle.problem, puzzle.solution);
        assert_eq!(puzzle.removed, 0);
        assert!(puzzle.fixed.iter().all(|&fixed| fixed));
    }

    #[test]
    fn test_oversized_target_is_best_effort() {
        // Asking for more removals than any solvable puzzle allows just
        // exhausts the candidate positions.
        let generator = PuzzleGenerator::new(GridShape::SIX);
        let puzzle = generator.generate(36);
        assert!(puzzle.removed <= 36);
        assert_eq!(puzzle.problem.empty_count(), puzzle.removed);

        let mut working = puzzle.problem.clone();
        assert!(Solver::new().solve(&mut working, &mut rand::rng()).unwrap());
    }

    #[test]
    fn test_same_seed_reproduces_puzzle() {
        let generator = PuzzleGenerator::new(GridShape::CLASSIC);
        let seed = PuzzleSeed::from_phrase("reproducible");
        let first = generator.generate_with_seed(seed, 46);
        let second = generator.generate_with_seed(seed, 46);
        assert_eq!(first, second);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        /// Carving never breaks solvability and never over-removes,
        /// whatever the target.
        #[test]
        fn prop_carve_respects_target(target in 0usize..=36) {
            let generator = PuzzleGenerator::new(GridShape::SIX);
            let puzzle = generator.generate(target);
            prop_assert!(puzzle.removed <= target);
            prop_assert_eq!(puzzle.problem.empty_count(), puzzle.removed);

            let mut working = puzzle.problem.clone();
            prop_assert!(Solver::new().solve(&mut working, &mut rand::rng()).unwrap());
        }
    }
}
