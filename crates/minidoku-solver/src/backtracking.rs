//! Randomized exhaustive backtracking search.

use derive_more::{Display, Error};
use minidoku_core::{Digit, Grid};
use rand::{Rng, seq::SliceRandom as _};

use crate::rules;

/// A backtracking solver that completes a partial board in place.
///
/// The search takes the first empty cell in row-major order and tries each
/// digit in uniformly random order (a fresh Fisher–Yates shuffle per cell):
/// a candidate that passes [`rules::can_place`] is written tentatively, the
/// search recurses, and the cell is reverted if the recursion fails. There
/// is no minimum-remaining-values heuristic or constraint propagation;
/// boards of size 6 and 9 are small enough that the plain search finishes
/// comfortably.
///
/// An optional node budget bounds the search for callers targeting larger
/// shapes: once the budget is consumed the search aborts with
/// [`SolverError::Exhausted`], which is distinct from a clean "no solution
/// exists" result.
///
/// # Examples
///
/// ```
/// use minidoku_core::{Grid, GridShape};
/// use minidoku_solver::Solver;
///
/// let mut grid = Grid::new(GridShape::CLASSIC);
/// assert!(Solver::new().solve(&mut grid, &mut rand::rng()).unwrap());
/// assert!(grid.is_solved());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    node_budget: Option<u64>,
}

/// Error returned when the search gives up before reaching an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolverError {
    /// The node budget ran out before the board was proved solvable or
    /// unsolvable.
    #[display("search exhausted its budget of {budget} nodes")]
    Exhausted {
        /// The configured node budget.
        budget: u64,
    },
}

impl Solver {
    /// Creates a solver with no search budget.
    #[must_use]
    pub const fn new() -> Self {
        Self { node_budget: None }
    }

    /// Sets a node budget: the maximum number of tentative placements the
    /// search may make before giving up with [`SolverError::Exhausted`].
    #[must_use]
    pub const fn with_node_budget(mut self, budget: u64) -> Self {
        self.node_budget = Some(budget);
        self
    }

    /// Completes the board in place if a completion is reachable from the
    /// current partial assignment.
    ///
    /// Returns `Ok(true)` and leaves the board completely filled on
    /// success. Returns `Ok(false)` if no completion exists; the board is
    /// then exactly as it was passed in (every tentative placement is
    /// reverted on the way out). Repeated calls on the same solvable board
    /// produce different completions because of the random candidate order.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Exhausted`] if a node budget is configured
    /// and runs out; the board is fully reverted in that case too.
    pub fn solve<R>(&self, grid: &mut Grid, rng: &mut R) -> Result<bool, SolverError>
    where
        R: Rng + ?Sized,
    {
        let mut nodes = 0;
        self.solve_from(grid, rng, &mut nodes)
    }

    fn solve_from<R>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
        nodes: &mut u64,
    ) -> Result<bool, SolverError>
    where
        R: Rng + ?Sized,
    {
        let Some(pos) = grid.first_empty() else {
            return Ok(true);
        };

        let mut candidates: Vec<Digit> = grid.shape().digits().collect();
        candidates.shuffle(rng);

        for digit in candidates {
            if !rules::can_place(grid, pos, digit) {
                continue;
            }
            if let Some(budget) = self.node_budget
                && *nodes >= budget
            {
                return Err(SolverError::Exhausted { budget });
            }
            *nodes += 1;

            grid[pos] = Some(digit);
            match self.solve_from(grid, rng, nodes) {
                Ok(true) => return Ok(true),
                Ok(false) => grid[pos] = None,
                Err(err) => {
                    grid[pos] = None;
                    return Err(err);
                }
            }
        }
        Ok(false)
    }

    /// Returns the configured node budget, if any.
    #[must_use]
    pub const fn node_budget(&self) -> Option<u64> {
        self.node_budget
    }
}
