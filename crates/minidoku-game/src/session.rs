//! A single game in progress.

use std::collections::BTreeSet;

use derive_more::{Display, Error};
use log::debug;
use minidoku_core::{Digit, DigitSet, Grid, GridError, GridShape, Position};
use minidoku_generator::GeneratedPuzzle;
use minidoku_solver::rules;
use rand::Rng;
use rand::seq::IndexedRandom as _;

use crate::CellState;

/// Default number of mistakes that loses the game.
pub const DEFAULT_MISTAKE_LIMIT: u32 = 3;

/// Error returned by session input operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The targeted cell is a fixed clue.
    #[display("cell at {pos} is a fixed clue and cannot be edited")]
    CannotModifyGivenCell {
        /// The rejected position.
        pos: Position,
    },
    /// Notes may only be added to cells without a digit.
    #[display("cell at {pos} holds a digit; erase it before taking notes")]
    CannotAddNoteToFilledCell {
        /// The rejected position.
        pos: Position,
    },
    /// The game has already been won or lost.
    #[display("the game is over")]
    GameFinished,
    /// The targeted position is off the board.
    #[display("{_0}")]
    Grid(GridError),
}

impl From<GridError> for GameError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

/// Whether the game can still accept input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// The board is not complete and the mistake limit has not been hit.
    #[default]
    InProgress,
    /// Every cell matches the solution.
    Won,
    /// The mistake limit was reached.
    Lost,
}

impl GameStatus {
    /// Returns whether the session still accepts input.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }
}

/// Outcome of a single digit placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The digit matches the solution and breaks no rule.
    Correct,
    /// The digit conflicts with a peer or differs from the solution.
    Mistake,
}

/// One puzzle being played.
///
/// A session owns the editable board, the solution it was carved from, and
/// the mistake counter. Input operations reject edits to clue cells and
/// stop accepting input once the game is won or lost. Timing and rendering
/// stay with the caller.
///
/// # Examples
///
/// ```
/// use minidoku_core::GridShape;
/// use minidoku_game::{GameSession, GameStatus};
/// use minidoku_generator::PuzzleGenerator;
///
/// let puzzle = PuzzleGenerator::new(GridShape::SIX).generate(16);
/// let session = GameSession::new(puzzle);
/// assert_eq!(session.status(), GameStatus::InProgress);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    shape: GridShape,
    cells: Vec<CellState>,
    solution: Grid,
    mistakes: u32,
    mistake_limit: u32,
    status: GameStatus,
    selected: Option<Position>,
}

impl GameSession {
    /// Starts a session from a generated puzzle.
    ///
    /// Every clue in the problem becomes a [`CellState::Given`]; carved
    /// cells start [`CellState::Empty`].
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        Self::with_mistake_limit(puzzle, DEFAULT_MISTAKE_LIMIT)
    }

    /// Starts a session with a custom mistake limit.
    #[must_use]
    pub fn with_mistake_limit(puzzle: GeneratedPuzzle, mistake_limit: u32) -> Self {
        let shape = puzzle.problem.shape();
        let cells = shape
            .positions()
            .map(|pos| match puzzle.problem[pos] {
                Some(digit) => CellState::Given(digit),
                None => CellState::Empty,
            })
            .collect();
        Self {
            shape,
            cells,
            solution: puzzle.solution,
            mistakes: 0,
            mistake_limit,
            status: GameStatus::InProgress,
            selected: None,
        }
    }

    /// Returns the board shape.
    #[must_use]
    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    /// Returns the solution the puzzle was carved from.
    #[must_use]
    pub const fn solution(&self) -> &Grid {
        &self.solution
    }

    /// Returns the state of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if the position is off the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        assert!(self.shape.contains(pos), "position {pos} off the board");
        self.cells[self.shape.index_of(pos)]
    }

    /// Returns the number of mistakes made so far.
    #[must_use]
    pub const fn mistakes(&self) -> u32 {
        self.mistakes
    }

    /// Returns the mistake limit.
    #[must_use]
    pub const fn mistake_limit(&self) -> u32 {
        self.mistake_limit
    }

    /// Returns the game status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the currently selected cell, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Selects the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is off the board.
    pub fn select(&mut self, pos: Position) -> Result<(), GameError> {
        if !self.shape.contains(pos) {
            return Err(GridError::OutOfRange {
                pos,
                size: self.shape.size(),
            }
            .into());
        }
        self.selected = Some(pos);
        Ok(())
    }

    /// Moves the selection by `(dx, dy)`, clamping to the board edges.
    ///
    /// With no prior selection the move just selects the top-left cell;
    /// the delta applies from the next move on.
    pub fn move_selection(&mut self, dx: i8, dy: i8) {
        let Some(Position { x, y }) = self.selected else {
            self.selected = Some(Position::new(0, 0));
            return;
        };
        let max = i16::from(self.shape.size()) - 1;
        let clamp = |base: u8, delta: i8| {
            u8::try_from((i16::from(base) + i16::from(delta)).clamp(0, max)).unwrap_or_default()
        };
        self.selected = Some(Position::new(clamp(x, dx), clamp(y, dy)));
    }

    /// Places a digit in the cell at `pos`.
    ///
    /// A placement is a [`Placement::Mistake`] when it conflicts with a
    /// visible peer or differs from the solution; each mistake counts
    /// toward the limit, and reaching the limit loses the game. The digit
    /// stays on the board either way. A correct placement also drops the
    /// digit from the notes of peer cells, and wins the game when it
    /// completes the board.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is a fixed clue, the position is off
    /// the board, or the game is already over.
    pub fn place(&mut self, pos: Position, digit: Digit) -> Result<Placement, GameError> {
        self.check_editable(pos)?;
        let index = self.shape.index_of(pos);
        self.cells[index] = CellState::Filled(digit);

        let wrong = self.conflicts().contains(&pos) || self.solution[pos] != Some(digit);
        if wrong {
            self.mistakes += 1;
            debug!(
                "mistake at {pos}: placed {digit}, {} of {} used",
                self.mistakes, self.mistake_limit
            );
            if self.mistakes >= self.mistake_limit {
                self.status = GameStatus::Lost;
            }
            return Ok(Placement::Mistake);
        }

        self.drop_peer_notes(pos, digit);
        if self.is_solved() {
            self.status = GameStatus::Won;
        }
        Ok(Placement::Correct)
    }

    /// Erases the digit or notes in the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is a fixed clue, the position is off
    /// the board, or the game is already over.
    pub fn erase(&mut self, pos: Position) -> Result<(), GameError> {
        self.check_editable(pos)?;
        let index = self.shape.index_of(pos);
        self.cells[index] = CellState::Empty;
        Ok(())
    }

    /// Toggles a candidate note in the cell at `pos`.
    ///
    /// Toggling the last note off returns the cell to empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is a fixed clue or holds a
    /// player-entered digit, the position is off the board, or the game is
    /// already over.
    pub fn toggle_note(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        self.check_editable(pos)?;
        let index = self.shape.index_of(pos);
        match &mut self.cells[index] {
            CellState::Filled(_) => return Err(GameError::CannotAddNoteToFilledCell { pos }),
            CellState::Empty => {
                self.cells[index] = CellState::Notes(DigitSet::from_iter([digit]));
            }
            CellState::Notes(notes) => {
                if notes.contains(digit) {
                    notes.remove(digit);
                    if notes.is_empty() {
                        self.cells[index] = CellState::Empty;
                    }
                } else {
                    notes.insert(digit);
                }
            }
            CellState::Given(_) => unreachable!("rejected by check_editable"),
        }
        Ok(())
    }

    /// Clears all notes in the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is a fixed clue, the position is off
    /// the board, or the game is already over.
    pub fn clear_notes(&mut self, pos: Position) -> Result<(), GameError> {
        self.check_editable(pos)?;
        let index = self.shape.index_of(pos);
        if matches!(self.cells[index], CellState::Notes(_)) {
            self.cells[index] = CellState::Empty;
        }
        Ok(())
    }

    /// Reveals the solution digit of a random digitless cell.
    ///
    /// The revealed cell becomes a fixed clue; its digit is also dropped
    /// from peer notes, and the game is won if the board is now complete.
    /// Returns `None` when every cell already holds a digit or the game is
    /// over.
    pub fn hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        if !self.status.is_in_progress() {
            return None;
        }
        let candidates: Vec<Position> = self
            .shape
            .positions()
            .filter(|&pos| self.cell(pos).as_digit().is_none())
            .collect();
        let pos = *candidates.choose(rng)?;
        let Some(digit) = self.solution[pos] else {
            unreachable!("solution grids are complete");
        };
        let index = self.shape.index_of(pos);
        self.cells[index] = CellState::Given(digit);
        self.drop_peer_notes(pos, digit);
        if self.is_solved() {
            self.status = GameStatus::Won;
        }
        Some(pos)
    }

    /// Fills every non-clue cell with its solution digit.
    ///
    /// The status and mistake counter are left as they are; this is for
    /// showing the answer after a loss.
    pub fn reveal_solution(&mut self) {
        for pos in self.shape.positions() {
            let index = self.shape.index_of(pos);
            if !self.cells[index].is_given()
                && let Some(digit) = self.solution[pos]
            {
                self.cells[index] = CellState::Filled(digit);
            }
        }
    }

    /// Returns the positions of all digits that break a row, column, or
    /// box rule, over clue and player digits alike.
    #[must_use]
    pub fn conflicts(&self) -> BTreeSet<Position> {
        let mut grid = Grid::new(self.shape);
        for pos in self.shape.positions() {
            grid[pos] = self.cell(pos).as_digit();
        }
        rules::find_conflicts(&grid)
    }

    /// Returns whether every cell matches the solution.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.shape
            .positions()
            .all(|pos| self.cell(pos).as_digit() == self.solution[pos])
    }

    fn check_editable(&self, pos: Position) -> Result<(), GameError> {
        if !self.status.is_in_progress() {
            return Err(GameError::GameFinished);
        }
        if !self.shape.contains(pos) {
            return Err(GridError::OutOfRange {
                pos,
                size: self.shape.size(),
            }
            .into());
        }
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell { pos });
        }
        Ok(())
    }

    fn drop_peer_notes(&mut self, pos: Position, digit: Digit) {
        for peer in self.shape.peers(pos) {
            let index = self.shape.index_of(peer);
            self.cells[index].drop_note(digit);
        }
    }
}

#[cfg(test)]
mod tests {
    use minidoku_generator::PuzzleSeed;

    use super::*;

    const SOLVED_SIX: &str = "123456 456123 231564 564231 312645 645312";

    fn pos(x: u8, y: u8) -> Position {
        Position::new(x, y)
    }

    fn digit(value: u8) -> Digit {
        GridShape::SIX.digit(value).unwrap()
    }

    /// Builds a 6×6 puzzle by carving the given cells out of a known
    /// solution.
    fn puzzle_with_holes(holes: &[Position]) -> GeneratedPuzzle {
        let shape = GridShape::SIX;
        let solution = Grid::parse(shape, SOLVED_SIX).unwrap();
        let mut problem = solution.clone();
        for &hole in holes {
            problem[hole] = None;
        }
        let fixed = shape.positions().map(|p| problem[p].is_some()).collect();
        GeneratedPuzzle {
            problem,
            solution,
            fixed,
            removed: holes.len(),
            seed: PuzzleSeed::from_bytes([0; 32]),
        }
    }

    #[test]
    fn test_new_session_marks_givens() {
        let session = GameSession::new(puzzle_with_holes(&[pos(0, 0), pos(3, 2)]));
        assert_eq!(session.cell(pos(0, 0)), CellState::Empty);
        assert_eq!(session.cell(pos(3, 2)), CellState::Empty);
        assert_eq!(session.cell(pos(1, 0)), CellState::Given(digit(2)));
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.mistakes(), 0);
        assert!(!session.is_solved());
    }

    #[test]
    fn test_correct_placement() {
        let mut session = GameSession::new(puzzle_with_holes(&[pos(0, 0), pos(3, 2)]));
        assert_eq!(session.place(pos(0, 0), digit(1)), Ok(Placement::Correct));
        assert_eq!(session.cell(pos(0, 0)), CellState::Filled(digit(1)));
        assert_eq!(session.mistakes(), 0);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_completing_the_board_wins() {
        let mut session = GameSession::new(puzzle_with_holes(&[pos(0, 0)]));
        assert_eq!(session.place(pos(0, 0), digit(1)), Ok(Placement::Correct));
        assert_eq!(session.status(), GameStatus::Won);
        assert!(session.is_solved());
        // No further input after the win.
        assert_eq!(session.erase(pos(0, 0)), Err(GameError::GameFinished));
    }

    #[test]
    fn test_wrong_digit_counts_a_mistake() {
        let mut session = GameSession::new(puzzle_with_holes(&[pos(0, 0), pos(3, 2)]));
        // 6 duplicates the given at (5, 0) and differs from the solution.
        assert_eq!(session.place(pos(0, 0), digit(6)), Ok(Placement::Mistake));
        assert_eq!(session.mistakes(), 1);
        // The wrong digit stays on the board.
        assert_eq!(session.cell(pos(0, 0)), CellState::Filled(digit(6)));
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_mistake_limit_loses() {
        let puzzle = puzzle_with_holes(&[pos(0, 0), pos(3, 2)]);
        let mut session = GameSession::with_mistake_limit(puzzle, 2);
        assert_eq!(session.place(pos(0, 0), digit(6)), Ok(Placement::Mistake));
        assert_eq!(session.place(pos(3, 2), digit(2)), Ok(Placement::Mistake));
        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(
            session.place(pos(0, 0), digit(1)),
            Err(GameError::GameFinished)
        );
    }

    #[test]
    fn test_given_cells_are_locked() {
        let mut session = GameSession::new(puzzle_with_holes(&[pos(0, 0)]));
        let err = GameError::CannotModifyGivenCell { pos: pos(1, 0) };
        assert_eq!(session.place(pos(1, 0), digit(5)), Err(err));
        assert_eq!(session.erase(pos(1, 0)), Err(err));
        assert_eq!(session.toggle_note(pos(1, 0), digit(5)), Err(err));
    }

    #[test]
    fn test_off_board_positions_are_rejected() {
        let mut session = GameSession::new(puzzle_with_holes(&[pos(0, 0)]));
        assert!(matches!(
            session.place(pos(6, 0), digit(1)),
            Err(GameError::Grid(GridError::OutOfRange { .. }))
        ));
        assert!(matches!(
            session.select(pos(0, 9)),
            Err(GameError::Grid(GridError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_erase_clears_player_input() {
        let mut session = GameSession::new(puzzle_with_holes(&[pos(0, 0), pos(3, 2)]));
        session.place(pos(0, 0), digit(6)).unwrap();
        session.erase(pos(0, 0)).unwrap();
        assert_eq!(session.cell(pos(0, 0)), CellState::Empty);
        // The mistake is not refunded.
        assert_eq!(session.mistakes(), 1);
    }

    #[test]
    fn test_note_lifecycle() {
        let mut session = GameSession::new(puzzle_with_holes(&[pos(0, 0), pos(3, 2)]));
        session.toggle_note(pos(0, 0), digit(1)).unwrap();
        session.toggle_note(pos(0, 0), digit(2)).unwrap();
        assert_eq!(
            session.cell(pos(0, 0)),
            CellState::Notes(DigitSet::from_iter([digit(1), digit(2)]))
        );
        // Toggling off, note by note, back to empty.
        session.toggle_note(pos(0, 0), digit(1)).unwrap();
        session.toggle_note(pos(0, 0), digit(2)).unwrap();
        assert_eq!(session.cell(pos(0, 0)), CellState::Empty);

        session.place(pos(0, 0), digit(1)).unwrap();
        assert_eq!(
            session.toggle_note(pos(0, 0), digit(2)),
            Err(GameError::CannotAddNoteToFilledCell { pos: pos(0, 0) })
        );
    }

    #[test]
    fn test_clear_notes() {
        let mut session = GameSession::new(puzzle_with_holes(&[pos(0, 0), pos(3, 2)]));
        session.toggle_note(pos(0, 0), digit(1)).unwrap();
        session.toggle_note(pos(0, 0), digit(4)).unwrap();
        session.clear_notes(pos(0, 0)).unwrap();
        assert_eq!(session.cell(pos(0, 0)), CellState::Empty);
    }

    #[test]
    fn test_correct_placement_drops_peer_notes() {
        // (0, 0) and (3, 0) share a row; (0, 2) shares a column with (0, 0).
        let mut session =
            GameSession::new(puzzle_with_holes(&[pos(0, 0), pos(3, 0), pos(0, 2)]));
        session.toggle_note(pos(3, 0), digit(1)).unwrap();
        session.toggle_note(pos(3, 0), digit(4)).unwrap();
        session.toggle_note(pos(0, 2), digit(1)).unwrap();
        session.place(pos(0, 0), digit(1)).unwrap();
        // 1 is gone from both peers; the unrelated note survives.
        assert_eq!(
            session.cell(pos(3, 0)),
            CellState::Notes(DigitSet::from_iter([digit(4)]))
        );
        assert_eq!(session.cell(pos(0, 2)), CellState::Empty);
    }

    #[test]
    fn test_conflicts_cover_player_digits() {
        let mut session = GameSession::new(puzzle_with_holes(&[pos(0, 0), pos(3, 2)]));
        assert!(session.conflicts().is_empty());
        // 2 at (0, 0) duplicates the given 2 at (1, 0).
        session.place(pos(0, 0), digit(2)).unwrap();
        let conflicts = session.conflicts();
        assert!(conflicts.contains(&pos(0, 0)));
        assert!(conflicts.contains(&pos(1, 0)));
    }

    #[test]
    fn test_hint_reveals_a_fixed_clue() {
        use rand::SeedableRng as _;
        let mut rng = rand_pcg::Pcg64::seed_from_u64(7);
        let holes = [pos(0, 0), pos(3, 2)];
        let mut session = GameSession::new(puzzle_with_holes(&holes));
        let revealed = session.hint(&mut rng).unwrap();
        assert!(holes.contains(&revealed));
        let expected = session.solution()[revealed].unwrap();
        assert_eq!(session.cell(revealed), CellState::Given(expected));
        // Hints on a full board do nothing.
        session.hint(&mut rng).unwrap();
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.hint(&mut rng), None);
    }

    #[test]
    fn test_reveal_solution_fills_the_board() {
        let puzzle = puzzle_with_holes(&[pos(0, 0), pos(3, 2)]);
        let mut session = GameSession::with_mistake_limit(puzzle, 1);
        session.place(pos(0, 0), digit(6)).unwrap();
        assert_eq!(session.status(), GameStatus::Lost);
        session.reveal_solution();
        assert!(session.is_solved());
        // Losing status is preserved.
        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.mistakes(), 1);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut session = GameSession::new(puzzle_with_holes(&[pos(0, 0)]));
        assert_eq!(session.selected(), None);
        // The first move selects the top-left cell without applying the
        // delta.
        session.move_selection(2, 3);
        assert_eq!(session.selected(), Some(pos(0, 0)));
        session.move_selection(-1, -1);
        assert_eq!(session.selected(), Some(pos(0, 0)));
        session.select(pos(4, 5)).unwrap();
        session.move_selection(3, 1);
        assert_eq!(session.selected(), Some(pos(5, 5)));
        session.move_selection(-2, 0);
        assert_eq!(session.selected(), Some(pos(3, 5)));
    }
}
