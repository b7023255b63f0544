//! Per-cell game state.

use minidoku_core::{Digit, DigitSet};

/// The state of one cell from the player's point of view.
///
/// A cell is either a fixed clue ([`Given`]), a player-entered digit
/// ([`Filled`]), a set of candidate notes ([`Notes`]), or [`Empty`]. Given
/// cells are assigned when the session is created (and by hints) and can
/// never be edited; everything else is player input.
///
/// [`Given`]: CellState::Given
/// [`Filled`]: CellState::Filled
/// [`Notes`]: CellState::Notes
/// [`Empty`]: CellState::Empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// A clue cell; not editable.
    Given(Digit),
    /// A digit entered by the player; may be overwritten or erased.
    Filled(Digit),
    /// Candidate notes; present only on cells without a digit.
    Notes(DigitSet),
    /// No digit and no notes.
    Empty,
}

impl CellState {
    /// Returns the digit shown in the cell, if any.
    #[must_use]
    pub const fn as_digit(&self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(*digit),
            Self::Notes(_) | Self::Empty => None,
        }
    }

    /// Returns whether the cell is a fixed clue.
    #[must_use]
    pub const fn is_given(&self) -> bool {
        matches!(self, Self::Given(_))
    }

    /// Returns whether the cell holds a player-entered digit.
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        matches!(self, Self::Filled(_))
    }

    /// Returns whether the cell is empty (no digit, no notes).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Removes a digit from the cell's notes, if it has any.
    ///
    /// Dropping the last note turns the cell back into [`CellState::Empty`].
    pub fn drop_note(&mut self, digit: Digit) {
        if let Self::Notes(notes) = self {
            notes.remove(digit);
            if notes.is_empty() {
                *self = Self::Empty;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use minidoku_core::GridShape;

    use super::*;

    #[test]
    fn test_as_digit() {
        let shape = GridShape::SIX;
        let digit = shape.digit(3).unwrap();
        assert_eq!(CellState::Given(digit).as_digit(), Some(digit));
        assert_eq!(CellState::Filled(digit).as_digit(), Some(digit));
        assert_eq!(CellState::Empty.as_digit(), None);
        assert_eq!(
            CellState::Notes(DigitSet::from_iter([digit])).as_digit(),
            None
        );
    }

    #[test]
    fn test_drop_note_empties_cell() {
        let shape = GridShape::SIX;
        let three = shape.digit(3).unwrap();
        let five = shape.digit(5).unwrap();

        let mut cell = CellState::Notes(DigitSet::from_iter([three, five]));
        cell.drop_note(three);
        assert_eq!(cell, CellState::Notes(DigitSet::from_iter([five])));
        cell.drop_note(five);
        assert_eq!(cell, CellState::Empty);

        // No-op on digit cells.
        let mut filled = CellState::Filled(three);
        filled.drop_note(three);
        assert_eq!(filled, CellState::Filled(three));
    }
}
