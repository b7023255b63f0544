//! Difficulty policy: removal targets and scoring parameters.

use minidoku_core::GridShape;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named difficulty level.
///
/// The engine treats the removal target as an opaque number; this type is
/// the policy that picks it, together with the base score and multiplier
/// used by [`compute_score`].
///
/// [`compute_score`]: crate::compute_score
///
/// # Examples
///
/// ```
/// use minidoku_core::GridShape;
/// use minidoku_game::Difficulty;
///
/// assert_eq!(Difficulty::Medium.removal_target(GridShape::SIX), 16);
/// assert_eq!(Difficulty::Hard.removal_target(GridShape::CLASSIC), 52);
/// assert_eq!(Difficulty::Easy.to_string(), "easy");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    /// Few removals, high clue density.
    Easy,
    /// The default level.
    #[default]
    Medium,
    /// Sparse clues.
    Hard,
}

impl Difficulty {
    /// All levels, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the number of cells to carve out for this level on the
    /// given board shape.
    ///
    /// The two live shapes use hand-tuned tables; other shapes scale the
    /// 9×9 table by cell count.
    #[must_use]
    pub fn removal_target(self, shape: GridShape) -> usize {
        let table = match (shape.box_width(), shape.box_height()) {
            (3, 2) => [10, 16, 20],
            (3, 3) => [36, 46, 52],
            _ => {
                let scale = |target: usize| target * shape.cell_count() / 81;
                [scale(36), scale(46), scale(52)]
            }
        };
        match self {
            Self::Easy => table[0],
            Self::Medium => table[1],
            Self::Hard => table[2],
        }
    }

    /// Returns the base score for a win at this level.
    #[must_use]
    pub const fn score_base(self) -> u32 {
        match self {
            Self::Easy => 1000,
            Self::Medium => 1500,
            Self::Hard => 2000,
        }
    }

    /// Returns the score multiplier for this level.
    #[must_use]
    pub const fn score_multiplier(self) -> f64 {
        match self {
            Self::Easy => 1.0,
            Self::Medium => 1.5,
            Self::Hard => 2.0,
        }
    }

    /// Returns the lowercase label for this level.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
