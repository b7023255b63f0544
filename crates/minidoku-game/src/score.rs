//! Scoring and leaderboard bookkeeping.

use crate::Difficulty;
use serde::{Deserialize, Serialize};

/// Computes the score for a finished game.
///
/// The score decays with elapsed time (halving every minute) and with the
/// number of mistakes, but never drops below 10.
///
/// # Examples
///
/// ```
/// use minidoku_game::{Difficulty, compute_score};
///
/// assert_eq!(compute_score(Difficulty::Easy, 0, 0), 1000);
/// assert_eq!(compute_score(Difficulty::Medium, 60, 0), 1125);
/// assert_eq!(compute_score(Difficulty::Easy, 3600, 5), 10);
/// ```
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    reason = "scores are small positive values"
)]
pub fn compute_score(difficulty: Difficulty, elapsed_secs: u64, mistakes: u32) -> u32 {
    let base = f64::from(difficulty.score_base()) * difficulty.score_multiplier();
    let time_factor = 1.0 / (elapsed_secs as f64 / 60.0 + 1.0);
    let mistake_factor = 1.0 / f64::from(mistakes + 1);
    let score = (base * time_factor * mistake_factor).round() as u32;
    score.max(10)
}

/// Formats a duration in seconds as `MM:SS`.
///
/// # Examples
///
/// ```
/// use minidoku_game::format_time;
///
/// assert_eq!(format_time(0), "00:00");
/// assert_eq!(format_time(83), "01:23");
/// ```
#[must_use]
pub fn format_time(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// A single finished game, as stored on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Level the game was played at.
    pub difficulty: Difficulty,
    /// Wall-clock duration of the game in seconds.
    pub elapsed_secs: u64,
    /// Mistakes made before winning.
    pub mistakes: u32,
    /// Final score.
    pub score: u32,
}

impl ScoreRecord {
    /// Builds a record for a won game, computing the score from the other
    /// fields.
    #[must_use]
    pub fn new(difficulty: Difficulty, elapsed_secs: u64, mistakes: u32) -> Self {
        Self {
            difficulty,
            elapsed_secs,
            mistakes,
            score: compute_score(difficulty, elapsed_secs, mistakes),
        }
    }
}

/// A capped list of recent results, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    records: Vec<ScoreRecord>,
}

impl Leaderboard {
    /// Maximum number of records kept.
    pub const CAPACITY: usize = 10;

    /// Creates an empty leaderboard.
    #[must_use]
    pub const fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Inserts a record at the front, dropping the oldest entry if the
    /// board is full.
    pub fn push(&mut self, record: ScoreRecord) {
        self.records.insert(0, record);
        self.records.truncate(Self::CAPACITY);
    }

    /// Returns the stored records, newest first.
    #[must_use]
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no results have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
