//! Reproducible puzzle seeds.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed identifying one generated puzzle.
///
/// The seed fully determines the generator's random stream, so the same seed
/// always reproduces the same solution and the same carved puzzle. Seeds
/// display as 64 lowercase hex characters and parse back from the same
/// format, which makes them convenient to log, share, and replay.
///
/// # Examples
///
/// ```
/// use minidoku_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("daily-2024-06-01");
/// let hex = seed.to_string();
/// assert_eq!(hex.len(), 64);
/// assert_eq!(hex.parse::<PuzzleSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

/// Error returned when parsing a seed from hex text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The text was not exactly 64 hex characters.
    #[display("expected 64 hex characters, found {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// The text contained a non-hex character.
    #[display("invalid hex character {_0:?}")]
    InvalidChar(#[error(not(source))] char),
}

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0u8; 32];
        rand::rng().fill(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed deterministically from a phrase (SHA-256).
    ///
    /// Useful for human-memorable or date-based seeds ("daily puzzle").
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Creates the random number generator seeded by this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 64 {
            return Err(ParseSeedError::InvalidLength(s.chars().count()));
        }
        let mut bytes = [0u8; 32];
        let chars: Vec<char> = s.chars().collect();
        for (i, pair) in chars.chunks(2).enumerate() {
            let mut value = 0u8;
            for &ch in pair {
                let digit = ch
                    .to_digit(16)
                    .ok_or(ParseSeedError::InvalidChar(ch))?;
                #[expect(clippy::cast_possible_truncation)]
                {
                    value = value * 16 + digit as u8;
                }
            }
            bytes[i] = value;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let seed = PuzzleSeed::from_bytes([0xab; 32]);
        let hex = seed.to_string();
        assert_eq!(hex, "ab".repeat(32));
        assert_eq!(hex.parse::<PuzzleSeed>().unwrap(), seed);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "abcd".parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidLength(4))
        );
        let text = format!("zz{}", "00".repeat(31));
        assert_eq!(
            text.parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidChar('z'))
        );
    }

    #[test]
    fn test_from_phrase_is_deterministic() {
        let a = PuzzleSeed::from_phrase("daily-1");
        let b = PuzzleSeed::from_phrase("daily-1");
        let c = PuzzleSeed::from_phrase("daily-2");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }
}
