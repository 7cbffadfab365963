//! Handle sweeping - enumerate every handle of a given length and probe it
//!
//! The sweep is resumable: progress is a single ordinal index persisted
//! to a checkpoint file keyed by the handle length.

mod checkpoint;
mod generator;
mod governor;
mod scanner;

pub use checkpoint::CheckpointStore;
pub use generator::{Candidate, CandidateGenerator};
pub use governor::{Cadence, RateGovernor};
pub use scanner::{SweepConfig, Sweeper};

use crate::error::{Result, SweepError};

/// Symbols allowed in a handle, digits first as the service sorts them
pub const DEFAULT_ALPHABET: &str = "1234567890ABCDEFGHIJKLMNOPQRSTUVWXYZ_";

/// Ordered set of unique symbols candidates are built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}

impl Alphabet {
    /// Build an alphabet, keeping the declared symbol order
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(SweepError::config("alphabet must not be empty"));
        }
        for (i, c) in symbols.iter().enumerate() {
            if !is_path_safe(*c) {
                return Err(SweepError::config(format!(
                    "alphabet symbol '{}' is not allowed in a URL path; use ASCII letters, digits, '-', '_' or '~'",
                    c
                )));
            }
            if symbols[..i].contains(c) {
                return Err(SweepError::config(format!(
                    "alphabet repeats the symbol '{}'",
                    c
                )));
            }
        }
        Ok(Self { symbols })
    }

    pub fn chars(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of strings of `length` symbols, `None` on u64 overflow
    pub fn total_combinations(&self, length: usize) -> Option<u64> {
        let exp = u32::try_from(length).ok()?;
        (self.symbols.len() as u64).checked_pow(exp)
    }
}

/// Symbols that render verbatim in a URL path segment
///
/// `.` is unreserved too, but `.` and `..` segments get normalised away.
fn is_path_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '~')
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alphabet() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 37);
        assert_eq!(alphabet.chars()[0], '1');
        assert_eq!(alphabet.chars()[36], '_');
        assert_eq!(alphabet.to_string(), DEFAULT_ALPHABET);
    }

    #[test]
    fn test_rejects_bad_alphabets() {
        assert!(Alphabet::new("").unwrap_err().is_config());
        assert!(Alphabet::new("ABA").unwrap_err().is_config());
    }

    #[test]
    fn test_rejects_symbols_that_change_the_url() {
        for symbols in ["A#", "A?", "A/", "A.", "A%", "A ", "Aé"] {
            assert!(Alphabet::new(symbols).unwrap_err().is_config(), "{}", symbols);
        }
        assert!(Alphabet::new("az09-_~").is_ok());
    }

    #[test]
    fn test_total_combinations() {
        let alphabet = Alphabet::new("AB").unwrap();
        assert_eq!(alphabet.total_combinations(2), Some(4));
        assert_eq!(Alphabet::default().total_combinations(3), Some(37 * 37 * 37));
        assert_eq!(Alphabet::default().total_combinations(64), None);
    }
}
