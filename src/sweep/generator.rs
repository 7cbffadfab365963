//! Candidate generator for sweeping

use super::Alphabet;
use crate::error::{Result, SweepError};

/// A handle paired with its ordinal index in the enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub index: u64,
    pub name: String,
}

/// Generator for every handle of a fixed length, in product order
///
/// The rightmost position varies fastest and symbols follow the alphabet's
/// declared order, so index `n` is `n` written in base `k` with the
/// alphabet as digits.
#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    alphabet: Alphabet,
    length: usize,
    current_index: u64,
    total: u64,
}

impl CandidateGenerator {
    /// Create a new generator for handles of the given length
    pub fn new(alphabet: Alphabet, length: usize) -> Result<Self> {
        if length == 0 {
            return Err(SweepError::config("length must be at least 1"));
        }
        let total = alphabet.total_combinations(length).ok_or_else(|| {
            SweepError::config(format!(
                "{} symbols at length {} is too many combinations to index",
                alphabet.len(),
                length
            ))
        })?;

        Ok(Self {
            alphabet,
            length,
            current_index: 0,
            total,
        })
    }

    /// Get total number of combinations
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Set current index (for resume), clamped to the end
    pub fn set_index(&mut self, index: u64) {
        self.current_index = index.min(self.total);
    }

    /// Handle at a specific index
    pub fn candidate_at(&self, index: u64) -> Option<String> {
        if index >= self.total {
            return None;
        }

        let chars = self.alphabet.chars();
        let base = chars.len() as u64;
        let mut result = vec![chars[0]; self.length];
        let mut n = index;

        for slot in result.iter_mut().rev() {
            *slot = chars[(n % base) as usize];
            n /= base;
        }

        Some(result.into_iter().collect())
    }

    /// Check if generator is exhausted
    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.total
    }

    /// Remaining count
    pub fn remaining(&self) -> u64 {
        self.total.saturating_sub(self.current_index)
    }
}

impl Iterator for CandidateGenerator {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.candidate_at(self.current_index)?;
        let index = self.current_index;
        self.current_index += 1;
        Some(Candidate { index, name })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
