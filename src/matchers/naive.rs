// Copyright (c) 2025 Matchbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Brute-force reference matcher.
//!
//! Checks every alignment of the pattern against the text, left to right,
//! stopping at the first mismatching byte. O(n·m) in the worst case. It is
//! the oracle the property tests compare every other matcher against, and a
//! floor for the benchmarks.

use super::{Algorithm, InvalidPattern, SearchOutcome, SearchResult, SinglePatternMatcher};

/// Reference O(n·m) matcher reporting every overlapping occurrence.
#[derive(Debug, Clone)]
pub struct NaiveMatcher {
    pattern: Vec<u8>,
}

impl NaiveMatcher {
    /// Creates a matcher for `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPattern::Empty`] if the pattern is empty.
    pub fn new(pattern: &[u8]) -> SearchResult<Self> {
        if pattern.is_empty() {
            return Err(InvalidPattern::Empty.into());
        }
        Ok(Self {
            pattern: pattern.to_vec(),
        })
    }
}

impl SinglePatternMatcher for NaiveMatcher {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Naive
    }

    fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    fn scan(&self, text: &[u8]) -> SearchResult<SearchOutcome> {
        let m = self.pattern.len();
        let mut outcome = SearchOutcome::default();
        if m > text.len() {
            return Ok(outcome);
        }

        for start in 0..=text.len() - m {
            let mut matched = true;
            for (t, p) in text[start..start + m].iter().zip(&self.pattern) {
                outcome.comparisons += 1;
                if t != p {
                    matched = false;
                    break;
                }
            }
            if matched {
                outcome.positions.push(start);
            }
        }

        Ok(outcome)
    }
}

/// Every overlapping occurrence of `pattern` in `text`, without counters.
///
/// An empty pattern matches nowhere.
pub fn find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(start, _)| start)
        .collect()
}
