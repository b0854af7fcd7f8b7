// Copyright (c) 2025 Matchbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Knuth-Morris-Pratt matcher.
//!
//! The pattern is preprocessed into an [`LpsTable`]. The scan keeps a text
//! index `i` and a pattern index `j`; on a mismatch it falls back through the
//! table instead of moving `i` backwards, so no text byte is read again after
//! the scan has moved past it.
//!
//! # Performance Characteristics
//!
//! - Preprocessing: O(m) time and space
//! - Scan: O(n + m) comparisons, independent of the alphabet
//!
//! Overlapping occurrences are reported: after a full match the pattern index
//! falls back to `lps[m - 1]` and the scan continues immediately.

mod table;

use tracing::debug;

pub use table::LpsTable;

use super::{Algorithm, InvalidPattern, SearchOutcome, SearchResult, SinglePatternMatcher};

/// Knuth-Morris-Pratt matcher over a preprocessed pattern.
#[derive(Debug, Clone)]
pub struct KmpMatcher {
    pattern: Vec<u8>,
    lps: LpsTable,
}

impl KmpMatcher {
    /// Preprocesses `pattern` into its failure table.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPattern::Empty`] if the pattern is empty.
    pub fn new(pattern: &[u8]) -> SearchResult<Self> {
        if pattern.is_empty() {
            return Err(InvalidPattern::Empty.into());
        }

        let lps = LpsTable::new(pattern);
        debug!(pattern_len = pattern.len(), "built KMP failure table");

        Ok(Self {
            pattern: pattern.to_vec(),
            lps,
        })
    }

    /// The failure table built for the pattern.
    pub fn table(&self) -> &LpsTable {
        &self.lps
    }
}

impl SinglePatternMatcher for KmpMatcher {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Kmp
    }

    fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    fn scan(&self, text: &[u8]) -> SearchResult<SearchOutcome> {
        let n = text.len();
        let m = self.pattern.len();
        let mut outcome = SearchOutcome::default();

        let mut i = 0;
        let mut j = 0;
        while i < n {
            outcome.comparisons += 1;
            if text[i] == self.pattern[j] {
                i += 1;
                j += 1;
                if j == m {
                    // Match ends at i - 1
                    outcome.positions.push(i - m);
                    j = self.lps[j - 1];
                }
            } else if j > 0 {
                j = self.lps[j - 1];
            } else {
                i += 1;
            }
        }

        debug!(
            matches = outcome.positions.len(),
            comparisons = outcome.comparisons,
            "KMP scan finished"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::SearchError;

    #[test]
    fn test_basic_matching() {
        let matcher = KmpMatcher::new(b"abra").unwrap();
        let outcome = matcher.scan(b"abracadabra").unwrap();
        assert_eq!(outcome.positions, vec![0, 7]);
        assert_eq!(outcome.match_count(), 2);
    }

    #[test]
    fn test_overlapping_matches() {
        let matcher = KmpMatcher::new(b"aa").unwrap();
        assert_eq!(matcher.scan(b"aaaa").unwrap().positions, vec![0, 1, 2]);

        let matcher = KmpMatcher::new(b"aba").unwrap();
        assert_eq!(matcher.scan(b"ababababa").unwrap().positions, vec![0, 2, 4, 6]);
    }

    #[test]
    fn test_comparisons_are_linear() {
        let text = vec![b'a'; 1000];
        let mut pattern = vec![b'a'; 9];
        pattern.push(b'b');
        let matcher = KmpMatcher::new(&pattern).unwrap();
        let outcome = matcher.scan(&text).unwrap();

        assert!(outcome.positions.is_empty());
        assert!(outcome.comparisons <= 2 * (text.len() + pattern.len()) as u64);
    }

    #[test]
    fn test_edge_cases() {
        let matcher = KmpMatcher::new(b"needle").unwrap();
        assert!(matcher.scan(b"").unwrap().positions.is_empty());
        assert!(matcher.scan(b"need").unwrap().positions.is_empty());
        assert_eq!(matcher.scan(b"needle").unwrap().positions, vec![0]);
        assert_eq!(matcher.scan(b"a needle").unwrap().positions, vec![2]);
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(
            KmpMatcher::new(b"").unwrap_err(),
            SearchError::from(InvalidPattern::Empty)
        );
    }
}
