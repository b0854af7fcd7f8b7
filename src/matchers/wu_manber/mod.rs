// Copyright (c) 2025 Matchbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Multi-pattern matcher in the style of Wu-Manber.
//!
//! The block length is the length of the shortest pattern. Preprocessing
//! registers every pattern under each of its block-length substrings in a
//! [`ShiftTable`]. The scan slides a block-length window one byte at a time;
//! every candidate registered under the current block is compared against
//! the text starting at the window, and only exact matches are reported.
//!
//! This is the simplified block-hash variant: it verifies candidates at every
//! window instead of skipping ahead with computed shift distances. Windows
//! cost O(1) to look up plus O(candidates) to verify.
//!
//! ```
//! use matchbench_lib::matchers::{PatternId, PatternMatch, WuManberMatcher};
//!
//! let matcher = WuManberMatcher::new(&["abra", "cad"]).unwrap();
//! let outcome = matcher.scan(b"abracadabra").unwrap();
//! let found: Vec<_> = outcome.matches.iter().map(|m| (m.position, m.pattern.0)).collect();
//! assert_eq!(found, vec![(0, 0), (4, 1), (7, 0)]);
//! ```

mod table;

use tracing::debug;

pub use table::ShiftTable;

use super::{InvalidPatternSet, MultiSearchOutcome, PatternId, PatternMatch, SearchResult};

/// Multi-pattern matcher reporting every occurrence of every pattern.
#[derive(Debug, Clone)]
pub struct WuManberMatcher {
    patterns: Vec<Vec<u8>>,
    table: ShiftTable,
}

impl WuManberMatcher {
    /// Preprocesses `patterns` into a block table.
    ///
    /// Pattern ids in the results are indices into `patterns`. Duplicate
    /// patterns are kept and each one is reported.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPatternSet::Empty`] for an empty list and
    /// [`InvalidPatternSet::EmptyEntry`] when any pattern is empty.
    pub fn new<P: AsRef<[u8]>>(patterns: &[P]) -> SearchResult<Self> {
        if patterns.is_empty() {
            return Err(InvalidPatternSet::Empty.into());
        }
        if let Some(index) = patterns.iter().position(|p| p.as_ref().is_empty()) {
            return Err(InvalidPatternSet::EmptyEntry { index }.into());
        }

        let block_len = patterns
            .iter()
            .map(|p| p.as_ref().len())
            .min()
            .unwrap_or(1);
        let table = ShiftTable::new(patterns, block_len);
        debug!(
            patterns = patterns.len(),
            block_len,
            blocks = table.len(),
            "built Wu-Manber block table"
        );

        Ok(Self {
            patterns: patterns.iter().map(|p| p.as_ref().to_vec()).collect(),
            table,
        })
    }

    /// Length of the scan window (the shortest pattern's length).
    pub fn block_len(&self) -> usize {
        self.table.block_len()
    }

    /// The block table.
    pub fn table(&self) -> &ShiftTable {
        &self.table
    }

    /// The patterns, indexed by [`PatternId`].
    pub fn patterns(&self) -> &[Vec<u8>] {
        &self.patterns
    }

    /// The pattern behind `id`, if it belongs to this matcher.
    pub fn pattern(&self, id: PatternId) -> Option<&[u8]> {
        self.patterns.get(id.0).map(Vec::as_slice)
    }

    /// Scans `text` for every pattern.
    ///
    /// Matches are ordered by position, then by pattern id. Overlapping
    /// occurrences, of one pattern or of different ones, are all reported.
    pub fn scan(&self, text: &[u8]) -> SearchResult<MultiSearchOutcome> {
        let block_len = self.block_len();
        let mut outcome = MultiSearchOutcome::default();
        if text.len() < block_len {
            return Ok(outcome);
        }

        for (i, block) in text.windows(block_len).enumerate() {
            for &id in self.table.candidates(block) {
                let candidate = &self.patterns[id.0];
                let Some(window) = text.get(i..i + candidate.len()) else {
                    outcome.spurious_hits += 1;
                    continue;
                };

                let mut verified = true;
                for (t, p) in window.iter().zip(candidate) {
                    outcome.comparisons += 1;
                    if t != p {
                        verified = false;
                        break;
                    }
                }
                if verified {
                    outcome.matches.push(PatternMatch {
                        position: i,
                        pattern: id,
                    });
                } else {
                    outcome.spurious_hits += 1;
                }
            }
        }

        debug!(
            matches = outcome.matches.len(),
            spurious_hits = outcome.spurious_hits,
            comparisons = outcome.comparisons,
            "Wu-Manber scan finished"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::SearchError;

    fn pairs(matcher: &WuManberMatcher, text: &[u8]) -> Vec<(usize, String)> {
        matcher
            .scan(text)
            .unwrap()
            .matches
            .iter()
            .map(|m| {
                let pattern = matcher.pattern(m.pattern).unwrap();
                (m.position, String::from_utf8_lossy(pattern).into_owned())
            })
            .collect()
    }

    #[test]
    fn test_abracadabra() {
        let matcher = WuManberMatcher::new(&["abra", "cad"]).unwrap();
        assert_eq!(matcher.block_len(), 3);
        assert_eq!(
            pairs(&matcher, b"abracadabra"),
            vec![
                (0, "abra".to_string()),
                (4, "cad".to_string()),
                (7, "abra".to_string()),
            ]
        );
    }

    #[test]
    fn test_overlaps_between_patterns() {
        let matcher = WuManberMatcher::new(&["he", "she", "hers"]).unwrap();
        assert_eq!(
            pairs(&matcher, b"ushers"),
            vec![
                (1, "she".to_string()),
                (2, "he".to_string()),
                (2, "hers".to_string()),
            ]
        );
    }

    #[test]
    fn test_self_overlaps() {
        let matcher = WuManberMatcher::new(&["aa"]).unwrap();
        let outcome = matcher.scan(b"aaaa").unwrap();
        let positions: Vec<usize> = outcome.matches.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_candidate_past_end_of_text() {
        let matcher = WuManberMatcher::new(&["ab", "abcdef"]).unwrap();
        let outcome = matcher.scan(b"xxab").unwrap();
        assert_eq!(
            outcome.matches,
            vec![PatternMatch {
                position: 2,
                pattern: PatternId(0)
            }]
        );
        assert_eq!(outcome.spurious_hits, 1);
    }

    #[test]
    fn test_block_collisions_not_reported() {
        // "bra" is a block of "abra" but "bra" alone is not an occurrence
        let matcher = WuManberMatcher::new(&["abra", "cad"]).unwrap();
        let outcome = matcher.scan(b"xbrax").unwrap();
        assert!(outcome.matches.is_empty());
        assert_eq!(outcome.spurious_hits, 1);
    }

    #[test]
    fn test_duplicate_patterns() {
        let matcher = WuManberMatcher::new(&["ab", "ab"]).unwrap();
        let outcome = matcher.scan(b"ab").unwrap();
        assert_eq!(outcome.matches.len(), 2);
    }

    #[test]
    fn test_edge_cases() {
        let matcher = WuManberMatcher::new(&["abc", "de"]).unwrap();
        assert!(matcher.scan(b"").unwrap().matches.is_empty());
        assert!(matcher.scan(b"d").unwrap().matches.is_empty());
        assert_eq!(matcher.pattern(PatternId(5)), None);
    }

    #[test]
    fn test_invalid_pattern_sets() {
        let empty: [&str; 0] = [];
        assert_eq!(
            WuManberMatcher::new(&empty).unwrap_err(),
            SearchError::from(InvalidPatternSet::Empty)
        );
        assert_eq!(
            WuManberMatcher::new(&["abc", ""]).unwrap_err(),
            SearchError::from(InvalidPatternSet::EmptyEntry { index: 1 })
        );
    }
}
