// Copyright (c) 2025 Matchbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore scan loop and its match iterator.

use std::iter::FusedIterator;

use tracing::debug;

use super::tables::BadCharTable;
use crate::matchers::{
    Algorithm, InvalidPattern, Overlap, SearchOutcome, SearchResult, SinglePatternMatcher,
};

/// Boyer-Moore matcher using the bad character rule.
#[derive(Debug, Clone)]
pub struct BoyerMooreMatcher {
    /// The pattern being searched for
    pattern: Vec<u8>,

    /// Bad character rule table
    bad_char_table: BadCharTable,
}

impl BoyerMooreMatcher {
    /// Preprocesses `pattern` into its bad character table.
    ///
    /// Whether the pattern fits the text is only known at scan time.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPattern::Empty`] if the pattern is empty.
    pub fn new(pattern: &[u8]) -> SearchResult<Self> {
        if pattern.is_empty() {
            return Err(InvalidPattern::Empty.into());
        }

        let bad_char_table = BadCharTable::new(pattern);
        debug!(
            pattern_len = pattern.len(),
            distinct_bytes = bad_char_table.distinct_bytes(),
            "built Boyer-Moore bad character table"
        );

        Ok(Self {
            pattern: pattern.to_vec(),
            bad_char_table,
        })
    }

    /// The bad character table built for the pattern.
    pub fn table(&self) -> &BadCharTable {
        &self.bad_char_table
    }

    /// Lazily yields match positions in `text`, with the same policy as
    /// [`SinglePatternMatcher::scan`].
    ///
    /// A pattern longer than the text yields nothing.
    pub fn find_iter<'a>(&'a self, text: &'a [u8]) -> MatchIterator<'a> {
        MatchIterator {
            matcher: self,
            text,
            shift: 0,
            comparisons: 0,
        }
    }

    /// Finds the next match at or after window start `shift`.
    ///
    /// Returns the match position and the comparisons spent.
    fn next_match(&self, text: &[u8], mut shift: usize) -> (Option<usize>, u64) {
        let n = text.len();
        let m = self.pattern.len();
        let mut comparisons = 0;
        if m > n {
            return (None, comparisons);
        }

        while shift <= n - m {
            // Compare right to left; `j` counts the bytes still unchecked
            let mut j = m;
            while j > 0 {
                comparisons += 1;
                if self.pattern[j - 1] != text[shift + j - 1] {
                    break;
                }
                j -= 1;
            }

            if j == 0 {
                return (Some(shift), comparisons);
            }

            let pos = j - 1;
            shift += self.bad_char_table.shift(text[shift + pos], pos);
        }

        (None, comparisons)
    }

    /// Window start after a match at `position`.
    ///
    /// Skips the whole match, except when the window already touches the end
    /// of the text, where a single step is enough to terminate.
    fn advance_after_match(&self, position: usize, text_len: usize) -> usize {
        let m = self.pattern.len();
        if position + m < text_len {
            position + m
        } else {
            position + 1
        }
    }
}

impl SinglePatternMatcher for BoyerMooreMatcher {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BoyerMoore
    }

    fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// After a match the window skips the full pattern length, so only the
    /// non-overlapping, left-to-right greedy subset of occurrences is found.
    /// On `aaaa` the pattern `aa` matches at 0 and 2, never at 1.
    fn overlap(&self) -> Overlap {
        Overlap::NonOverlapping
    }

    fn scan(&self, text: &[u8]) -> SearchResult<SearchOutcome> {
        let m = self.pattern.len();
        if !text.is_empty() && m > text.len() {
            return Err(InvalidPattern::LongerThanText {
                pattern_len: m,
                text_len: text.len(),
            }
            .into());
        }

        let mut iter = self.find_iter(text);
        let positions: Vec<usize> = iter.by_ref().collect();
        let outcome = SearchOutcome {
            positions,
            comparisons: iter.comparisons(),
            spurious_hits: 0,
        };

        debug!(
            matches = outcome.positions.len(),
            comparisons = outcome.comparisons,
            "Boyer-Moore scan finished"
        );
        Ok(outcome)
    }
}

/// Iterator over Boyer-Moore matches in a text.
#[derive(Debug)]
pub struct MatchIterator<'a> {
    /// The matcher instance
    matcher: &'a BoyerMooreMatcher,

    /// The text being searched
    text: &'a [u8],

    /// Start of the next window
    shift: usize,

    /// Comparisons performed so far
    comparisons: u64,
}

impl MatchIterator<'_> {
    /// Comparisons performed by the matches yielded so far.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }
}

impl Iterator for MatchIterator<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.matcher.pattern.len();
        if m > self.text.len() || self.shift > self.text.len() - m {
            return None;
        }

        let (found, comparisons) = self.matcher.next_match(self.text, self.shift);
        self.comparisons += comparisons;
        match found {
            Some(position) => {
                self.shift = self.matcher.advance_after_match(position, self.text.len());
                Some(position)
            }
            None => {
                self.shift = self.text.len() + 1;
                None
            }
        }
    }
}

// Once exhausted the window lies past the text, so `next` keeps returning None
impl FusedIterator for MatchIterator<'_> {}
