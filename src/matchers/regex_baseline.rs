// Copyright (c) 2025 Matchbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Regular-expression baseline backed by the `regex` crate.
//!
//! The engine is used as an opaque comparison point for timings and match
//! counts. Unicode is disabled so that `\b` and case folding follow the same
//! ASCII rules as [`MatchPolicy`](super::MatchPolicy).
//!
//! Whole-word expressions anchor each edge of the literal by the byte at that
//! edge: `\b` next to a word byte, `\B` next to any other byte. Either way the
//! neighbouring text byte must be a non-word byte (or the text edge), which is
//! what [`MatchPolicy::accepts`](super::MatchPolicy::accepts) checks.

use regex::bytes::{Regex, RegexBuilder};

use super::policy::is_word_byte;
use super::{CaseSensitivity, MatchPolicy};

/// Thin wrapper over a compiled byte regex.
#[derive(Debug, Clone)]
pub struct RegexBaseline {
    regex: Regex,
}

impl RegexBaseline {
    /// Compiles a literal pattern (escaped, case-sensitive).
    pub fn literal(pattern: &str) -> Result<Self, regex::Error> {
        Self::build(&regex::escape(pattern), false)
    }

    /// Compiles a case-insensitive whole-word pattern for `word`.
    pub fn word(word: &str) -> Result<Self, regex::Error> {
        Self::for_policy(word, &MatchPolicy::word_insensitive())
    }

    /// Compiles the literal `pattern` under `policy`, so that its matches are
    /// the ones the policy-filtered matchers would keep.
    pub fn for_policy(pattern: &str, policy: &MatchPolicy) -> Result<Self, regex::Error> {
        let escaped = regex::escape(pattern);
        let expr = match (pattern.as_bytes().first(), pattern.as_bytes().last()) {
            (Some(&first), Some(&last)) if policy.word_boundary => {
                format!("{}{escaped}{}", edge(first), edge(last))
            }
            _ => escaped,
        };
        Self::build(&expr, policy.case == CaseSensitivity::AsciiInsensitive)
    }

    /// Compiles an arbitrary expression.
    ///
    /// Case and word policies do not apply; the expression is taken as is.
    pub fn raw(expr: &str) -> Result<Self, regex::Error> {
        Self::build(expr, false)
    }

    fn build(expr: &str, case_insensitive: bool) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(expr)
            .unicode(false)
            .case_insensitive(case_insensitive)
            .build()?;
        Ok(Self { regex })
    }

    /// Non-overlapping matches as `(start, end)` byte ranges.
    pub fn find_iter(&self, text: &[u8]) -> Vec<(usize, usize)> {
        self.regex
            .find_iter(text)
            .map(|m| (m.start(), m.end()))
            .collect()
    }

    /// Number of non-overlapping matches.
    pub fn count(&self, text: &[u8]) -> usize {
        self.regex.find_iter(text).count()
    }

    /// The expression as compiled.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Every non-overlapping match of the literal `pattern` in `text`.
    pub fn find_all(pattern: &str, text: &[u8]) -> Result<Vec<(usize, usize)>, regex::Error> {
        Ok(Self::literal(pattern)?.find_iter(text))
    }

    /// Case-insensitive whole-word occurrences of `word` in `text`.
    pub fn count_word(word: &str, text: &[u8]) -> Result<usize, regex::Error> {
        Ok(Self::word(word)?.count(text))
    }

    /// Every non-overlapping match of the expression `expr` in `text`.
    pub fn find_raw(expr: &str, text: &[u8]) -> Result<Vec<(usize, usize)>, regex::Error> {
        Ok(Self::raw(expr)?.find_iter(text))
    }
}

/// Assertion that holds at a literal's edge byte exactly when the text byte
/// on the other side is not a word byte.
fn edge(byte: u8) -> &'static str {
    if is_word_byte(byte) {
        r"\b"
    } else {
        r"\B"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_all_is_non_overlapping() {
        assert_eq!(
            RegexBaseline::find_all("aa", b"aaaa").unwrap(),
            vec![(0, 2), (2, 4)]
        );
        assert_eq!(
            RegexBaseline::find_all("abra", b"abracadabra").unwrap(),
            vec![(0, 4), (7, 11)]
        );
    }

    #[test]
    fn test_literal_is_escaped() {
        assert_eq!(RegexBaseline::find_all("a.c", b"abc a.c").unwrap(), vec![(4, 7)]);
    }

    #[test]
    fn test_count_word() {
        let text = b"The cat sat. CAT! concat, cat_ and Cat";
        assert_eq!(RegexBaseline::count_word("cat", text).unwrap(), 3);
    }

    #[test]
    fn test_for_policy() {
        let text = b"Abra abracadabra ABRA";
        let exact = RegexBaseline::for_policy("abra", &MatchPolicy::exact()).unwrap();
        assert_eq!(exact.count(text), 2);

        let folded = MatchPolicy::exact().case_insensitive(true);
        let folded = RegexBaseline::for_policy("abra", &folded).unwrap();
        assert_eq!(folded.count(text), 4);

        let words = RegexBaseline::for_policy("abra", &MatchPolicy::word_insensitive()).unwrap();
        assert_eq!(words.as_str(), r"\babra\b");
        assert_eq!(words.count(text), 2);
    }

    #[test]
    fn test_count_word_with_non_ascii_edge() {
        assert_eq!(RegexBaseline::count_word("café", "un café, Café".as_bytes()).unwrap(), 2);
        assert_eq!(RegexBaseline::count_word("café", "cafés".as_bytes()).unwrap(), 0);
        assert_eq!(RegexBaseline::word("café").unwrap().as_str(), r"\bcafé\B");
    }

    #[test]
    fn test_count_word_ending_in_punctuation() {
        let text = b"c++ and c++x and xc++ or (c++)";
        assert_eq!(RegexBaseline::count_word("c++", text).unwrap(), 3);
        assert_eq!(RegexBaseline::word("c++").unwrap().as_str(), r"\bc\+\+\B");
    }

    #[test]
    fn test_find_raw() {
        assert_eq!(
            RegexBaseline::find_raw("[0-9]+", b"a1 b22 c333").unwrap(),
            vec![(1, 2), (4, 6), (8, 11)]
        );
        assert!(RegexBaseline::raw("(").is_err());
    }
}
