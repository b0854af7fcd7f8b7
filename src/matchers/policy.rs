// Copyright (c) 2025 Matchbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Normalisation and word-boundary policy applied around every matcher.
//!
//! The algorithms compare bytes exactly. To compare them with the regex
//! baseline under identical semantics, case folding is applied to the text
//! and to every pattern *before* preprocessing, and the word-boundary check
//! filters matches *after* the scan. Folding is ASCII-only, so byte offsets in
//! the folded text are valid offsets into the original.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::{MultiSearchOutcome, SearchOutcome};

/// Case handling applied before preprocessing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseSensitivity {
    /// Bytes must match exactly
    #[default]
    Sensitive,
    /// ASCII letters match regardless of case
    AsciiInsensitive,
}

/// Matching semantics shared by every algorithm in one comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPolicy {
    /// Case handling
    pub case: CaseSensitivity,

    /// Only accept matches delimited by non-word bytes (or the text edges)
    pub word_boundary: bool,
}

impl MatchPolicy {
    /// Exact, case-sensitive, anywhere in the text.
    pub fn exact() -> Self {
        Self::default()
    }

    /// Case-insensitive whole-word matching, as used by the regex baseline's
    /// word count.
    pub fn word_insensitive() -> Self {
        Self {
            case: CaseSensitivity::AsciiInsensitive,
            word_boundary: true,
        }
    }

    /// Sets the case handling.
    pub fn case_insensitive(mut self, value: bool) -> Self {
        self.case = if value {
            CaseSensitivity::AsciiInsensitive
        } else {
            CaseSensitivity::Sensitive
        };
        self
    }

    /// Sets whether matches must sit on word boundaries.
    pub fn word_boundary(mut self, value: bool) -> Self {
        self.word_boundary = value;
        self
    }

    /// Folds `bytes` according to the case policy.
    ///
    /// Borrows when nothing needs to change.
    pub fn normalize<'a>(&self, bytes: &'a [u8]) -> Cow<'a, [u8]> {
        match self.case {
            CaseSensitivity::AsciiInsensitive if bytes.iter().any(u8::is_ascii_uppercase) => {
                Cow::Owned(bytes.to_ascii_lowercase())
            }
            _ => Cow::Borrowed(bytes),
        }
    }

    /// Whether a match of `len` bytes at `start` is acceptable in `text`.
    pub fn accepts(&self, text: &[u8], start: usize, len: usize) -> bool {
        if !self.word_boundary {
            return true;
        }
        let before = start
            .checked_sub(1)
            .and_then(|i| text.get(i))
            .is_some_and(|&b| is_word_byte(b));
        let after = text.get(start + len).is_some_and(|&b| is_word_byte(b));
        !before && !after
    }

    /// Drops single-pattern matches rejected by [`accepts`](Self::accepts).
    pub fn filter_outcome(&self, text: &[u8], pattern_len: usize, outcome: &mut SearchOutcome) {
        if self.word_boundary {
            outcome
                .positions
                .retain(|&start| self.accepts(text, start, pattern_len));
        }
    }

    /// Drops multi-pattern matches rejected by [`accepts`](Self::accepts).
    ///
    /// `pattern_len` resolves a match's pattern id to its length.
    pub fn filter_multi_outcome<F>(&self, text: &[u8], pattern_len: F, outcome: &mut MultiSearchOutcome)
    where
        F: Fn(usize) -> usize,
    {
        if self.word_boundary {
            outcome
                .matches
                .retain(|m| self.accepts(text, m.position, pattern_len(m.pattern.0)));
        }
    }
}

/// ASCII word byte, the same class as `\w` with Unicode disabled.
pub(crate) fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        let exact = MatchPolicy::exact();
        assert!(matches!(exact.normalize(b"MiXeD"), Cow::Borrowed(_)));

        let folded = MatchPolicy::exact().case_insensitive(true);
        assert_eq!(folded.normalize(b"MiXeD 123").as_ref(), b"mixed 123");
        assert!(matches!(folded.normalize(b"lower"), Cow::Borrowed(_)));

        // Non-ASCII bytes are untouched, so offsets are preserved
        let text = "ÉCOLE".as_bytes();
        let normalized = folded.normalize(text);
        assert_eq!(normalized.len(), text.len());
        assert_eq!(normalized.as_ref(), "École".as_bytes());
    }

    #[test]
    fn test_accepts_word_boundaries() {
        let policy = MatchPolicy::exact().word_boundary(true);
        let text = b"cat concat cat_ cat.";

        assert!(policy.accepts(text, 0, 3));
        assert!(!policy.accepts(text, 7, 3));
        assert!(!policy.accepts(text, 11, 3));
        assert!(policy.accepts(text, 16, 3));
    }

    #[test]
    fn test_accepts_without_boundaries() {
        let policy = MatchPolicy::exact();
        assert!(policy.accepts(b"concat", 3, 3));
    }

    #[test]
    fn test_filter_outcome() {
        let policy = MatchPolicy::word_insensitive();
        let mut outcome = SearchOutcome {
            positions: vec![0, 7, 11, 16],
            ..Default::default()
        };
        policy.filter_outcome(b"cat concat cat_ cat.", 3, &mut outcome);
        assert_eq!(outcome.positions, vec![0, 16]);
    }
}
