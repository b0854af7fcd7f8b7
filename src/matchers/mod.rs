// Copyright (c) 2025 Matchbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Exact substring matchers sharing one search contract.
//!
//! Every matcher is built in two phases: construction preprocesses the
//! pattern (or pattern set) into an auxiliary table, and `scan` walks a
//! borrowed text with that table. Construction is where invalid input is
//! rejected, so a matcher that exists always holds a complete table.
//!
//! | Matcher | Table | Matches reported |
//! |---|---|---|
//! | [`KmpMatcher`] | longest proper prefix-suffix | all, overlapping |
//! | [`BoyerMooreMatcher`] | bad character | non-overlapping, greedy |
//! | [`RabinKarpMatcher`] | rolling hash | all, overlapping |
//! | [`WuManberMatcher`] | block hash | all, per pattern |
//! | [`NaiveMatcher`] | none | all, overlapping |
//!
//! # Example
//!
//! ```
//! use matchbench_lib::matchers::{KmpMatcher, SinglePatternMatcher};
//!
//! let matcher = KmpMatcher::new(b"abra").unwrap();
//! let outcome = matcher.scan(b"abracadabra").unwrap();
//! assert_eq!(outcome.positions, vec![0, 7]);
//! ```
//!
//! Text and patterns are byte strings. Case folding and word boundaries are
//! handled outside the algorithms by [`MatchPolicy`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::search::SearchConfig;

pub mod boyer_moore;
mod error;
pub mod kmp;
pub mod naive;
pub mod policy;
pub mod rabin_karp;
pub mod regex_baseline;
pub mod wu_manber;

#[cfg(test)]
mod tests;

// Re-exports
pub use boyer_moore::BoyerMooreMatcher;
pub use error::{InvalidPattern, InvalidPatternSet, SearchError, SearchResult};
pub use kmp::KmpMatcher;
pub use naive::NaiveMatcher;
pub use policy::{CaseSensitivity, MatchPolicy};
pub use rabin_karp::RabinKarpMatcher;
pub use regex_baseline::RegexBaseline;
pub use wu_manber::WuManberMatcher;

/// The single-pattern algorithms the harness can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Brute-force reference scan
    Naive,
    /// Knuth-Morris-Pratt
    Kmp,
    /// Boyer-Moore with the bad character rule
    BoyerMoore,
    /// Rabin-Karp rolling hash
    RabinKarp,
}

impl Algorithm {
    /// Every selectable algorithm, in reporting order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Naive,
        Algorithm::Kmp,
        Algorithm::BoyerMoore,
        Algorithm::RabinKarp,
    ];

    /// Stable lowercase name used in logs and reports.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::Kmp => "kmp",
            Algorithm::BoyerMoore => "boyer-moore",
            Algorithm::RabinKarp => "rabin-karp",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a matcher reports occurrences that share text with an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overlap {
    /// Every occurrence is reported
    Overlapping,
    /// After a match the scan resumes past it
    NonOverlapping,
}

/// Result of one single-pattern scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// Zero-based match start offsets, ascending
    pub positions: Vec<usize>,

    /// Character comparisons performed (meaning depends on the algorithm)
    pub comparisons: u64,

    /// Candidate hits rejected by verification (hash collisions, block collisions)
    pub spurious_hits: u64,
}

impl SearchOutcome {
    /// Number of matches found.
    pub fn match_count(&self) -> usize {
        self.positions.len()
    }
}

/// Index of a pattern in the set a multi-pattern matcher was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PatternId(pub usize);

/// One multi-pattern occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PatternMatch {
    /// Zero-based start offset in the text
    pub position: usize,

    /// Which pattern matched
    pub pattern: PatternId,
}

/// Result of one multi-pattern scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MultiSearchOutcome {
    /// Matches ordered by position, then by pattern id
    pub matches: Vec<PatternMatch>,

    /// Byte comparisons spent verifying candidates
    pub comparisons: u64,

    /// Candidates that failed verification
    pub spurious_hits: u64,
}

/// Contract shared by the single-pattern matchers.
///
/// Implementations are immutable once built, so one instance may be shared
/// across threads scanning different texts.
pub trait SinglePatternMatcher: Send + Sync + fmt::Debug {
    /// Which algorithm this matcher runs.
    fn algorithm(&self) -> Algorithm;

    /// The preprocessed pattern.
    fn pattern(&self) -> &[u8];

    /// Overlap policy of the reported matches.
    fn overlap(&self) -> Overlap {
        Overlap::Overlapping
    }

    /// Scans `text` and returns every match the algorithm reports.
    fn scan(&self, text: &[u8]) -> SearchResult<SearchOutcome>;
}

/// Builds the matcher for `algorithm` over `pattern`.
///
/// The Rabin-Karp modulus comes from `config`; the other algorithms take no
/// tuning parameters.
pub fn build_matcher(
    algorithm: Algorithm,
    pattern: &[u8],
    config: &SearchConfig,
) -> SearchResult<Box<dyn SinglePatternMatcher>> {
    let matcher: Box<dyn SinglePatternMatcher> = match algorithm {
        Algorithm::Naive => Box::new(NaiveMatcher::new(pattern)?),
        Algorithm::Kmp => Box::new(KmpMatcher::new(pattern)?),
        Algorithm::BoyerMoore => Box::new(BoyerMooreMatcher::new(pattern)?),
        Algorithm::RabinKarp => {
            Box::new(RabinKarpMatcher::with_prime(pattern, config.rabin_karp_prime)?)
        }
    };
    Ok(matcher)
}
