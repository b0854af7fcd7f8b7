// Copyright (c) 2025 Matchbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore pattern matcher.
//!
//! Each window of the text is compared against the pattern right to left.
//! On a mismatch the bad character rule moves the window so that the
//! rightmost occurrence of the mismatching byte in the pattern lines up with
//! it, which lets long patterns skip most of the text.
//!
//! # Match policy
//!
//! After a match the window moves by the full pattern length (or by one when
//! it already touches the end of the text). The matcher therefore reports the
//! non-overlapping, left-to-right greedy subset of occurrences, which is a
//! different count from [`KmpMatcher`](crate::matchers::KmpMatcher) whenever
//! occurrences overlap.
//!
//! # Example
//!
//! ```
//! use matchbench_lib::matchers::{BoyerMooreMatcher, SinglePatternMatcher};
//!
//! let matcher = BoyerMooreMatcher::new(b"needle").unwrap();
//! let text = b"Finding a needle in a haystack is hard, but finding another needle is easier.";
//! assert_eq!(matcher.scan(text).unwrap().positions, vec![10, 60]);
//!
//! // Overlapping occurrences are skipped
//! let matcher = BoyerMooreMatcher::new(b"aa").unwrap();
//! assert_eq!(matcher.scan(b"aaaa").unwrap().positions, vec![0, 2]);
//! ```
//!
//! # Performance Characteristics
//!
//! - Preprocessing: O(m + σ) with σ = 256
//! - Best case: O(n/m) comparisons
//! - Worst case: O(n·m) comparisons

mod matcher;
mod tables;

// Re-exports
pub use matcher::{BoyerMooreMatcher, MatchIterator};
pub use tables::{BadCharTable, ABSENT};
