// Copyright (c) 2025 Matchbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types shared by every matcher.

/// Why a single pattern was rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum InvalidPattern {
    /// Empty pattern provided
    #[error("pattern cannot be empty")]
    Empty,

    /// Pattern is longer than the text it is applied to
    #[error("pattern of length {pattern_len} is longer than text of length {text_len}")]
    LongerThanText {
        /// Length of the pattern in bytes
        pattern_len: usize,
        /// Length of the text in bytes
        text_len: usize,
    },
}

/// Why a pattern set was rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum InvalidPatternSet {
    /// No patterns were supplied
    #[error("pattern set cannot be empty")]
    Empty,

    /// One entry of the set is the empty pattern
    #[error("pattern at index {index} is empty")]
    EmptyEntry {
        /// Position of the offending pattern in the set
        index: usize,
    },
}

/// Error types for preprocessing and scanning.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum SearchError {
    /// The pattern cannot be preprocessed or applied
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] InvalidPattern),

    /// The pattern set cannot be preprocessed
    #[error("Invalid pattern set: {0}")]
    InvalidPatternSet(#[from] InvalidPatternSet),

    /// The Rabin-Karp modulus is outside the supported range
    #[error("Invalid modulus {0}: must lie in [2, {max}]", max = super::rabin_karp::MAX_PRIME)]
    InvalidModulus(u64),
}

/// Result type for matcher operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SearchError::from(InvalidPattern::Empty);
        assert_eq!(err.to_string(), "Invalid pattern: pattern cannot be empty");

        let err = SearchError::from(InvalidPattern::LongerThanText {
            pattern_len: 5,
            text_len: 3,
        });
        assert_eq!(
            err.to_string(),
            "Invalid pattern: pattern of length 5 is longer than text of length 3"
        );

        let err = SearchError::from(InvalidPatternSet::EmptyEntry { index: 2 });
        assert_eq!(err.to_string(), "Invalid pattern set: pattern at index 2 is empty");
    }

    #[test]
    fn test_modulus_error_mentions_bound() {
        let err = SearchError::InvalidModulus(1);
        assert!(err.to_string().contains("2147483647"));
    }
}
