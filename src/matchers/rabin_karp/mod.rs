// Copyright (c) 2025 Matchbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Rabin-Karp matcher.
//!
//! The pattern is reduced to a polynomial hash modulo a prime. The scan keeps
//! a [`RollingHash`] of the current text window, updated in O(1) per byte,
//! and only compares bytes when the two hashes agree. Equal hashes are a
//! necessary condition, never a sufficient one: every hit is verified before
//! it is reported, and hits that fail verification are counted as
//! [`spurious_hits`](crate::matchers::SearchOutcome::spurious_hits).
//!
//! # Choosing the modulus
//!
//! The modulus only affects speed. A small prime such as the default
//! [`DEFAULT_PRIME`] collides often and pushes the average case toward
//! O(n·m); a large one keeps collisions rare. Results are identical for every
//! accepted modulus.
//!
//! ```
//! use matchbench_lib::matchers::{RabinKarpMatcher, SinglePatternMatcher};
//!
//! let matcher = RabinKarpMatcher::with_prime(b"abra", 101).unwrap();
//! assert_eq!(matcher.scan(b"abracadabra").unwrap().positions, vec![0, 7]);
//! ```

mod hash;

use tracing::debug;

pub use hash::{RollingHash, RADIX};

use super::{
    Algorithm, InvalidPattern, SearchError, SearchOutcome, SearchResult, SinglePatternMatcher,
};

/// Modulus used when the caller does not pick one.
pub const DEFAULT_PRIME: u64 = 101;

/// Largest accepted modulus; keeps the signed rolling update within `i64`.
pub const MAX_PRIME: u64 = 2_147_483_647;

/// Rabin-Karp matcher over a preprocessed pattern hash.
#[derive(Debug, Clone)]
pub struct RabinKarpMatcher {
    pattern: Vec<u8>,
    pattern_hash: RollingHash,
}

impl RabinKarpMatcher {
    /// Preprocesses `pattern` with [`DEFAULT_PRIME`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPattern::Empty`] if the pattern is empty.
    pub fn new(pattern: &[u8]) -> SearchResult<Self> {
        Self::with_prime(pattern, DEFAULT_PRIME)
    }

    /// Preprocesses `pattern` with a caller-chosen modulus.
    ///
    /// The modulus is not checked for primality; a composite one only raises
    /// the collision rate.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPattern::Empty`] if the pattern is empty and
    /// [`SearchError::InvalidModulus`] if `prime` is outside `2..=MAX_PRIME`.
    pub fn with_prime(pattern: &[u8], prime: u64) -> SearchResult<Self> {
        if pattern.is_empty() {
            return Err(InvalidPattern::Empty.into());
        }
        if !(2..=MAX_PRIME).contains(&prime) {
            return Err(SearchError::InvalidModulus(prime));
        }

        // Lossless: bounded by MAX_PRIME above
        let pattern_hash = RollingHash::new(pattern, prime as i64);
        debug!(
            pattern_len = pattern.len(),
            prime,
            hash = pattern_hash.value(),
            "built Rabin-Karp pattern hash"
        );

        Ok(Self {
            pattern: pattern.to_vec(),
            pattern_hash,
        })
    }

    /// The modulus in use.
    pub fn prime(&self) -> u64 {
        self.pattern_hash.prime() as u64
    }

    /// Hash of the pattern.
    pub fn pattern_hash(&self) -> i64 {
        self.pattern_hash.value()
    }
}

impl SinglePatternMatcher for RabinKarpMatcher {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RabinKarp
    }

    fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// Hash comparisons and verification byte comparisons both count toward
    /// [`SearchOutcome::comparisons`].
    fn scan(&self, text: &[u8]) -> SearchResult<SearchOutcome> {
        let n = text.len();
        let m = self.pattern.len();
        let mut outcome = SearchOutcome::default();
        if m > n {
            return Ok(outcome);
        }

        let target = self.pattern_hash.value();
        let mut window = RollingHash::new(&text[..m], self.pattern_hash.prime());
        for i in 0..=n - m {
            outcome.comparisons += 1;
            if window.value() == target {
                let mut verified = true;
                for (t, p) in text[i..i + m].iter().zip(&self.pattern) {
                    outcome.comparisons += 1;
                    if t != p {
                        verified = false;
                        break;
                    }
                }
                if verified {
                    outcome.positions.push(i);
                } else {
                    outcome.spurious_hits += 1;
                }
            }

            if i < n - m {
                window.roll(text[i], text[i + m]);
            }
        }

        debug!(
            matches = outcome.positions.len(),
            spurious_hits = outcome.spurious_hits,
            comparisons = outcome.comparisons,
            "Rabin-Karp scan finished"
        );
        Ok(outcome)
    }
}
