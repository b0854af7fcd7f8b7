// Copyright (c) 2025 Matchbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Polynomial rolling hash over a fixed-size byte window.

/// Alphabet radix: one digit per byte value.
pub const RADIX: i64 = 256;

/// Rolling hash of an `m`-byte window modulo a prime.
///
/// At window start `i` the value is
/// `Σ text[i+k] · RADIX^(m-1-k) mod prime` for `k` in `0..m`.
/// Arithmetic is signed so that removing the outgoing byte may dip below
/// zero; every update folds the result back into `[0, prime)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHash {
    prime: i64,
    /// `RADIX^(m-1) mod prime`, the weight of the outgoing byte
    high_weight: i64,
    value: i64,
}

impl RollingHash {
    /// Hashes `window` under `prime`.
    ///
    /// The caller guarantees `2 <= prime <= MAX_PRIME` and a non-empty window.
    pub(super) fn new(window: &[u8], prime: i64) -> Self {
        let mut high_weight = 1;
        for _ in 1..window.len() {
            high_weight = (high_weight * RADIX) % prime;
        }

        let value = window
            .iter()
            .fold(0, |acc, &byte| (RADIX * acc + i64::from(byte)) % prime);

        Self {
            prime,
            high_weight,
            value,
        }
    }

    /// Current hash value, always in `[0, prime)`.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The modulus.
    pub fn prime(&self) -> i64 {
        self.prime
    }

    /// `RADIX^(m-1) mod prime`.
    pub fn high_weight(&self) -> i64 {
        self.high_weight
    }

    /// Slides the window one byte: drops `outgoing`, appends `incoming`.
    #[inline]
    pub fn roll(&mut self, outgoing: u8, incoming: u8) {
        let without = self.value - i64::from(outgoing) * self.high_weight;
        let mut next = (RADIX * without + i64::from(incoming)) % self.prime;
        if next < 0 {
            next += self.prime;
        }
        self.value = next;
    }
}
