// Copyright (c) 2025 Matchbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Failure table for the Knuth-Morris-Pratt algorithm.

use std::ops::Index;

/// Longest proper prefix-suffix table.
///
/// `lps[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it. `lps[0]` is always 0 and `lps[i] <= i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LpsTable {
    lps: Vec<usize>,
}

impl LpsTable {
    /// Builds the table for `pattern` in O(m).
    pub fn new(pattern: &[u8]) -> Self {
        let m = pattern.len();
        let mut lps = vec![0; m];

        // `len` is the length of the border currently being extended
        let mut len = 0;
        let mut i = 1;
        while i < m {
            if pattern[i] == pattern[len] {
                len += 1;
                lps[i] = len;
                i += 1;
            } else if len != 0 {
                len = lps[len - 1];
            } else {
                lps[i] = 0;
                i += 1;
            }
        }

        Self { lps }
    }

    /// Number of entries (the pattern length).
    pub fn len(&self) -> usize {
        self.lps.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.lps.is_empty()
    }

    /// The raw table values.
    pub fn as_slice(&self) -> &[usize] {
        &self.lps
    }
}

impl Index<usize> for LpsTable {
    type Output = usize;

    fn index(&self, index: usize) -> &usize {
        &self.lps[index]
    }
}
