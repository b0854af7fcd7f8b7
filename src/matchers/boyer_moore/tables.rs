// Copyright (c) 2025 Matchbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bad character table for the Boyer-Moore string matching algorithm.
//!
//! The table records, for every byte value, the rightmost index at which it
//! occurs in the pattern. On a mismatch the window is moved so that this
//! occurrence lines up with the mismatching text byte, or past it entirely
//! when the byte does not occur in the pattern.

/// Sentinel for bytes that never occur in the pattern.
pub const ABSENT: isize = -1;

/// Size of the byte alphabet.
const ALPHABET_SIZE: usize = 256;

/// Rightmost occurrence of each byte value in the pattern.
///
/// A fixed array indexed by byte value replaces a hash map: the alphabet is
/// bounded and lookups sit on the scan's hot path.
#[derive(Debug, Clone)]
pub struct BadCharTable {
    last: [isize; ALPHABET_SIZE],
}

impl BadCharTable {
    /// Creates the table for `pattern`.
    ///
    /// Later occurrences overwrite earlier ones, so the rightmost index wins.
    pub fn new(pattern: &[u8]) -> Self {
        let mut last = [ABSENT; ALPHABET_SIZE];
        for (i, &byte) in pattern.iter().enumerate() {
            last[byte as usize] = i as isize;
        }
        Self { last }
    }

    /// Rightmost index of `byte` in the pattern, or [`ABSENT`].
    #[inline]
    pub fn last_occurrence(&self, byte: u8) -> isize {
        self.last[byte as usize]
    }

    /// Window advance after a mismatch on `byte` at pattern index `pos`.
    ///
    /// Always at least 1, also when the byte's last occurrence lies to the
    /// right of `pos`.
    #[inline]
    pub fn shift(&self, byte: u8, pos: usize) -> usize {
        let shift = pos as isize - self.last_occurrence(byte);
        shift.max(1) as usize
    }

    /// Number of distinct bytes present in the pattern.
    pub fn distinct_bytes(&self) -> usize {
        self.last.iter().filter(|&&idx| idx != ABSENT).count()
    }
}
