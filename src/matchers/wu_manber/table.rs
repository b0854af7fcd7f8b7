// Copyright (c) 2025 Matchbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Block table for multi-pattern search.

use fnv::FnvHashMap;

use crate::matchers::PatternId;

/// Maps every `block_len`-byte substring of any pattern to the patterns that
/// contain it.
///
/// Candidate lists are in ascending pattern order with no duplicates. The
/// table is read-only once built.
#[derive(Debug, Clone)]
pub struct ShiftTable {
    blocks: FnvHashMap<Vec<u8>, Vec<PatternId>>,
    block_len: usize,
}

impl ShiftTable {
    /// Registers every block of every pattern.
    ///
    /// The caller guarantees that `block_len` is at least 1 and no longer than
    /// the shortest pattern.
    pub fn new<P: AsRef<[u8]>>(patterns: &[P], block_len: usize) -> Self {
        let mut blocks: FnvHashMap<Vec<u8>, Vec<PatternId>> = FnvHashMap::default();

        for (index, pattern) in patterns.iter().enumerate() {
            let id = PatternId(index);
            for block in pattern.as_ref().windows(block_len) {
                let candidates = blocks.entry(block.to_vec()).or_default();
                // Patterns are visited in order, so a repeat can only be the last entry
                if candidates.last() != Some(&id) {
                    candidates.push(id);
                }
            }
        }

        Self { blocks, block_len }
    }

    /// Length of every key.
    pub fn block_len(&self) -> usize {
        self.block_len
    }

    /// Patterns registered under `block`, empty when none are.
    #[inline]
    pub fn candidates(&self, block: &[u8]) -> &[PatternId] {
        self.blocks.get(block).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no block is registered.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_registered() {
        let table = ShiftTable::new(&["abra", "cad"], 3);

        assert_eq!(table.block_len(), 3);
        assert_eq!(table.candidates(b"abr"), &[PatternId(0)]);
        assert_eq!(table.candidates(b"bra"), &[PatternId(0)]);
        assert_eq!(table.candidates(b"cad"), &[PatternId(1)]);
        assert!(table.candidates(b"aca").is_empty());
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_shared_blocks_and_duplicates() {
        // "aaa" contains the block "aa" twice but is registered once
        let table = ShiftTable::new(&["aaa", "baa", "aab"], 2);

        assert_eq!(
            table.candidates(b"aa"),
            &[PatternId(0), PatternId(1), PatternId(2)]
        );
        assert_eq!(table.candidates(b"ba"), &[PatternId(1)]);
        assert_eq!(table.candidates(b"ab"), &[PatternId(2)]);
    }
}
