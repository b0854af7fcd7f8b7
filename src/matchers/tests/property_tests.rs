// Copyright (c) 2025 Matchbench Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests: every matcher against the naive reference scan.

use proptest::prelude::*;
use std::collections::BTreeSet;

use crate::matchers::{
    naive, BoyerMooreMatcher, InvalidPattern, KmpMatcher, MatchPolicy, RabinKarpMatcher,
    RegexBaseline, SearchError, SinglePatternMatcher, WuManberMatcher,
};

// Small alphabets make overlaps and hash collisions common
fn pattern_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab]{1,5}").unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,60}").unwrap()
}

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cA-C]{1,3}").unwrap()
}

fn prose_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cA-C _.]{0,80}").unwrap()
}

/// Left-to-right greedy choice of non-overlapping occurrences.
fn greedy_non_overlapping(positions: &[usize], pattern_len: usize) -> Vec<usize> {
    let mut next_free = 0;
    let mut chosen = Vec::new();
    for &start in positions {
        if start >= next_free {
            chosen.push(start);
            next_free = start + pattern_len;
        }
    }
    chosen
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Property: KMP finds exactly the naive positions, overlaps included
    #[test]
    fn prop_kmp_matches_naive(pattern in pattern_strategy(), text in text_strategy()) {
        let matcher = KmpMatcher::new(pattern.as_bytes()).unwrap();
        let outcome = matcher.scan(text.as_bytes()).unwrap();

        prop_assert_eq!(outcome.positions, naive::find_all(text.as_bytes(), pattern.as_bytes()));
    }

    // Property: KMP never exceeds 2n comparisons
    #[test]
    fn prop_kmp_comparisons_linear(pattern in pattern_strategy(), text in text_strategy()) {
        let matcher = KmpMatcher::new(pattern.as_bytes()).unwrap();
        let outcome = matcher.scan(text.as_bytes()).unwrap();

        prop_assert!(outcome.comparisons <= 2 * text.len() as u64);
    }

    // Property: Boyer-Moore reports the greedy non-overlapping subset
    #[test]
    fn prop_boyer_moore_greedy_subset(pattern in pattern_strategy(), text in text_strategy()) {
        let matcher = BoyerMooreMatcher::new(pattern.as_bytes()).unwrap();
        let result = matcher.scan(text.as_bytes());

        if !text.is_empty() && pattern.len() > text.len() {
            prop_assert_eq!(
                result.unwrap_err(),
                SearchError::from(InvalidPattern::LongerThanText {
                    pattern_len: pattern.len(),
                    text_len: text.len(),
                })
            );
        } else {
            let all = naive::find_all(text.as_bytes(), pattern.as_bytes());
            prop_assert_eq!(result.unwrap().positions, greedy_non_overlapping(&all, pattern.len()));
        }
    }

    // Property: Rabin-Karp positions do not depend on the modulus
    #[test]
    fn prop_rabin_karp_matches_naive(
        pattern in pattern_strategy(),
        text in text_strategy(),
        prime in 2u64..64,
    ) {
        let matcher = RabinKarpMatcher::with_prime(pattern.as_bytes(), prime).unwrap();
        let outcome = matcher.scan(text.as_bytes()).unwrap();

        prop_assert_eq!(outcome.positions, naive::find_all(text.as_bytes(), pattern.as_bytes()));
    }

    // Property: Wu-Manber finds the union of the per-pattern naive scans
    #[test]
    fn prop_wu_manber_matches_union(
        patterns in prop::collection::vec("[ab]{1,4}", 1..5),
        text in text_strategy(),
    ) {
        let matcher = WuManberMatcher::new(&patterns[..]).unwrap();
        let found: BTreeSet<(usize, usize)> = matcher
            .scan(text.as_bytes())
            .unwrap()
            .matches
            .iter()
            .map(|m| (m.position, m.pattern.0))
            .collect();

        let mut expected = BTreeSet::new();
        for (id, pattern) in patterns.iter().enumerate() {
            for start in naive::find_all(text.as_bytes(), pattern.as_bytes()) {
                expected.insert((start, id));
            }
        }

        prop_assert_eq!(found, expected);
    }

    // Property: rebuilding the tables and rescanning gives identical results
    #[test]
    fn prop_rescan_is_idempotent(pattern in pattern_strategy(), text in text_strategy()) {
        let first = KmpMatcher::new(pattern.as_bytes()).unwrap().scan(text.as_bytes()).unwrap();
        let second = KmpMatcher::new(pattern.as_bytes()).unwrap().scan(text.as_bytes()).unwrap();
        prop_assert_eq!(first, second);

        let first = RabinKarpMatcher::new(pattern.as_bytes()).unwrap().scan(text.as_bytes()).unwrap();
        let second = RabinKarpMatcher::new(pattern.as_bytes()).unwrap().scan(text.as_bytes()).unwrap();
        prop_assert_eq!(first, second);

        let first = BoyerMooreMatcher::new(pattern.as_bytes()).unwrap().scan(text.as_bytes());
        let second = BoyerMooreMatcher::new(pattern.as_bytes()).unwrap().scan(text.as_bytes());
        prop_assert_eq!(first, second);

        // One built matcher scanned twice must also agree
        let matcher = BoyerMooreMatcher::new(pattern.as_bytes()).unwrap();
        prop_assert_eq!(matcher.scan(text.as_bytes()), matcher.scan(text.as_bytes()));
    }

    // Property: rebuilding the block table and rescanning gives identical results
    #[test]
    fn prop_multi_rescan_is_idempotent(
        patterns in prop::collection::vec("[ab]{1,4}", 1..5),
        text in text_strategy(),
    ) {
        let first = WuManberMatcher::new(&patterns[..]).unwrap().scan(text.as_bytes()).unwrap();
        let second = WuManberMatcher::new(&patterns[..]).unwrap().scan(text.as_bytes()).unwrap();
        prop_assert_eq!(&first, &second);

        let matcher = WuManberMatcher::new(&patterns[..]).unwrap();
        prop_assert_eq!(matcher.scan(text.as_bytes()).unwrap(), first);
    }

    // Property: under the word policy, KMP agrees with the regex word count
    #[test]
    fn prop_word_policy_matches_regex(word in word_strategy(), text in prose_strategy()) {
        let policy = MatchPolicy::word_insensitive();
        let folded_text = policy.normalize(text.as_bytes());
        let folded_word = policy.normalize(word.as_bytes());

        let matcher = KmpMatcher::new(&folded_word).unwrap();
        let mut outcome = matcher.scan(&folded_text).unwrap();
        policy.filter_outcome(&folded_text, folded_word.len(), &mut outcome);

        let expected = RegexBaseline::count_word(&word, text.as_bytes()).unwrap();
        prop_assert_eq!(outcome.match_count(), expected);
    }
}
