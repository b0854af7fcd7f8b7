//! Parallel scans over disjoint slices of one text.
//!
//! The text is cut into contiguous shards. Each shard is scanned together
//! with the first `m - 1` bytes of the next one, so an occurrence that
//! straddles a cut is still seen, and only occurrences *starting* inside the
//! shard's own range are kept. Concatenating the shards in order then gives
//! exactly the positions of an unsharded scan.
//!
//! Only matchers that report every occurrence can be sharded: a
//! non-overlapping scan decides where to resume from earlier matches, which a
//! shard cannot know.

use std::ops::Range;

use rayon::prelude::*;
use tracing::debug;

use crate::error::HarnessError;
use crate::matchers::{Overlap, SearchOutcome, SearchResult, SinglePatternMatcher};

/// Splits `len` bytes into at most `shards` contiguous, non-empty ranges.
pub fn shard_ranges(len: usize, shards: usize) -> Vec<Range<usize>> {
    if len == 0 {
        return Vec::new();
    }
    let chunk = len.div_ceil(shards.max(1));
    (0..len)
        .step_by(chunk)
        .map(|start| start..(start + chunk).min(len))
        .collect()
}

/// Scans `text` with `matcher` across `shards` rayon tasks.
///
/// Positions equal those of `matcher.scan(text)`. The counters are summed
/// over shards and include the work spent on the overlap regions.
pub fn scan_sharded(
    matcher: &dyn SinglePatternMatcher,
    text: &[u8],
    shards: usize,
) -> Result<SearchOutcome, HarnessError> {
    if matcher.overlap() != Overlap::Overlapping {
        return Err(HarnessError::ShardingUnsupported(matcher.algorithm()));
    }

    let overlap = matcher.pattern().len().saturating_sub(1);
    let ranges = shard_ranges(text.len(), shards);
    debug!(
        algorithm = %matcher.algorithm(),
        shards = ranges.len(),
        text_len = text.len(),
        "starting sharded scan"
    );

    let partials = ranges
        .par_iter()
        .map(|range| scan_shard(matcher, text, range, overlap))
        .collect::<SearchResult<Vec<_>>>()?;

    let mut outcome = SearchOutcome::default();
    for partial in partials {
        outcome.positions.extend(partial.positions);
        outcome.comparisons += partial.comparisons;
        outcome.spurious_hits += partial.spurious_hits;
    }
    Ok(outcome)
}

fn scan_shard(
    matcher: &dyn SinglePatternMatcher,
    text: &[u8],
    range: &Range<usize>,
    overlap: usize,
) -> SearchResult<SearchOutcome> {
    let end = (range.end + overlap).min(text.len());
    let mut outcome = matcher.scan(&text[range.start..end])?;

    let own = range.end - range.start;
    outcome.positions.retain(|&p| p < own);
    for position in &mut outcome.positions {
        *position += range.start;
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::{Algorithm, BoyerMooreMatcher, KmpMatcher, RabinKarpMatcher};

    #[test]
    fn test_shard_ranges() {
        assert_eq!(shard_ranges(10, 3), vec![0..4, 4..8, 8..10]);
        assert_eq!(shard_ranges(2, 8), vec![0..1, 1..2]);
        assert_eq!(shard_ranges(5, 0), vec![0..5]);
        assert!(shard_ranges(0, 4).is_empty());
    }

    #[test]
    fn test_match_across_cut() {
        // "abra" at 7 straddles the cut between the first and second shard
        let matcher = KmpMatcher::new(b"abra").unwrap();
        let text = b"abracadabra";
        for shards in 1..=text.len() {
            let outcome = scan_sharded(&matcher, text, shards).unwrap();
            assert_eq!(outcome.positions, vec![0, 7], "shards = {shards}");
        }
    }

    #[test]
    fn test_overlapping_matches_are_kept_once() {
        let matcher = RabinKarpMatcher::new(b"aa").unwrap();
        let outcome = scan_sharded(&matcher, b"aaaaaa", 4).unwrap();
        assert_eq!(outcome.positions, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_text() {
        let matcher = KmpMatcher::new(b"a").unwrap();
        let outcome = scan_sharded(&matcher, b"", 4).unwrap();
        assert_eq!(outcome, SearchOutcome::default());
    }

    #[test]
    fn test_non_overlapping_matcher_is_rejected() {
        let matcher = BoyerMooreMatcher::new(b"aa").unwrap();
        let err = scan_sharded(&matcher, b"aaaa", 2).unwrap_err();
        assert!(matches!(
            err,
            HarnessError::ShardingUnsupported(Algorithm::BoyerMoore)
        ));
    }
}
