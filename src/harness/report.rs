//! Serializable results produced by the search harness.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::matchers::{Algorithm, MatchPolicy, Overlap};

/// One single-pattern run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Algorithm that ran
    pub algorithm: Algorithm,
    /// Overlap policy of the algorithm
    pub overlap: Overlap,
    /// Pattern as given by the caller
    pub pattern: String,
    /// Exact number of matches
    pub match_count: usize,
    /// Leading match positions, capped by the harness configuration
    pub positions: Vec<usize>,
    /// Diagnostic comparison counter
    pub comparisons: u64,
    /// Candidates rejected by verification
    pub spurious_hits: u64,
    /// Shards the text was split into (1 for a plain scan)
    pub shards: usize,
    /// Mean wall time per repetition, in microseconds
    pub mean_micros: f64,
}

/// One multi-pattern occurrence, with the pattern spelled out.
#[derive(Debug, Clone, Serialize)]
pub struct MultiMatchReport {
    /// Match start offset
    pub position: usize,
    /// The pattern that matched
    pub pattern: String,
}

/// One multi-pattern run.
#[derive(Debug, Clone, Serialize)]
pub struct MultiReport {
    /// Patterns in id order
    pub patterns: Vec<String>,
    /// Window length used by the block table
    pub block_len: usize,
    /// Exact number of matches over all patterns
    pub match_count: usize,
    /// Matches per pattern
    pub counts: BTreeMap<String, usize>,
    /// Leading matches, capped by the harness configuration
    pub matches: Vec<MultiMatchReport>,
    /// Diagnostic comparison counter
    pub comparisons: u64,
    /// Block candidates rejected by verification
    pub spurious_hits: u64,
    /// Mean wall time per repetition, in microseconds
    pub mean_micros: f64,
}

/// One regex baseline run.
#[derive(Debug, Clone, Serialize)]
pub struct BaselineReport {
    /// Pattern as given by the caller
    pub pattern: String,
    /// Expression the regex engine compiled
    pub expression: String,
    /// Non-overlapping match count
    pub match_count: usize,
    /// Mean wall time per repetition, in microseconds
    pub mean_micros: f64,
}

/// One run of a caller-supplied regular expression.
#[derive(Debug, Clone, Serialize)]
pub struct ExpressionReport {
    /// Expression as given by the caller
    pub expression: String,
    /// Non-overlapping match count
    pub match_count: usize,
    /// Leading match ranges as `(start, end)`, capped by the harness configuration
    pub ranges: Vec<(usize, usize)>,
    /// Mean wall time per repetition, in microseconds
    pub mean_micros: f64,
}

/// Every algorithm and the baseline over one text.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    /// Name of the text source
    pub source: String,
    /// Text length in bytes
    pub text_len: usize,
    /// Matching semantics shared by all runs
    pub policy: MatchPolicy,
    /// Single-pattern runs, grouped by pattern
    pub runs: Vec<RunReport>,
    /// Sharded runs of the overlapping algorithms
    pub sharded: Vec<RunReport>,
    /// Multi-pattern run over all patterns
    pub multi: Option<MultiReport>,
    /// Regex baseline per pattern
    pub baselines: Vec<BaselineReport>,
    /// Caller-supplied expressions, run as given
    pub expressions: Vec<ExpressionReport>,
}

impl ComparisonReport {
    /// Patterns on which two runs with the same overlap policy disagree on
    /// the match count.
    ///
    /// Overlapping runs (plain and sharded) must agree with each other, as
    /// must non-overlapping runs and the regex baseline.
    pub fn inconsistencies(&self) -> Vec<String> {
        let mut counts: BTreeMap<(&str, bool), Vec<usize>> = BTreeMap::new();
        for run in self.runs.iter().chain(&self.sharded) {
            let overlapping = run.overlap == Overlap::Overlapping;
            counts
                .entry((run.pattern.as_str(), overlapping))
                .or_default()
                .push(run.match_count);
        }
        for baseline in &self.baselines {
            counts
                .entry((baseline.pattern.as_str(), false))
                .or_default()
                .push(baseline.match_count);
        }

        let mut inconsistent: Vec<String> = counts
            .into_iter()
            .filter(|(_, values)| values.windows(2).any(|w| w[0] != w[1]))
            .map(|((pattern, _), _)| pattern.to_string())
            .collect();
        inconsistent.dedup();
        inconsistent
    }
}

/// Mean of `total` over `repetitions`, in microseconds.
pub(crate) fn mean_micros(total: Duration, repetitions: u32) -> f64 {
    total.as_secs_f64() * 1e6 / f64::from(repetitions.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(algorithm: Algorithm, overlap: Overlap, pattern: &str, count: usize) -> RunReport {
        RunReport {
            algorithm,
            overlap,
            pattern: pattern.to_string(),
            match_count: count,
            positions: Vec::new(),
            comparisons: 0,
            spurious_hits: 0,
            shards: 1,
            mean_micros: 0.0,
        }
    }

    fn report(runs: Vec<RunReport>, baselines: Vec<BaselineReport>) -> ComparisonReport {
        ComparisonReport {
            source: "inline".to_string(),
            text_len: 4,
            policy: MatchPolicy::exact(),
            runs,
            sharded: Vec::new(),
            multi: None,
            baselines,
            expressions: Vec::new(),
        }
    }

    #[test]
    fn test_consistent_report() {
        let report = report(
            vec![
                run(Algorithm::Kmp, Overlap::Overlapping, "aa", 3),
                run(Algorithm::RabinKarp, Overlap::Overlapping, "aa", 3),
                run(Algorithm::BoyerMoore, Overlap::NonOverlapping, "aa", 2),
            ],
            vec![BaselineReport {
                pattern: "aa".to_string(),
                expression: "aa".to_string(),
                match_count: 2,
                mean_micros: 0.0,
            }],
        );
        assert!(report.inconsistencies().is_empty());
    }

    #[test]
    fn test_inconsistent_report() {
        let report = report(
            vec![
                run(Algorithm::Kmp, Overlap::Overlapping, "aa", 3),
                run(Algorithm::Naive, Overlap::Overlapping, "aa", 2),
            ],
            Vec::new(),
        );
        assert_eq!(report.inconsistencies(), vec!["aa".to_string()]);
    }

    #[test]
    fn test_mean_micros() {
        assert_eq!(mean_micros(Duration::from_millis(3), 3), 1000.0);
        assert_eq!(mean_micros(Duration::ZERO, 0), 0.0);
    }
}
