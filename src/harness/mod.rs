//! Search harness.
//!
//! Loads a text once, runs the configured matchers and the regex baseline
//! over it under one [`MatchPolicy`], and collects timings and counts into
//! serializable reports. Nothing here alters how a matcher decides where a
//! match is; the policy is applied around the algorithms by normalizing their
//! input and filtering their output.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::MatchbenchConfig;
use crate::error::HarnessError;
use crate::matchers::{
    build_matcher, Algorithm, InvalidPattern, MatchPolicy, Overlap, RegexBaseline, SearchError,
    SearchOutcome, SinglePatternMatcher, WuManberMatcher,
};

pub mod report;
pub mod shard;
pub mod source;

pub use report::{
    BaselineReport, ComparisonReport, ExpressionReport, MultiMatchReport, MultiReport, RunReport,
};
pub use shard::{scan_sharded, shard_ranges};
pub use source::{FileSource, InlineSource, TextSource};

#[cfg(test)]
pub use source::MockTextSource;

/// Result type for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Drives matchers over a text and reports on them.
#[derive(Debug, Clone, Default)]
pub struct SearchHarness {
    config: MatchbenchConfig,
}

impl SearchHarness {
    /// Creates a harness with the given configuration.
    pub fn new(config: MatchbenchConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &MatchbenchConfig {
        &self.config
    }

    /// The matching policy every run applies.
    pub fn policy(&self) -> MatchPolicy {
        self.config.search.policy()
    }

    /// Reads the whole text from `source`.
    pub fn load(&self, source: &dyn TextSource) -> HarnessResult<Vec<u8>> {
        let text = source.load()?;
        info!(source = %source.name(), bytes = text.len(), "text loaded");
        Ok(text)
    }

    /// Runs one single-pattern algorithm over `text`.
    ///
    /// # Errors
    ///
    /// Fails when the pattern is empty, and for Boyer-Moore when a non-empty
    /// text is shorter than the pattern.
    pub fn run_single(
        &self,
        algorithm: Algorithm,
        text: &[u8],
        pattern: &str,
    ) -> HarnessResult<RunReport> {
        let policy = self.policy();
        let text = policy.normalize(text);
        let needle = policy.normalize(pattern.as_bytes());

        let matcher = build_matcher(algorithm, &needle, &self.config.search)?;
        let (mut outcome, mean_micros) = self.timed(|| matcher.scan(&text))?;
        policy.filter_outcome(&text, needle.len(), &mut outcome);

        info!(
            algorithm = %algorithm,
            pattern,
            matches = outcome.match_count(),
            comparisons = outcome.comparisons,
            mean_micros,
            "search complete"
        );
        Ok(self.run_report(matcher.as_ref(), pattern, outcome, 1, mean_micros))
    }

    /// Runs one single-pattern algorithm over `text` split across the
    /// configured number of shards.
    ///
    /// # Errors
    ///
    /// Fails with [`HarnessError::ShardingUnsupported`] for algorithms that
    /// report non-overlapping matches.
    pub fn run_sharded(
        &self,
        algorithm: Algorithm,
        text: &[u8],
        pattern: &str,
    ) -> HarnessResult<RunReport> {
        let policy = self.policy();
        let text = policy.normalize(text);
        let needle = policy.normalize(pattern.as_bytes());
        let shards = self.config.harness.effective_shards();

        let matcher = build_matcher(algorithm, &needle, &self.config.search)?;
        let (mut outcome, mean_micros) =
            self.timed(|| scan_sharded(matcher.as_ref(), &text, shards))?;
        policy.filter_outcome(&text, needle.len(), &mut outcome);

        info!(
            algorithm = %algorithm,
            pattern,
            shards,
            matches = outcome.match_count(),
            mean_micros,
            "sharded search complete"
        );
        Ok(self.run_report(matcher.as_ref(), pattern, outcome, shards, mean_micros))
    }

    /// Runs the multi-pattern matcher over `text` for every pattern at once.
    pub fn run_multi(&self, text: &[u8], patterns: &[String]) -> HarnessResult<MultiReport> {
        let policy = self.policy();
        let text = policy.normalize(text);
        let needles: Vec<Vec<u8>> = patterns
            .iter()
            .map(|p| policy.normalize(p.as_bytes()).into_owned())
            .collect();

        let matcher = WuManberMatcher::new(&needles[..])?;
        let (mut outcome, mean_micros) = self.timed(|| matcher.scan(&text))?;
        policy.filter_multi_outcome(&text, |id| needles[id].len(), &mut outcome);

        let mut counts: BTreeMap<String, usize> = patterns.iter().map(|p| (p.clone(), 0)).collect();
        for m in &outcome.matches {
            *counts.entry(patterns[m.pattern.0].clone()).or_default() += 1;
        }
        let matches = outcome
            .matches
            .iter()
            .take(self.config.harness.max_positions_reported)
            .map(|m| MultiMatchReport {
                position: m.position,
                pattern: patterns[m.pattern.0].clone(),
            })
            .collect();

        info!(
            patterns = patterns.len(),
            block_len = matcher.block_len(),
            matches = outcome.matches.len(),
            spurious_hits = outcome.spurious_hits,
            mean_micros,
            "multi-pattern search complete"
        );
        Ok(MultiReport {
            patterns: patterns.to_vec(),
            block_len: matcher.block_len(),
            match_count: outcome.matches.len(),
            counts,
            matches,
            comparisons: outcome.comparisons,
            spurious_hits: outcome.spurious_hits,
            mean_micros,
        })
    }

    /// Counts the matches of `pattern` with the regex engine, under the same
    /// policy as the matchers.
    pub fn run_baseline(&self, text: &[u8], pattern: &str) -> HarnessResult<BaselineReport> {
        let baseline = RegexBaseline::for_policy(pattern, &self.policy())?;
        let (match_count, mean_micros) =
            self.timed(|| Ok::<_, HarnessError>(baseline.count(text)))?;

        info!(
            pattern,
            expression = baseline.as_str(),
            matches = match_count,
            mean_micros,
            "regex baseline complete"
        );
        Ok(BaselineReport {
            pattern: pattern.to_string(),
            expression: baseline.as_str().to_string(),
            match_count,
            mean_micros,
        })
    }

    /// Runs the regular expression `expr` as given over `text`.
    ///
    /// The matching policy does not apply; case and word handling are up to
    /// the expression.
    pub fn run_expression(&self, text: &[u8], expr: &str) -> HarnessResult<ExpressionReport> {
        let regex = RegexBaseline::raw(expr)?;
        let (mut ranges, mean_micros) =
            self.timed(|| Ok::<_, HarnessError>(regex.find_iter(text)))?;
        let match_count = ranges.len();
        ranges.truncate(self.config.harness.max_positions_reported);

        info!(
            expression = expr,
            matches = match_count,
            mean_micros,
            "expression run complete"
        );
        Ok(ExpressionReport {
            expression: expr.to_string(),
            match_count,
            ranges,
            mean_micros,
        })
    }

    /// Loads `source` and runs every algorithm, the sharded scans, the
    /// multi-pattern matcher and the regex baseline for each pattern.
    ///
    /// Boyer-Moore is skipped for patterns longer than a non-empty text.
    pub fn compare(
        &self,
        source: &dyn TextSource,
        patterns: &[String],
    ) -> HarnessResult<ComparisonReport> {
        self.compare_with_expressions(source, patterns, &[])
    }

    /// Like [`compare`](Self::compare), and also runs each of `expressions`
    /// as a raw regular expression over the same text.
    pub fn compare_with_expressions(
        &self,
        source: &dyn TextSource,
        patterns: &[String],
        expressions: &[String],
    ) -> HarnessResult<ComparisonReport> {
        let text = self.load(source)?;
        let mut runs = Vec::new();
        let mut sharded = Vec::new();
        let mut baselines = Vec::new();

        for pattern in patterns {
            for algorithm in Algorithm::ALL {
                let run = match self.run_single(algorithm, &text, pattern) {
                    Ok(run) => run,
                    Err(HarnessError::Search(SearchError::InvalidPattern(
                        e @ InvalidPattern::LongerThanText { .. },
                    ))) => {
                        warn!(algorithm = %algorithm, pattern = %pattern, error = %e, "skipping run");
                        continue;
                    }
                    Err(e) => return Err(e),
                };
                if run.overlap == Overlap::Overlapping {
                    sharded.push(self.run_sharded(algorithm, &text, pattern)?);
                }
                runs.push(run);
            }
            baselines.push(self.run_baseline(&text, pattern)?);
        }

        let expressions = expressions
            .iter()
            .map(|expr| self.run_expression(&text, expr))
            .collect::<HarnessResult<Vec<_>>>()?;

        let multi = if patterns.is_empty() {
            None
        } else {
            Some(self.run_multi(&text, patterns)?)
        };

        let report = ComparisonReport {
            source: source.name(),
            text_len: text.len(),
            policy: self.policy(),
            runs,
            sharded,
            multi,
            baselines,
            expressions,
        };
        let inconsistent = report.inconsistencies();
        if !inconsistent.is_empty() {
            warn!(patterns = ?inconsistent, "match counts disagree");
        }
        Ok(report)
    }

    /// Runs `scan` `repetitions` times and returns the last result with the
    /// mean time per run.
    fn timed<T, E, F>(&self, mut scan: F) -> Result<(T, f64), E>
    where
        F: FnMut() -> Result<T, E>,
    {
        let repetitions = self.config.harness.repetitions.max(1);
        let start = Instant::now();
        let mut result = scan()?;
        for _ in 1..repetitions {
            result = scan()?;
        }
        let elapsed = start.elapsed();
        debug!(repetitions, elapsed_micros = elapsed.as_micros() as u64, "timed scan");
        Ok((result, report::mean_micros(elapsed, repetitions)))
    }

    fn run_report(
        &self,
        matcher: &dyn SinglePatternMatcher,
        pattern: &str,
        outcome: SearchOutcome,
        shards: usize,
        mean_micros: f64,
    ) -> RunReport {
        let match_count = outcome.match_count();
        let mut positions = outcome.positions;
        positions.truncate(self.config.harness.max_positions_reported);
        RunReport {
            algorithm: matcher.algorithm(),
            overlap: matcher.overlap(),
            pattern: pattern.to_string(),
            match_count,
            positions,
            comparisons: outcome.comparisons,
            spurious_hits: outcome.spurious_hits,
            shards,
            mean_micros,
        }
    }
}
