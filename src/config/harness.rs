//! Harness configuration module.
//!
//! Controls how many times each search is repeated for timing, how text is
//! split for parallel scans, and how much of each result is reported.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound on timed repetitions per search.
const MAX_REPETITIONS: u32 = 10_000;

/// Harness configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Timed runs per algorithm and pattern; the report keeps the mean
    pub repetitions: u32,

    /// Shards for parallel scans (None to use one per CPU)
    pub shards: Option<usize>,

    /// Positions listed per result in reports; the count is always exact
    pub max_positions_reported: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            repetitions: 3,
            shards: None,
            max_positions_reported: 20,
        }
    }
}

impl HarnessConfig {
    /// Shard count to use, resolving `None` to the number of CPUs.
    pub fn effective_shards(&self) -> usize {
        self.shards.unwrap_or_else(num_cpus::get).max(1)
    }
}

impl Validate for HarnessConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.repetitions == 0 || self.repetitions > MAX_REPETITIONS {
            return Err(ConfigError::ValueOutOfRange {
                key: "harness.repetitions".to_string(),
                message: format!("must be between 1 and {MAX_REPETITIONS}"),
            });
        }

        if self.shards == Some(0) {
            return Err(ConfigError::ValidationError(
                "harness.shards must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        let mut config = HarnessConfig::default();
        assert!(config.validate().is_ok());

        config.repetitions = 0;
        assert!(config.validate().is_err());

        config.repetitions = 5;
        config.shards = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_effective_shards() {
        let config = HarnessConfig {
            shards: Some(4),
            ..HarnessConfig::default()
        };
        assert_eq!(config.effective_shards(), 4);

        let config = HarnessConfig::default();
        assert!(config.effective_shards() >= 1);
    }
}
