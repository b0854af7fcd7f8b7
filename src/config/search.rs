//! Search configuration module.
//!
//! This module defines the matching semantics and algorithm parameters used
//! when the harness builds matchers.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::matchers::rabin_karp::{DEFAULT_PRIME, MAX_PRIME};
use crate::matchers::{Algorithm, MatchPolicy};
use serde::{Deserialize, Serialize};

/// Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Algorithm used when the caller does not name one
    pub default_algorithm: Algorithm,

    /// Modulus for the Rabin-Karp rolling hash
    pub rabin_karp_prime: u64,

    /// Fold ASCII case before preprocessing
    pub case_insensitive: bool,

    /// Only count matches delimited by word boundaries
    pub word_boundary: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_algorithm: Algorithm::Kmp,
            rabin_karp_prime: DEFAULT_PRIME,
            case_insensitive: false,
            word_boundary: false,
        }
    }
}

impl SearchConfig {
    /// The matching policy these settings describe.
    pub fn policy(&self) -> MatchPolicy {
        MatchPolicy::exact()
            .case_insensitive(self.case_insensitive)
            .word_boundary(self.word_boundary)
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !(2..=MAX_PRIME).contains(&self.rabin_karp_prime) {
            return Err(ConfigError::ValueOutOfRange {
                key: "search.rabin_karp_prime".to_string(),
                message: format!("must be between 2 and {MAX_PRIME}"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::CaseSensitivity;

    #[test]
    fn test_default_is_valid() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_prime_range() {
        let mut config = SearchConfig::default();
        config.rabin_karp_prime = 1;
        assert!(config.validate().is_err());

        config.rabin_karp_prime = MAX_PRIME;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_policy() {
        let config = SearchConfig {
            case_insensitive: true,
            word_boundary: true,
            ..SearchConfig::default()
        };
        let policy = config.policy();
        assert_eq!(policy.case, CaseSensitivity::AsciiInsensitive);
        assert!(policy.word_boundary);
    }
}
