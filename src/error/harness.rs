//! Harness error module.
//!
//! This module defines error types that may occur while loading text and
//! driving matchers from the search harness.

use std::io;
use thiserror::Error;

use crate::matchers::{Algorithm, SearchError};

/// A text source could not be read.
///
/// Surfaced unchanged to the caller; the harness never retries.
#[derive(Error, Debug)]
#[error("Failed to read text source {source_name}: {source}")]
pub struct SourceReadError {
    /// Name of the source (usually a path)
    pub source_name: String,

    /// The underlying I/O failure
    #[source]
    pub source: io::Error,
}

impl SourceReadError {
    /// Wraps `source` with the name of the text source that failed.
    pub fn new<S: Into<String>>(source_name: S, source: io::Error) -> Self {
        Self {
            source_name: source_name.into(),
            source,
        }
    }
}

/// Errors that can occur during harness operations.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Error when preprocessing or scanning fails.
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    /// Error when the text cannot be loaded.
    #[error(transparent)]
    SourceRead(#[from] SourceReadError),

    /// Error when the regex baseline cannot compile its expression.
    #[error("Regex baseline error: {0}")]
    Regex(#[from] regex::Error),

    /// Error when a matcher's results depend on earlier matches and cannot be
    /// computed shard by shard.
    #[error("{0} reports non-overlapping matches and cannot be sharded")]
    ShardingUnsupported(Algorithm),
}
