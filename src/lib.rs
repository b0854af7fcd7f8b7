//! matchbench library
//!
//! This library contains exact substring matchers (KMP, Boyer-Moore,
//! Rabin-Karp, and a Wu-Manber style multi-pattern matcher), a regular
//! expression baseline, and the harness that times and compares them over a
//! text corpus. The library is used by the `matchbench` binary, but can also
//! be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - [`matchers`] preprocesses patterns into tables and scans borrowed text;
//!   it knows nothing about files, timing, or configuration sources.
//! - [`harness`] loads text, applies the matching policy around the
//!   matchers, shards scans across threads, and builds reports.
//! - [`config`] and [`error`] carry the layered configuration and the error
//!   taxonomy shared by both.

// Re-export public modules
pub mod config;
pub mod error;
pub mod harness;
pub mod matchers;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for matchbench.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
