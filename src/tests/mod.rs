//! Test modules for matchbench.
//!
//! This module contains the cross-component tests:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Harness runs over mocked and file-backed sources
//!
//! Per-algorithm tests live next to each matcher.


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    create_test_dir, pattern_strategy, small_alphabet_text, word_text_strategy, TestFixture,
};
