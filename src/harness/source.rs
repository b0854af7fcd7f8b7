//! Text sources for the search harness.
//!
//! A source produces an immutable text blob or fails with a
//! [`SourceReadError`]. Matchers never see sources; the harness loads the
//! text once and lends it out.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SourceReadError;

/// Produces the text a search session runs over.
#[cfg_attr(test, mockall::automock)]
pub trait TextSource: Send + Sync {
    /// Human-readable name used in reports and errors.
    fn name(&self) -> String;

    /// Reads the whole text.
    fn load(&self) -> Result<Vec<u8>, SourceReadError>;
}

/// Text read from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source for the file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TextSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<u8>, SourceReadError> {
        let text = fs::read(&self.path).map_err(|e| SourceReadError::new(self.name(), e))?;
        debug!(source = %self.path.display(), bytes = text.len(), "loaded text source");
        Ok(text)
    }
}

/// Text held in memory.
#[derive(Debug, Clone)]
pub struct InlineSource {
    name: String,
    text: Vec<u8>,
}

impl InlineSource {
    /// Creates a named in-memory source.
    pub fn new<S: Into<String>, T: Into<Vec<u8>>>(name: S, text: T) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl TextSource for InlineSource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn load(&self) -> Result<Vec<u8>, SourceReadError> {
        Ok(self.text.clone())
    }
}
