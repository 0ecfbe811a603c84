//! The input value for a single fetch.

use std::path::{Path, PathBuf};

use super::constants::DEFAULT_TARGET_DIRECTORY;

/// One URL to fetch and the directory to save it in.
///
/// Fields are private; a request cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    url: String,
    target_directory: PathBuf,
}

impl FetchRequest {
    /// Creates a request that saves into [`DEFAULT_TARGET_DIRECTORY`].
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            target_directory: PathBuf::from(DEFAULT_TARGET_DIRECTORY),
        }
    }

    /// Returns a copy of this request targeting `directory` instead.
    #[must_use]
    pub fn with_target_directory(self, directory: impl Into<PathBuf>) -> Self {
        Self {
            url: self.url,
            target_directory: directory.into(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn target_directory(&self) -> &Path {
        &self.target_directory
    }
}
