//! Terminal results of a fetch.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Closed classification of fetch failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// Server answered with a 4xx or 5xx status.
    #[serde(rename = "http_status_error")]
    HttpStatus,
    /// The host could not be reached.
    #[serde(rename = "connection_error")]
    Connection,
    /// The request did not finish within the timeout.
    #[serde(rename = "timeout_error")]
    Timeout,
    /// The request could not be built or sent (malformed URL and similar).
    #[serde(rename = "request_error")]
    Request,
    /// The directory or file could not be created or written.
    #[serde(rename = "filesystem_error")]
    Filesystem,
    /// Anything the other kinds do not cover.
    #[serde(rename = "unknown_error")]
    Unknown,
}

impl ErrorKind {
    /// Stable label, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HttpStatus => "http_status_error",
            Self::Connection => "connection_error",
            Self::Timeout => "timeout_error",
            Self::Request => "request_error",
            Self::Filesystem => "filesystem_error",
            Self::Unknown => "unknown_error",
        }
    }

    /// Whether repeating the same request unchanged may succeed.
    ///
    /// `Request` and `Filesystem` need the input or environment fixed first;
    /// `Unknown` is treated as non-retryable.
    #[must_use]
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::HttpStatus | Self::Connection | Self::Timeout)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one [`fetch`](super::ResourceFetcher::fetch) call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FetchOutcome {
    /// The body was fully written and moved to `path`.
    Saved {
        /// Full destination path (`target_directory/filename`).
        path: PathBuf,
        /// The filename component of `path`.
        filename: String,
    },
    /// The fetch stopped at the first failure.
    Failed {
        kind: ErrorKind,
        /// Human-readable description of the failure.
        detail: String,
        /// Numeric HTTP status, present only for [`ErrorKind::HttpStatus`].
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<u16>,
    },
}

impl FetchOutcome {
    #[must_use]
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }

    /// The failure kind, or `None` for a saved outcome.
    #[must_use]
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Saved { .. } => None,
            Self::Failed { kind, .. } => Some(*kind),
        }
    }

    /// The saved filename, or `None` for a failed outcome.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        match self {
            Self::Saved { filename, .. } => Some(filename),
            Self::Failed { .. } => None,
        }
    }
}
