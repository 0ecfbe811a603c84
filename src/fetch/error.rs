//! Error types for the fetch module.
//!
//! Every step of a fetch returns `Result<T, FetchError>`. At the
//! [`fetch`](super::ResourceFetcher::fetch) boundary the error is folded into a
//! [`FetchOutcome::Failed`] carrying its [`ErrorKind`].

use std::any::Any;
use std::path::PathBuf;

use thiserror::Error;

use super::outcome::{ErrorKind, FetchOutcome};

/// Errors that can stop a fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered with a 4xx or 5xx status. The body is discarded.
    #[error("HTTP {status} {reason} fetching {url}")]
    HttpStatus {
        url: String,
        status: u16,
        /// Canonical reason phrase for `status`.
        reason: String,
    },

    /// DNS resolution, refused connection, TLS handshake and similar.
    #[error("could not reach server for {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The request (or the body stream) exceeded the configured timeout.
    #[error("timeout fetching {url}")]
    Timeout { url: String },

    /// The request could not be built or sent as asked.
    #[error("invalid request for {url}: {reason}")]
    Request { url: String, reason: String },

    /// Creating the directory or writing the file failed.
    #[error("filesystem error at {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected error fetching {url}: {detail}")]
    Unknown { url: String, detail: String },
}

impl FetchError {
    pub fn http_status(url: impl Into<String>, status: u16, reason: impl Into<String>) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
            reason: reason.into(),
        }
    }

    pub fn connection(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Connection {
            url: url.into(),
            source,
        }
    }

    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    pub fn request(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Request {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    pub fn unknown(url: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Unknown {
            url: url.into(),
            detail: detail.into(),
        }
    }

    /// Classifies a transport error.
    ///
    /// Timeout is checked first: a connect attempt that runs out of time is a
    /// timeout, not a connection failure.
    pub fn from_reqwest(url: impl Into<String>, error: reqwest::Error) -> Self {
        let url = url.into();
        if error.is_timeout() {
            Self::timeout(url)
        } else if error.is_connect() {
            Self::connection(url, error)
        } else if error.is_builder()
            || error.is_request()
            || error.is_redirect()
            || error.is_body()
            || error.is_decode()
        {
            let reason = error_chain_message(&error);
            Self::request(url, reason)
        } else {
            let detail = error_chain_message(&error);
            Self::unknown(url, detail)
        }
    }

    /// Converts a panic payload caught inside the fetch pipeline.
    pub fn from_panic(url: impl Into<String>, payload: &(dyn Any + Send)) -> Self {
        let detail = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "fetch panicked".to_string());
        Self::unknown(url, detail)
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::HttpStatus { .. } => ErrorKind::HttpStatus,
            Self::Connection { .. } => ErrorKind::Connection,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Request { .. } => ErrorKind::Request,
            Self::Filesystem { .. } => ErrorKind::Filesystem,
            Self::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    /// Numeric HTTP status for [`FetchError::HttpStatus`].
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Folds this error into the caller-facing outcome.
    #[must_use]
    pub fn into_outcome(self) -> FetchOutcome {
        FetchOutcome::Failed {
            kind: self.kind(),
            status: self.status(),
            detail: self.to_string(),
        }
    }
}

/// Reason phrase reported for an HTTP status code.
///
/// The canonical phrase for `status`, or `"Unknown Status"` when it has none.
/// reqwest does not expose the phrase the server actually sent.
#[must_use]
pub fn status_reason(status: u16) -> &'static str {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown Status")
}

// reqwest's top-level Display hides the underlying cause ("error sending request").
fn error_chain_message(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reason_canonical_or_unknown() {
        assert_eq!(status_reason(404), "Not Found");
        assert_eq!(status_reason(503), "Service Unavailable");
        assert_eq!(status_reason(599), "Unknown Status");
        assert_eq!(status_reason(42), "Unknown Status");
    }

    #[test]
    fn test_http_status_display_and_outcome() {
        let error = FetchError::http_status("https://example.com/missing.png", 404, "Not Found");
        let msg = error.to_string();
        assert!(msg.contains("404"), "Expected status in: {msg}");
        assert!(msg.contains("Not Found"), "Expected reason in: {msg}");

        match error.into_outcome() {
            FetchOutcome::Failed {
                kind,
                status,
                detail,
            } => {
                assert_eq!(kind, ErrorKind::HttpStatus);
                assert_eq!(status, Some(404));
                assert!(detail.contains("missing.png"));
            }
            other => panic!("Expected Failed, got: {other:?}"),
        }
    }

    #[test]
    fn test_timeout_kind_has_no_status() {
        let error = FetchError::timeout("https://example.com/slow.png");
        assert_eq!(error.kind(), ErrorKind::Timeout);
        assert_eq!(error.status(), None);
        assert!(error.to_string().contains("timeout"));
    }

    #[test]
    fn test_filesystem_display_names_path() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error = FetchError::filesystem("/tmp/pics/cat.png", io_error);
        assert_eq!(error.kind(), ErrorKind::Filesystem);
        assert!(error.to_string().contains("/tmp/pics/cat.png"));
    }

    #[test]
    fn test_builder_failure_classified_as_request() {
        let build_error = reqwest::Client::new()
            .get("not a url at all")
            .build()
            .unwrap_err();
        let error = FetchError::from_reqwest("not a url at all", build_error);
        assert_eq!(error.kind(), ErrorKind::Request);
    }

    #[test]
    fn test_from_panic_reads_str_and_string_payloads() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        let error = FetchError::from_panic("https://example.com/a.png", payload.as_ref());
        assert_eq!(error.kind(), ErrorKind::Unknown);
        assert!(error.to_string().contains("boom"));

        let payload: Box<dyn Any + Send> = Box::new(String::from("owned boom"));
        let error = FetchError::from_panic("https://example.com/a.png", payload.as_ref());
        assert!(error.to_string().contains("owned boom"));

        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        let error = FetchError::from_panic("https://example.com/a.png", payload.as_ref());
        assert!(error.to_string().contains("fetch panicked"));
    }
}
