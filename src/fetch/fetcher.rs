//! The fetch-and-persist pipeline.
//!
//! [`ResourceFetcher::fetch`] runs one linear pass:
//!
//! ```text
//! Start → DirectoryEnsured → ResponseReceived → StatusValidated
//!       → FilenameResolved → Written → Saved
//! ```
//!
//! Any stage may stop with a [`FetchError`], which is folded into
//! [`FetchOutcome::Failed`] at the boundary. Nothing is retried.

use std::fmt;
use std::panic::AssertUnwindSafe;
use std::path::PathBuf;
use std::time::Duration;

use futures_util::{FutureExt, StreamExt};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::constants::DEFAULT_TIMEOUT_SECS;
use super::error::{FetchError, status_reason};
use super::filename::derive_filename;
use super::outcome::FetchOutcome;
use super::persist::write_atomically;
use super::request::FetchRequest;
use crate::user_agent;

/// Settings for a [`ResourceFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// Total time allowed for connecting, receiving headers and reading the body.
    pub timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FetcherConfig {
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

/// Position of a fetch in its linear state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    Start,
    DirectoryEnsured,
    ResponseReceived,
    StatusValidated,
    FilenameResolved,
    Written,
    Saved,
}

impl FetchStage {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::DirectoryEnsured => "directory_ensured",
            Self::ResponseReceived => "response_received",
            Self::StatusValidated => "status_validated",
            Self::FilenameResolved => "filename_resolved",
            Self::Written => "written",
            Self::Saved => "saved",
        }
    }
}

impl fmt::Display for FetchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fetches a single resource over HTTP and saves it to disk.
///
/// Holds no mutable state: one fetcher can serve any number of calls, and
/// clones share the underlying connection pool.
///
/// # Example
///
/// ```no_run
/// use image_fetcher_core::{FetchOutcome, FetchRequest, ResourceFetcher};
///
/// # async fn example() {
/// let fetcher = ResourceFetcher::new();
/// let request = FetchRequest::new("https://example.com/pics/cat.png");
/// match fetcher.fetch(&request).await {
///     FetchOutcome::Saved { path, .. } => println!("saved {}", path.display()),
///     FetchOutcome::Failed { kind, detail, .. } => eprintln!("{kind}: {detail}"),
/// }
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResourceFetcher {
    client: Client,
    config: FetcherConfig,
}

impl Default for ResourceFetcher {
    fn default() -> Self {
        Self::new()
    }
}

struct SavedFile {
    path: PathBuf,
    filename: String,
    bytes: u64,
}

impl ResourceFetcher {
    /// Creates a fetcher with the default 15 second timeout.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails with the static default
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self::with_config(FetcherConfig::default())
            .expect("failed to build HTTP client with static configuration")
    }

    /// Creates a fetcher with explicit settings.
    ///
    /// # Errors
    ///
    /// Returns the builder error if the HTTP client (TLS backend) cannot be
    /// initialized.
    pub fn with_config(config: FetcherConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .user_agent(user_agent::default_fetch_user_agent())
            .build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Fetches `request.url()` into `request.target_directory()`.
    ///
    /// Always returns an outcome; failures (including a panic inside the
    /// pipeline) are reported as [`FetchOutcome::Failed`].
    #[instrument(skip(self, request), fields(url = %request.url()))]
    pub async fn fetch(&self, request: &FetchRequest) -> FetchOutcome {
        let mut stage = FetchStage::Start;
        let result = AssertUnwindSafe(self.run(request, &mut stage))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| Err(FetchError::from_panic(request.url(), payload.as_ref())));

        match result {
            Ok(saved) => {
                info!(
                    path = %saved.path.display(),
                    bytes = saved.bytes,
                    "fetch complete"
                );
                FetchOutcome::Saved {
                    path: saved.path,
                    filename: saved.filename,
                }
            }
            Err(error) => {
                warn!(stage = %stage, kind = %error.kind(), error = %error, "fetch failed");
                error.into_outcome()
            }
        }
    }

    async fn run(
        &self,
        request: &FetchRequest,
        stage: &mut FetchStage,
    ) -> Result<SavedFile, FetchError> {
        let url = request.url();
        let directory = request.target_directory();

        tokio::fs::create_dir_all(directory)
            .await
            .map_err(|e| FetchError::filesystem(directory, e))?;
        advance(stage, FetchStage::DirectoryEnsured);

        if url.trim().is_empty() {
            return Err(FetchError::request(url, "URL must not be empty"));
        }
        let parsed_url = Url::parse(url).map_err(|e| FetchError::request(url, e.to_string()))?;

        let response = self
            .client
            .get(parsed_url.clone())
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;
        advance(stage, FetchStage::ResponseReceived);

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let reason = status_reason(status.as_u16());
            return Err(FetchError::http_status(url, status.as_u16(), reason));
        }
        advance(stage, FetchStage::StatusValidated);

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());
        let filename = derive_filename(&parsed_url, content_type);
        let path = directory.join(&filename);
        debug!(filename = %filename, path = %path.display(), "resolved output path");
        advance(stage, FetchStage::FilenameResolved);

        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| FetchError::from_reqwest(url, e)));
        let bytes = write_atomically(&path, body).await?;
        advance(stage, FetchStage::Written);

        advance(stage, FetchStage::Saved);
        Ok(SavedFile {
            path,
            filename,
            bytes,
        })
    }
}

fn advance(stage: &mut FetchStage, next: FetchStage) {
    debug!(from = %stage, to = %next, "fetch stage");
    *stage = next;
}
