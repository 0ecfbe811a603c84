//! Image Fetcher Core Library
//!
//! Fetches one remote resource over HTTP, validates the response, derives a
//! local filename and writes the bytes to disk, reporting a [`FetchOutcome`].
//!
//! # Architecture
//!
//! - [`fetch`] - the fetch-and-persist pipeline and its outcome types
//!
//! Prompting for a URL and presenting the outcome belong to the
//! `image-fetcher` binary, not this library.

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod fetch;
#[cfg(test)]
pub(crate) mod test_support;
pub(crate) mod user_agent;

// Re-export commonly used types
pub use fetch::{
    DEFAULT_TARGET_DIRECTORY, DEFAULT_TIMEOUT_SECS, ErrorKind, FetchError, FetchOutcome,
    FetchRequest, FetchStage, FetcherConfig, ResourceFetcher, derive_filename, status_reason,
};
