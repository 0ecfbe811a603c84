//! Single-resource fetch: request, validate, name, and persist one URL.
//!
//! # Features
//!
//! - One GET per call with a fixed identifying User-Agent and a 15 second total timeout
//! - 4xx/5xx responses stop the fetch before anything is written
//! - Filename from the URL when it ends in `.jpg`, `.jpeg`, `.png` or `.gif`,
//!   otherwise from the Content-Type header
//! - Atomic write through a `.part` file renamed into place
//! - A closed [`ErrorKind`] on every failure; `fetch` itself never errors
//!
//! # Example
//!
//! ```no_run
//! use image_fetcher_core::fetch::{FetchRequest, ResourceFetcher};
//!
//! # async fn example() {
//! let fetcher = ResourceFetcher::new();
//! let request = FetchRequest::new("https://example.com/pics/cat.png")
//!     .with_target_directory("./pictures");
//! let outcome = fetcher.fetch(&request).await;
//! println!("{outcome:?}");
//! # }
//! ```

mod constants;
mod error;
mod fetcher;
mod filename;
mod outcome;
mod persist;
mod request;

pub use constants::{
    DEFAULT_TARGET_DIRECTORY, DEFAULT_TIMEOUT_SECS, PART_FILE_SUFFIX, RECOGNIZED_IMAGE_EXTENSIONS,
};
pub use error::{FetchError, status_reason};
pub use fetcher::{FetchStage, FetcherConfig, ResourceFetcher};
pub use filename::derive_filename;
pub use outcome::{ErrorKind, FetchOutcome};
pub use request::FetchRequest;
