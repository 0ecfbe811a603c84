//! Exit code logic for the image-fetcher process.
//!
//! Single responsibility: map the fetch outcome to the process exit outcome.

use image_fetcher_core::FetchOutcome;

use crate::ProcessExit;

pub(crate) fn determine_exit_outcome(outcome: &FetchOutcome) -> ProcessExit {
    if outcome.is_saved() {
        ProcessExit::Success
    } else {
        ProcessExit::Failure
    }
}
