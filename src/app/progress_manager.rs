//! Spinner shown on stderr while a fetch is in flight.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use url::Url;

/// Starts a spinner when requested. indicatif ticks it from its own thread,
/// so the fetch future needs no cooperation.
pub(crate) fn start_spinner(use_spinner: bool, url: &str) -> Option<ProgressBar> {
    if !use_spinner {
        return None;
    }
    let host = Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(std::string::ToString::to_string))
        .unwrap_or_else(|| "server".to_string());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Fetching from {host}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

pub(crate) fn finish_spinner(spinner: Option<ProgressBar>) {
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_spinner_when_disabled_returns_none() {
        assert!(start_spinner(false, "https://example.com/cat.png").is_none());
    }

    #[test]
    fn test_start_spinner_when_enabled_names_host() {
        let spinner = start_spinner(true, "https://example.com/cat.png").unwrap();
        assert_eq!(spinner.message(), "Fetching from example.com...");
        finish_spinner(Some(spinner));
    }

    #[test]
    fn test_start_spinner_tolerates_unparseable_url() {
        let spinner = start_spinner(true, "not a url").unwrap();
        assert_eq!(spinner.message(), "Fetching from server...");
        finish_spinner(Some(spinner));
    }
}
