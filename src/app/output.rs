//! CLI output formatting for fetch outcomes.

use std::io::Write;

use anyhow::{Context, Result};
use image_fetcher_core::{ErrorKind, FetchOutcome, status_reason};

pub const WELCOME_LINES: [&str; 2] = [
    "Welcome to the Image Fetcher",
    "A tool for mindfully collecting images from the web",
];

pub const START_LINE: &str = "--- Starting Download ---";

pub const CLOSING_LINE: &str = "Connection strengthened. Community enriched.";

/// Shown when neither the argument, stdin, nor the prompt produced a URL.
pub const NO_URL_GUIDANCE: &str =
    "No URL provided. Pass one as an argument, pipe it via stdin, or enter it at the prompt.";

pub fn print_welcome() {
    for line in WELCOME_LINES {
        println!("{line}");
    }
    println!();
}

/// Printed once a URL is known, just before fetching.
pub fn print_start() {
    println!("{START_LINE}");
    println!();
}

pub fn print_closing() {
    println!();
    println!("{CLOSING_LINE}");
}

/// Human-readable report lines for an outcome.
#[must_use]
pub fn outcome_lines(url: &str, outcome: &FetchOutcome) -> Vec<String> {
    match outcome {
        FetchOutcome::Saved { path, filename } => vec![
            format!("  ✓ Successfully fetched: {filename}"),
            format!("  ✓ Image saved to {}", path.display()),
        ],
        FetchOutcome::Failed {
            kind,
            detail,
            status,
        } => vec![failure_line(url, *kind, detail, *status)],
    }
}

fn failure_line(url: &str, kind: ErrorKind, detail: &str, status: Option<u16>) -> String {
    match kind {
        ErrorKind::HttpStatus => {
            let code = status.unwrap_or_default();
            format!("HTTP Error for {url}: {code} - {}", status_reason(code))
        }
        ErrorKind::Connection => {
            format!("Connection Error for {url}: Could not reach the server.")
        }
        ErrorKind::Timeout => {
            format!("Timeout Error for {url}: Request took too long to complete.")
        }
        ErrorKind::Request => format!("Request Error for {url}: {detail}"),
        ErrorKind::Filesystem => {
            format!("File System Error: Could not write file to disk. Details: {detail}")
        }
        ErrorKind::Unknown => format!("An unexpected error occurred: {detail}"),
    }
}

/// Prints the outcome: success lines on stdout, failure lines on stderr.
pub fn print_outcome(url: &str, outcome: &FetchOutcome) {
    let lines = outcome_lines(url, outcome);
    if outcome.is_saved() {
        for line in lines {
            println!("{line}");
        }
    } else {
        for line in lines {
            eprintln!("{line}");
        }
    }
}

/// Writes the outcome as a single JSON document.
pub fn write_outcome_json<W: Write>(writer: &mut W, outcome: &FetchOutcome) -> Result<()> {
    serde_json::to_writer(&mut *writer, outcome).context("Failed to serialize outcome")?;
    writeln!(writer).context("Failed to write outcome")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn failed(kind: ErrorKind, detail: &str, status: Option<u16>) -> FetchOutcome {
        FetchOutcome::Failed {
            kind,
            detail: detail.to_string(),
            status,
        }
    }

    #[test]
    fn test_saved_lines_name_file_and_path() {
        let outcome = FetchOutcome::Saved {
            path: PathBuf::from("Fetched_Images").join("cat.png"),
            filename: "cat.png".to_string(),
        };
        let lines = outcome_lines("https://example.com/cat.png", &outcome);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Successfully fetched: cat.png"));
        assert!(lines[1].contains("Image saved to"));
        assert!(lines[1].contains("cat.png"));
    }

    #[test]
    fn test_http_status_line_has_code_and_reason() {
        let lines = outcome_lines(
            "https://example.com/missing.png",
            &failed(ErrorKind::HttpStatus, "HTTP 404 Not Found", Some(404)),
        );
        assert_eq!(
            lines,
            vec!["HTTP Error for https://example.com/missing.png: 404 - Not Found"]
        );
    }

    #[test]
    fn test_http_status_line_without_canonical_reason() {
        let lines = outcome_lines(
            "https://example.com/odd.png",
            &failed(ErrorKind::HttpStatus, "HTTP 599 Unknown Status", Some(599)),
        );
        assert_eq!(
            lines,
            vec!["HTTP Error for https://example.com/odd.png: 599 - Unknown Status"]
        );
    }

    #[test]
    fn test_each_failure_kind_has_its_own_wording() {
        let url = "https://example.com/a.png";
        let cases = [
            (ErrorKind::Connection, "Connection Error"),
            (ErrorKind::Timeout, "Timeout Error"),
            (ErrorKind::Request, "Request Error"),
            (ErrorKind::Filesystem, "File System Error"),
            (ErrorKind::Unknown, "unexpected error"),
        ];
        for (kind, expected) in cases {
            let lines = outcome_lines(url, &failed(kind, "detail text", None));
            assert!(
                lines[0].contains(expected),
                "Expected '{expected}' in: {}",
                lines[0]
            );
        }
    }

    #[test]
    fn test_write_outcome_json_is_one_line() {
        let mut buffer = Vec::new();
        write_outcome_json(&mut buffer, &failed(ErrorKind::Timeout, "slow", None)).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["kind"], "timeout_error");
    }
}
