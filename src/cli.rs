//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Fetch a single image over HTTP and save it locally.
///
/// The URL is taken from the first argument, from piped stdin, or asked for
/// interactively. The file lands in `Fetched_Images/` unless told otherwise.
#[derive(Parser, Debug)]
#[command(name = "image-fetcher")]
#[command(author, version, about)]
pub struct Args {
    /// Image URL to fetch (prompted for when omitted)
    pub url: Option<String>,

    /// Directory to save the image in [default: Fetched_Images]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Total request timeout in seconds (1-3600) [default: 15]
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub timeout: Option<u64>,

    /// Print the outcome as JSON on stdout instead of text
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress banner and non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored log output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_args_parses_successfully() {
        let args = Args::try_parse_from(["image-fetcher"]).unwrap();
        assert!(args.url.is_none());
        assert!(args.output_dir.is_none());
        assert!(args.timeout.is_none());
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
        assert!(!args.json);
    }

    #[test]
    fn test_cli_positional_url() {
        let args =
            Args::try_parse_from(["image-fetcher", "https://example.com/cat.png"]).unwrap();
        assert_eq!(args.url.as_deref(), Some("https://example.com/cat.png"));
    }

    #[test]
    fn test_cli_output_dir_short_and_long() {
        let args = Args::try_parse_from(["image-fetcher", "-o", "pics"]).unwrap();
        assert_eq!(args.output_dir, Some(PathBuf::from("pics")));

        let args = Args::try_parse_from(["image-fetcher", "--output-dir", "/tmp/x"]).unwrap();
        assert_eq!(args.output_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["image-fetcher", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["image-fetcher", "-q", "-v"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_cli_timeout_range() {
        let args = Args::try_parse_from(["image-fetcher", "-t", "1"]).unwrap();
        assert_eq!(args.timeout, Some(1));
        let args = Args::try_parse_from(["image-fetcher", "--timeout", "3600"]).unwrap();
        assert_eq!(args.timeout, Some(3600));

        for bad in ["0", "3601"] {
            let err = Args::try_parse_from(["image-fetcher", "-t", bad]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        }
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let err = Args::try_parse_from(["image-fetcher", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let err = Args::try_parse_from(["image-fetcher", "--invalid-flag"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
