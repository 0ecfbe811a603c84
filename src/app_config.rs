//! Application configuration loading for CLI defaults.
//!
//! Precedence: command line > config file > built-in defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use image_fetcher_core::{DEFAULT_TARGET_DIRECTORY, DEFAULT_TIMEOUT_SECS};
use serde::Deserialize;

use crate::cli::Args;

/// TOML-backed file configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default directory for fetched images.
    pub output_dir: Option<PathBuf>,
    /// Default total request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Default verbosity mode.
    pub verbosity: Option<VerbositySetting>,
}

impl FileConfig {
    /// Validates config values against the CLI constraints.
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout_secs
            && !(1..=3600).contains(&timeout)
        {
            bail!("Invalid config value for `timeout_secs`: {timeout}. Expected range: 1..=3600");
        }
        Ok(())
    }
}

/// Supported config verbosity labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbositySetting {
    Default,
    Verbose,
    Quiet,
    Debug,
}

/// Settings after merging command line, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub timeout: Duration,
    pub log_level: &'static str,
    /// True when verbosity came from the command line, which then beats `RUST_LOG`.
    pub force_cli_log_level: bool,
    pub quiet: bool,
}

/// Resolves default config path.
///
/// Priority:
/// 1. `$XDG_CONFIG_HOME/image-fetcher/config.toml`
/// 2. `$HOME/.config/image-fetcher/config.toml`
#[must_use]
pub fn resolve_default_config_path() -> Option<PathBuf> {
    if let Some(xdg_config_home) = env_var_non_empty_os("XDG_CONFIG_HOME") {
        return Some(
            PathBuf::from(xdg_config_home)
                .join("image-fetcher")
                .join("config.toml"),
        );
    }

    let home = env_var_non_empty_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("image-fetcher")
            .join("config.toml"),
    )
}

fn env_var_non_empty_os(name: &str) -> Option<std::ffi::OsString> {
    let value = env::var_os(name)?;
    if value.is_empty() { None } else { Some(value) }
}

/// Loads config from the default path if a file exists there.
pub fn load_default_file_config() -> Result<Option<FileConfig>> {
    match resolve_default_config_path() {
        Some(path) if path.exists() => load_file_config(&path).map(Some),
        _ => Ok(None),
    }
}

fn load_file_config(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    parse_config_str(&raw)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))
}

pub(crate) fn parse_config_str(raw: &str) -> Result<FileConfig> {
    let cfg: FileConfig = toml::from_str(raw)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Merges parsed arguments over the optional file config.
#[must_use]
pub fn resolve_settings(args: &Args, file_config: Option<&FileConfig>) -> Settings {
    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| file_config.and_then(|cfg| cfg.output_dir.clone()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET_DIRECTORY));

    let timeout_secs = args
        .timeout
        .or_else(|| file_config.and_then(|cfg| cfg.timeout_secs))
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let force_cli_log_level = args.quiet || args.verbose > 0;
    let file_verbosity = file_config.and_then(|cfg| cfg.verbosity);
    let (log_level, quiet) = if force_cli_log_level {
        (log_level_for_flags(args.quiet, args.verbose), args.quiet)
    } else {
        match file_verbosity {
            Some(VerbositySetting::Quiet) => ("error", true),
            Some(VerbositySetting::Verbose) => ("info", false),
            Some(VerbositySetting::Debug) => ("debug", false),
            Some(VerbositySetting::Default) | None => ("warn", false),
        }
    };

    Settings {
        output_dir,
        timeout: Duration::from_secs(timeout_secs),
        log_level,
        force_cli_log_level,
        quiet,
    }
}

fn log_level_for_flags(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
