use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use image_fetcher_core::{FetchRequest, FetcherConfig, ResourceFetcher};
use tracing::{debug, info};

use crate::app::{exit_handler, input_processor, output, progress_manager, terminal};
use crate::cli::Args;
use crate::{ProcessExit, app_config};

pub(crate) async fn run_fetcher() -> Result<ProcessExit> {
    // Parse before tracing so --help and --version print without logs.
    let args = Args::parse();

    let file_config = app_config::load_default_file_config()?;
    let settings = app_config::resolve_settings(&args, file_config.as_ref());

    let dumb_terminal = terminal::is_dumb_terminal();
    let no_color = terminal::should_disable_color(
        args.no_color,
        terminal::no_color_env_requested(),
        dumb_terminal,
    );
    terminal::init_tracing(settings.log_level, settings.force_cli_log_level, no_color);
    debug!(?args, ?settings, "CLI arguments resolved");

    let show_text = !settings.quiet && !args.json;
    if show_text {
        output::print_welcome();
    }

    let Some(url) = input_processor::resolve_url(args.url.as_deref())? else {
        eprintln!("{}", output::NO_URL_GUIDANCE);
        return Ok(ProcessExit::InvalidInput);
    };

    if show_text {
        output::print_start();
    }

    let fetcher = ResourceFetcher::with_config(FetcherConfig::with_timeout(settings.timeout))?;
    let request = FetchRequest::new(url.clone()).with_target_directory(&settings.output_dir);
    info!(url = %url, dir = %settings.output_dir.display(), "Fetch starting");

    let use_spinner = terminal::should_use_spinner(
        io::stderr().is_terminal(),
        settings.quiet,
        args.json,
        dumb_terminal,
    );
    let spinner = progress_manager::start_spinner(use_spinner, &url);
    let outcome = fetcher.fetch(&request).await;
    progress_manager::finish_spinner(spinner);

    if args.json {
        output::write_outcome_json(&mut io::stdout().lock(), &outcome)?;
    } else {
        output::print_outcome(&url, &outcome);
    }

    if show_text {
        output::print_closing();
    }

    Ok(exit_handler::determine_exit_outcome(&outcome))
}
