//! Obtains the one URL to fetch: argument, piped stdin, or interactive prompt.

use std::io::{self, BufRead, IsTerminal, Read, Write};

use anyhow::{Context, Result};

/// Text shown when asking for a URL interactively.
pub(crate) const URL_PROMPT: &str = "Please enter the image URL: ";

/// Returns the URL to fetch, or `None` when no non-blank URL was supplied.
pub(crate) fn resolve_url(arg_url: Option<&str>) -> Result<Option<String>> {
    if let Some(url) = arg_url {
        return Ok(non_blank(url));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        let mut stdout = io::stdout();
        prompt_for_url(&mut stdin.lock(), &mut stdout)
    } else {
        let mut buffer = String::new();
        stdin
            .lock()
            .read_to_string(&mut buffer)
            .context("Failed to read URL from stdin")?;
        Ok(first_non_blank_line(&buffer))
    }
}

pub(crate) fn prompt_for_url<R, W>(reader: &mut R, writer: &mut W) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{URL_PROMPT}").context("Failed to write prompt")?;
    writer.flush().context("Failed to write prompt")?;

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read URL from terminal")?;
    Ok(non_blank(&line))
}

pub(crate) fn first_non_blank_line(text: &str) -> Option<String> {
    text.lines().find_map(non_blank)
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
