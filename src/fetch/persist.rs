//! Atomic persistence of a response body.
//!
//! Each call streams the body into its own uniquely named part file in the
//! destination's directory, flushes and syncs it, and only then renames it
//! over the destination. On failure the part file is removed, so the
//! destination never holds a truncated body. Concurrent calls for the same
//! destination never share a part file; the last rename wins.

use std::path::Path;

use futures_util::{Stream, StreamExt};
use tempfile::TempPath;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::debug;

use super::constants::{PART_FILE_PREFIX, PART_FILE_SUFFIX};
use super::error::FetchError;

/// Directory that holds the part file for `destination`.
fn part_directory(destination: &Path) -> &Path {
    match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Creates a fresh part file next to `destination`.
///
/// The name is short and random, independent of the destination's length.
fn create_part_file(destination: &Path) -> Result<(File, TempPath), FetchError> {
    let directory = part_directory(destination);
    let mut builder = tempfile::Builder::new();
    builder.prefix(PART_FILE_PREFIX).suffix(PART_FILE_SUFFIX);
    // Same mode a plain create would give (0666 minus umask), not 0600.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let temp_file = builder
        .tempfile_in(directory)
        .map_err(|e| FetchError::filesystem(directory, e))?;
    let (file, temp_path) = temp_file.into_parts();
    Ok((File::from_std(file), temp_path))
}

/// Writes every chunk of `body` to `destination`, replacing any existing file.
///
/// Returns the number of bytes written. Errors from `body` are returned as-is;
/// I/O errors become [`FetchError::Filesystem`].
pub(crate) async fn write_atomically<S, B>(destination: &Path, body: S) -> Result<u64, FetchError>
where
    S: Stream<Item = Result<B, FetchError>>,
    B: AsRef<[u8]>,
{
    let (file, temp_path) = create_part_file(destination)?;
    debug!(path = %temp_path.display(), "writing part file");

    // Dropping `temp_path` on any early return deletes the part file.
    let bytes_written = match write_part_file(&temp_path, file, body).await {
        Ok(bytes) => bytes,
        Err(error) => {
            debug!(path = %temp_path.display(), "removing part file after error");
            return Err(error);
        }
    };

    temp_path.persist(destination).map_err(|e| {
        debug!(path = %e.path.display(), "removing part file after failed rename");
        FetchError::filesystem(destination, e.error)
    })?;

    Ok(bytes_written)
}

/// Streams `body` into `file`. The handle is closed on return.
async fn write_part_file<S, B>(temp_path: &Path, file: File, body: S) -> Result<u64, FetchError>
where
    S: Stream<Item = Result<B, FetchError>>,
    B: AsRef<[u8]>,
{
    let mut writer = BufWriter::new(file);
    let mut body = std::pin::pin!(body);
    let mut bytes_written: u64 = 0;

    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        let bytes = chunk.as_ref();
        writer
            .write_all(bytes)
            .await
            .map_err(|e| FetchError::filesystem(temp_path, e))?;
        bytes_written += bytes.len() as u64;
    }

    writer
        .flush()
        .await
        .map_err(|e| FetchError::filesystem(temp_path, e))?;
    writer
        .get_ref()
        .sync_all()
        .await
        .map_err(|e| FetchError::filesystem(temp_path, e))?;

    Ok(bytes_written)
}
