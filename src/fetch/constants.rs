//! Constants for the fetch module (defaults, filename rules).

/// Directory used when a request does not name one.
pub const DEFAULT_TARGET_DIRECTORY: &str = "Fetched_Images";

/// Total request timeout (connect + headers + body), in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// URL filename extensions accepted without consulting Content-Type.
pub const RECOGNIZED_IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif"];

pub(crate) const FALLBACK_JPEG_FILENAME: &str = "downloaded_image.jpg";
pub(crate) const FALLBACK_PNG_FILENAME: &str = "downloaded_image.png";
pub(crate) const FALLBACK_GIF_FILENAME: &str = "downloaded_image.gif";
pub(crate) const FALLBACK_UNKNOWN_FILENAME: &str = "downloaded_image_unknown";

/// Suffix of the temporary file that is renamed into place once complete.
pub const PART_FILE_SUFFIX: &str = ".part";

/// Prefix of that temporary file; a random component follows it.
pub(crate) const PART_FILE_PREFIX: &str = ".fetch-";
