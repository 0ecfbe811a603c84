//! Filename derivation for fetched resources.
//!
//! The URL's last path segment wins when it already looks like an image;
//! otherwise the response Content-Type picks one of a few fixed names.

use url::Url;

use super::constants::{
    FALLBACK_GIF_FILENAME, FALLBACK_JPEG_FILENAME, FALLBACK_PNG_FILENAME,
    FALLBACK_UNKNOWN_FILENAME, RECOGNIZED_IMAGE_EXTENSIONS,
};

/// Chooses the local filename for a response fetched from `url`.
///
/// Depends only on `url` and `content_type`, so repeated fetches of the same
/// resource land on the same path.
#[must_use]
pub fn derive_filename(url: &Url, content_type: Option<&str>) -> String {
    if let Some(segment) = last_path_segment(url)
        && has_recognized_extension(segment)
    {
        return segment.to_string();
    }
    filename_from_content_type(content_type.unwrap_or("")).to_string()
}

/// Last segment of the URL path, excluding query and fragment.
///
/// Kept verbatim (not percent-decoded). Returns `None` when empty, as for a
/// trailing slash or a URL that cannot be a base.
pub(crate) fn last_path_segment(url: &Url) -> Option<&str> {
    url.path_segments()?
        .next_back()
        .filter(|segment| !segment.is_empty())
}

/// True when the lowercase form of `name` ends with an accepted image extension.
pub(crate) fn has_recognized_extension(name: &str) -> bool {
    let lowered = name.to_lowercase();
    RECOGNIZED_IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lowered.ends_with(ext))
}

/// Maps a Content-Type header value to a fallback filename.
///
/// Case-insensitive substring match, checked in order jpeg/jpg, png, gif.
pub(crate) fn filename_from_content_type(content_type: &str) -> &'static str {
    let lowered = content_type.to_ascii_lowercase();
    if lowered.contains("jpeg") || lowered.contains("jpg") {
        FALLBACK_JPEG_FILENAME
    } else if lowered.contains("png") {
        FALLBACK_PNG_FILENAME
    } else if lowered.contains("gif") {
        FALLBACK_GIF_FILENAME
    } else {
        FALLBACK_UNKNOWN_FILENAME
    }
}
