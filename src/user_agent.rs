//! User-Agent string sent with every fetch request.
//!
//! Kept in one place so the header stays stable across releases and tests.

/// Product token used at the start of the User-Agent header.
const PRODUCT_NAME: &str = "image-fetcher";

/// Fixed identifying User-Agent for fetch requests.
#[must_use]
pub(crate) fn default_fetch_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("{PRODUCT_NAME}/{version} (single-resource image fetcher)")
}
