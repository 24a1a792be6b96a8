//! URL path segmentation.
//!
//! Decomposes a URL's path into its constituent segments: every
//! non-empty component between slashes, intermediates included, so a
//! parent directory surfaces even when its leaf is later filtered out
//! as a static asset. Segments are kept raw (post-parse,
//! pre-percent-decode).

use tracing::warn;
use url::Url;

/// Extract candidate dictionary segments from one URL.
///
/// URLs without an `http://` or `https://` prefix are rejected
/// silently; a URL that fails structural parsing is logged and skipped.
/// Root or empty paths produce nothing. Query string and fragment are
/// never part of the path.
pub fn segment_url(raw: &str) -> Vec<String> {
    if !raw.starts_with("http://") && !raw.starts_with("https://") {
        return Vec::new();
    }

    let parsed = match Url::parse(raw) {
        Ok(url) => url,
        Err(error) => {
            warn!(url = raw, %error, "Skipping unparseable URL");
            return Vec::new();
        }
    };

    match parsed.path_segments() {
        Some(segments) => segments
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}
