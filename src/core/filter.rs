//! Extension-based segment filtering.
//!
//! Segments that look like static assets (images, scripts, fonts,
//! archives, office documents, media) carry no dictionary value and are
//! dropped. Classification is structural: a segment without a dot is
//! directory-like and always kept; a dotted segment is judged by the
//! substring after its last dot.

use std::collections::HashSet;

/// Default set of extensions treated as static-asset noise.
const DEFAULT_FILTERED_EXTENSIONS: &[&str] = &[
    "js", "gif", "jpg", "jpeg", "png", "css", "ttf", "woff", "woff2", "svg", "pdf", "ico", "webp",
    "mp4", "mp3", "avi", "mov", "zip", "rar", "tar", "gz", "bz2", "exe", "dmg", "iso", "doc",
    "docx", "xls", "xlsx", "ppt", "pptx",
];

/// Decides which path segments survive into the dictionary.
///
/// The table is fixed at construction; the filter itself is stateless
/// and deterministic.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    extensions: HashSet<String>,
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtensionFilter {
    /// Create a filter with the default extension table.
    pub fn new() -> Self {
        Self {
            extensions: DEFAULT_FILTERED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }

    /// Create a filter with the default table plus `extra` entries and
    /// minus `allow` entries (both compared case-insensitively).
    pub fn with_rules(extra: &[String], allow: &[String]) -> Self {
        let mut filter = Self::new();
        for ext in extra {
            filter.extensions.insert(ext.to_ascii_lowercase());
        }
        for ext in allow {
            filter.extensions.remove(&ext.to_ascii_lowercase());
        }
        filter
    }

    /// Whether a segment survives filtering.
    ///
    /// Directory-like segments (no dot) are always kept. File-like
    /// segments are kept unless the lower-cased text after the last dot
    /// is in the table.
    pub fn keeps(&self, segment: &str) -> bool {
        match segment.rsplit_once('.') {
            Some((_, ext)) => !self.extensions.contains(&ext.to_ascii_lowercase()),
            None => true,
        }
    }

    /// The effective table, sorted, for display.
    pub fn table(&self) -> Vec<&str> {
        let mut entries: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
        entries.sort_unstable();
        entries
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_segments_always_kept() {
        let filter = ExtensionFilter::new();
        assert!(filter.keeps("api"));
        assert!(filter.keeps("v1"));
        assert!(filter.keeps("admin-panel"));
    }

    #[test]
    fn test_filtered_extensions_dropped() {
        let filter = ExtensionFilter::new();
        assert!(!filter.keeps("logo.png"));
        assert!(!filter.keeps("app.js"));
        assert!(!filter.keeps("style.css"));
        assert!(!filter.keeps("report.pdf"));
    }

    #[test]
    fn test_unfiltered_extensions_kept() {
        let filter = ExtensionFilter::new();
        assert!(filter.keeps("users.json"));
        assert!(filter.keeps("config.php"));
        assert!(filter.keeps("backup.sql"));
    }

    #[test]
    fn test_extension_lookup_is_case_insensitive() {
        let filter = ExtensionFilter::new();
        assert!(!filter.keeps("LOGO.PNG"));
        assert!(!filter.keeps("archive.Zip"));
    }

    #[test]
    fn test_multi_dot_judged_by_last_extension() {
        let filter = ExtensionFilter::new();
        // tar.gz -> judged by "gz", which is filtered
        assert!(!filter.keeps("archive.tar.gz"));
        // jquery.min.js -> judged by "js"
        assert!(!filter.keeps("jquery.min.js"));
        // v1.2.json -> judged by "json", which is kept
        assert!(filter.keeps("v1.2.json"));
    }

    #[test]
    fn test_trailing_dot_is_kept() {
        let filter = ExtensionFilter::new();
        // Empty extension never matches the table
        assert!(filter.keeps("weird."));
    }

    #[test]
    fn test_rules_extend_and_relax_the_table() {
        let filter =
            ExtensionFilter::with_rules(&["map".to_string()], &["pdf".to_string()]);
        assert!(!filter.keeps("app.js.map"));
        assert!(filter.keeps("report.pdf"));
        assert!(!filter.keeps("logo.png"));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = ExtensionFilter::new();
        let segments = ["api", "logo.png", "users.json", "archive.tar.gz"];

        let first: Vec<&str> = segments.iter().copied().filter(|s| filter.keeps(s)).collect();
        let second: Vec<&str> = first.iter().copied().filter(|s| filter.keeps(s)).collect();

        assert_eq!(first, second);
    }
}
