//! Build reports.
//!
//! Summarizes a completed dictionary build: what each source
//! contributed, what survived merging and filtering, and where the
//! result was written.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// URLs contributed by one discovery source
#[derive(Debug, Clone, Serialize)]
pub struct SourceCount {
    /// Source name (e.g. "gau")
    pub name: String,

    /// Number of URLs the source returned (0 for skipped or failed sources)
    pub urls: usize,
}

/// Summary of a completed dictionary build
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    /// Target domain
    pub domain: String,

    /// Destination the dictionary was written to
    pub output: PathBuf,

    /// Per-source URL counts, in invocation order
    pub sources: Vec<SourceCount>,

    /// Unique URLs after merging all sources
    pub unique_urls: usize,

    /// Unique dictionary words written
    pub words_written: usize,

    /// When the build started
    pub started_at: DateTime<Utc>,

    /// When the build finished
    pub finished_at: DateTime<Utc>,
}

impl BuildReport {
    /// Wall-clock build duration in seconds
    pub fn duration_secs(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}
