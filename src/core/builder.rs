//! Dictionary build orchestration.
//!
//! Thin sequencing over the core stages: merge the per-source URL
//! lists, segment and filter each URL's path, then assemble and persist
//! the dictionary. The only logic here is the empty-result guards that
//! decide the overall verdict.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, instrument};

use super::assembler::write_dictionary;
use super::filter::ExtensionFilter;
use super::merger::merge_urls;
use super::segmenter::segment_url;

/// Terminal failures of a dictionary build.
///
/// Per-item problems (one malformed URL, one dead source) are absorbed
/// upstream; these are the aggregate outcomes that propagate to the
/// caller.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no URLs discovered for the target (all sources empty or failed)")]
    EmptyInput,

    #[error("every path segment was filtered out; nothing to write")]
    EmptyOutput,

    #[error("failed to write dictionary to {path}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Counts produced by a successful build.
#[derive(Debug, Clone, Copy)]
pub struct BuildStats {
    /// Unique URLs after merging all sources
    pub unique_urls: usize,

    /// Unique dictionary words written to the destination
    pub words_written: usize,
}

/// Run the full pipeline: merge, segment, filter, assemble.
///
/// Fails with [`BuildError::EmptyInput`] before touching the
/// destination when the merged URL set is empty, with
/// [`BuildError::EmptyOutput`] when filtering leaves nothing, and with
/// [`BuildError::Persistence`] when the final write fails.
#[instrument(skip(source_results, filter), fields(output = %output.display()))]
pub fn build_dictionary(
    source_results: Vec<Vec<String>>,
    filter: &ExtensionFilter,
    output: &Path,
) -> Result<BuildStats, BuildError> {
    let merged = merge_urls(source_results);
    if merged.is_empty() {
        return Err(BuildError::EmptyInput);
    }
    info!(urls = merged.len(), "Merged unique URLs");

    let mut words: HashSet<String> = HashSet::new();
    for url in &merged {
        for segment in segment_url(url) {
            if filter.keeps(&segment) {
                words.insert(segment);
            }
        }
    }
    if words.is_empty() {
        return Err(BuildError::EmptyOutput);
    }
    info!(segments = words.len(), "Segments surviving extension filter");

    let words_written = write_dictionary(&words, output).map_err(|source| {
        BuildError::Persistence {
            path: output.to_path_buf(),
            source,
        }
    })?;

    info!(words = words_written, output = %output.display(), "Dictionary written");

    Ok(BuildStats {
        unique_urls: merged.len(),
        words_written,
    })
}
