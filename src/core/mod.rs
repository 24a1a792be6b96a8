//! Core wordlist pipeline.
//!
//! This module contains:
//! - Merger: URL set union across discovery sources
//! - Segmenter: URL path decomposition into segments
//! - Filter: extension-based segment filtering
//! - Assembler: dedup, sort and persist the dictionary
//! - Builder: pipeline sequencing and the success/failure verdict

pub mod assembler;
pub mod builder;
pub mod filter;
pub mod merger;
pub mod segmenter;

// Re-export commonly used types
pub use assembler::write_dictionary;
pub use builder::{build_dictionary, BuildError, BuildStats};
pub use filter::ExtensionFilter;
pub use merger::merge_urls;
pub use segmenter::segment_url;
