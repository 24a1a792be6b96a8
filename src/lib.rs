//! dictforge - custom wordlist builder for recon
//!
//! Harvests historical and live URLs for a target domain from external
//! discovery tools, decomposes their paths into candidate
//! directory/file names, filters static-asset noise by extension, and
//! writes a deduplicated, sorted wordlist.
//!
//! # Architecture
//!
//! The core pipeline is a pure, single-pass transformation:
//! - Per-source URL lists are unioned with exact-string dedup
//! - Each URL's path is split into its non-empty segments
//! - File-like segments with a filtered extension are dropped
//! - Survivors are deduplicated, sorted, and written one per line
//!
//! Everything around it is orchestration glue: subprocess sources,
//! CLI, configuration, and reporting.
//!
//! # Modules
//!
//! - `sources`: external discovery tools (gau, urlfinder)
//! - `core`: the URL-to-wordlist pipeline
//! - `cli`: command-line interface
//! - `config`: config file and env resolution
//! - `report`: build summaries
//!
//! # Usage
//!
//! ```bash
//! # Build a wordlist
//! dictforge build example.com -o wordlist.txt
//!
//! # Bound each discovery tool to 120 seconds
//! dictforge build example.com -o wordlist.txt --timeout 120
//!
//! # Check that gau and urlfinder are installed
//! dictforge doctor
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod report;
pub mod sources;

// Re-export main types at crate root for convenience
pub use crate::core::{build_dictionary, BuildError, BuildStats, ExtensionFilter};
pub use report::{BuildReport, SourceCount};
pub use sources::{GauSource, Source, UrlFinderSource};
