//! gau discovery source.
//!
//! Wraps [gau](https://github.com/lc/gau): fetches known URLs for a
//! domain (and its subdomains) from web archives.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use super::{check_tool, run_tool, Source};

/// Install hint shown by `dictforge doctor` when gau is missing.
pub const GAU_INSTALL_HINT: &str = "go install github.com/lc/gau/v2/cmd/gau@latest";

/// Historical-archive URL source backed by the `gau` binary
pub struct GauSource {
    /// Path to the gau binary (default: "gau")
    binary_path: String,
}

impl Default for GauSource {
    fn default() -> Self {
        Self::new()
    }
}

impl GauSource {
    /// Create a gau source using the binary from PATH
    pub fn new() -> Self {
        Self {
            binary_path: "gau".to_string(),
        }
    }

    /// Create a gau source with a custom binary path
    pub fn with_binary_path(binary_path: impl Into<String>) -> Self {
        Self {
            binary_path: binary_path.into(),
        }
    }
}

#[async_trait]
impl Source for GauSource {
    fn name(&self) -> &str {
        "gau"
    }

    async fn fetch(&self, domain: &str, bound: Option<Duration>) -> Result<Vec<String>> {
        run_tool(&self.binary_path, &["--subs", domain], bound).await
    }

    async fn health_check(&self) -> Result<()> {
        check_tool(&self.binary_path, "--version").await
    }
}
