//! urlfinder discovery source.
//!
//! Wraps ProjectDiscovery's
//! [urlfinder](https://github.com/projectdiscovery/urlfinder): passive
//! URL enumeration across multiple providers.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use super::{check_tool, run_tool, Source};

/// Install hint shown by `dictforge doctor` when urlfinder is missing.
pub const URLFINDER_INSTALL_HINT: &str =
    "go install -v github.com/projectdiscovery/urlfinder/cmd/urlfinder@latest";

/// Passive-enumeration URL source backed by the `urlfinder` binary
pub struct UrlFinderSource {
    /// Path to the urlfinder binary (default: "urlfinder")
    binary_path: String,
}

impl Default for UrlFinderSource {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlFinderSource {
    /// Create a urlfinder source using the binary from PATH
    pub fn new() -> Self {
        Self {
            binary_path: "urlfinder".to_string(),
        }
    }

    /// Create a urlfinder source with a custom binary path
    pub fn with_binary_path(binary_path: impl Into<String>) -> Self {
        Self {
            binary_path: binary_path.into(),
        }
    }
}

#[async_trait]
impl Source for UrlFinderSource {
    fn name(&self) -> &str {
        "urlfinder"
    }

    async fn fetch(&self, domain: &str, bound: Option<Duration>) -> Result<Vec<String>> {
        run_tool(&self.binary_path, &["-all", "-silent", "-d", domain], bound).await
    }

    async fn health_check(&self) -> Result<()> {
        check_tool(&self.binary_path, "-version").await
    }
}
