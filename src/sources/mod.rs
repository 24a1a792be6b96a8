//! Discovery source interfaces.
//!
//! Sources wrap the external URL-discovery tools (gau, urlfinder) as
//! opaque subprocesses: feed them a domain, collect line-delimited URLs
//! from stdout. A dead or timed-out source is the caller's problem to
//! absorb; this layer only reports it.

pub mod gau;
pub mod urlfinder;

use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;

// Re-export the concrete sources
pub use gau::GauSource;
pub use urlfinder::UrlFinderSource;

/// Trait for external URL-discovery tools
#[async_trait]
pub trait Source: Send + Sync {
    /// Human-readable source name
    fn name(&self) -> &str;

    /// Fetch candidate URLs for a domain.
    ///
    /// `bound` of `None` means unbounded execution.
    async fn fetch(&self, domain: &str, bound: Option<Duration>) -> Result<Vec<String>>;

    /// Check that the underlying tool is reachable without running a build
    async fn health_check(&self) -> Result<()>;
}

/// Spawn a discovery tool and collect its stdout as trimmed, non-empty lines.
pub(crate) async fn run_tool(
    binary: &str,
    args: &[&str],
    bound: Option<Duration>,
) -> Result<Vec<String>> {
    let child = Command::new(binary)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to spawn '{}' (is it installed and on PATH?)", binary))?;

    let output = match bound {
        Some(bound) => timeout(bound, child.wait_with_output())
            .await
            .map_err(|_| anyhow::anyhow!("'{}' timed out after {:?}", binary, bound))?,
        None => child.wait_with_output().await,
    }
    .with_context(|| format!("Failed to wait for '{}' process", binary))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let exit_code = output.status.code().unwrap_or(-1);
        anyhow::bail!(
            "'{}' failed with exit code {}: {}",
            binary,
            exit_code,
            stderr.trim()
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Run a tool's version/help flag and report whether it answered.
pub(crate) async fn check_tool(binary: &str, probe_arg: &str) -> Result<()> {
    let output = Command::new(binary)
        .arg(probe_arg)
        .stdin(Stdio::null())
        .output()
        .await
        .with_context(|| format!("Failed to run '{}' (is it installed and on PATH?)", binary))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("'{}' health check failed: {}", binary, stderr.trim());
    }

    Ok(())
}
