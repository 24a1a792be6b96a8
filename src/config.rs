//! Configuration for dictforge.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (DICTFORGE_GAU_BIN, DICTFORGE_URLFINDER_BIN)
//! 2. Config file (.dictforge/config.yaml)
//! 3. Defaults (tools from PATH, stock extension table, no timeout)
//!
//! Config file discovery:
//! - DICTFORGE_CONFIG points at an explicit file, if set
//! - Otherwise searches current directory and parents for .dictforge/config.yaml
//! - Otherwise falls back to ~/.dictforge/config.yaml

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolsConfig {
    /// Path to the gau binary
    pub gau: Option<String>,
    /// Path to the urlfinder binary
    pub urlfinder: Option<String>,
    /// Default per-source timeout in seconds (0 = unbounded)
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterConfig {
    /// Extensions to filter in addition to the default table
    #[serde(default)]
    pub extra_extensions: Vec<String>,
    /// Extensions to remove from the default table
    #[serde(default)]
    pub allow_extensions: Vec<String>,
}

/// Resolved configuration with env overrides applied
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Binary to invoke for gau
    pub gau_bin: String,
    /// Binary to invoke for urlfinder
    pub urlfinder_bin: String,
    /// Default per-source timeout (None = unbounded)
    pub default_timeout: Option<Duration>,
    /// Extension table additions
    pub extra_extensions: Vec<String>,
    /// Extension table removals
    pub allow_extensions: Vec<String>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            gau_bin: "gau".to_string(),
            urlfinder_bin: "urlfinder".to_string(),
            default_timeout: None,
            extra_extensions: Vec::new(),
            allow_extensions: Vec::new(),
            config_file: None,
        }
    }
}

/// Find config file: explicit env path, then walk up from the current
/// directory, then the home directory fallback.
fn find_config_file() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var("DICTFORGE_CONFIG") {
        return Some(PathBuf::from(explicit));
    }

    let mut current = std::env::current_dir().ok()?;
    loop {
        let config_path = current.join(".dictforge").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let home_path = dirs::home_dir()?.join(".dictforge").join("config.yaml");
    if home_path.exists() {
        return Some(home_path);
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config_file = find_config_file();

    let mut resolved = ResolvedConfig::default();

    if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        if let Some(gau) = config.tools.gau {
            resolved.gau_bin = gau;
        }
        if let Some(urlfinder) = config.tools.urlfinder {
            resolved.urlfinder_bin = urlfinder;
        }
        resolved.default_timeout = match config.tools.timeout_seconds {
            Some(0) | None => None,
            Some(seconds) => Some(Duration::from_secs(seconds)),
        };
        resolved.extra_extensions = config.filter.extra_extensions;
        resolved.allow_extensions = config.filter.allow_extensions;
    }

    // Env vars beat the config file
    if let Ok(gau) = std::env::var("DICTFORGE_GAU_BIN") {
        resolved.gau_bin = gau;
    }
    if let Ok(urlfinder) = std::env::var("DICTFORGE_URLFINDER_BIN") {
        resolved.urlfinder_bin = urlfinder;
    }

    resolved.config_file = config_file;

    Ok(resolved)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
