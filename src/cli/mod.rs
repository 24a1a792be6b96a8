//! Command-line interface for dictforge.
//!
//! Provides commands for building a wordlist from a target domain,
//! checking that the external discovery tools are reachable, and
//! inspecting the effective filter table and configuration.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::config;
use crate::core::{build_dictionary, ExtensionFilter};
use crate::report::{BuildReport, SourceCount};
use crate::sources::{
    gau::GAU_INSTALL_HINT, urlfinder::URLFINDER_INSTALL_HINT, GauSource, Source, UrlFinderSource,
};

/// dictforge - custom wordlist builder for recon
#[derive(Parser, Debug)]
#[command(name = "dictforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a wordlist for a target domain
    Build {
        /// Target domain (e.g. example.com)
        domain: String,

        /// Output file for the wordlist
        #[arg(short, long)]
        output: PathBuf,

        /// Per-source timeout in seconds (unbounded if not set)
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Skip the gau (archive) source
        #[arg(long)]
        skip_gau: bool,

        /// Skip the urlfinder (passive enumeration) source
        #[arg(long)]
        skip_urlfinder: bool,

        /// Print the build report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify the external discovery tools are reachable
    Doctor,

    /// Print the effective extension filter table
    Extensions,

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Build {
                domain,
                output,
                timeout,
                skip_gau,
                skip_urlfinder,
                json,
            } => run_build(&domain, &output, timeout, skip_gau, skip_urlfinder, json).await,
            Commands::Doctor => run_doctor().await,
            Commands::Extensions => show_extensions(),
            Commands::Config => show_config(),
        }
    }
}

/// Build a wordlist for a domain
async fn run_build(
    domain: &str,
    output: &PathBuf,
    timeout: Option<u64>,
    skip_gau: bool,
    skip_urlfinder: bool,
    json: bool,
) -> Result<()> {
    if skip_gau && skip_urlfinder {
        anyhow::bail!(
            "--skip-gau and --skip-urlfinder cannot be combined: at least one discovery source is required"
        );
    }

    let domain = domain.trim();
    if domain.is_empty() {
        anyhow::bail!("Target domain cannot be empty");
    }

    let cfg = config::config()?;
    let bound = timeout.map(Duration::from_secs).or(cfg.default_timeout);
    let started_at = Utc::now();

    let mut sources: Vec<Box<dyn Source>> = Vec::new();
    if !skip_gau {
        sources.push(Box::new(GauSource::with_binary_path(&cfg.gau_bin)));
    }
    if !skip_urlfinder {
        sources.push(Box::new(UrlFinderSource::with_binary_path(
            &cfg.urlfinder_bin,
        )));
    }

    // A dead source contributes an empty list; only the combined empty
    // result is fatal.
    let mut source_counts = Vec::new();
    let mut results = Vec::new();
    for source in &sources {
        info!(source = source.name(), %domain, "Running discovery source");
        let urls = match source.fetch(domain, bound).await {
            Ok(urls) => {
                info!(source = source.name(), urls = urls.len(), "Source finished");
                urls
            }
            Err(e) => {
                warn!(
                    source = source.name(),
                    error = %e,
                    "Source failed, continuing without it"
                );
                Vec::new()
            }
        };
        source_counts.push(SourceCount {
            name: source.name().to_string(),
            urls: urls.len(),
        });
        results.push(urls);
    }

    let filter = ExtensionFilter::with_rules(&cfg.extra_extensions, &cfg.allow_extensions);
    let stats = build_dictionary(results, &filter, output)?;

    let report = BuildReport {
        domain: domain.to_string(),
        output: output.clone(),
        sources: source_counts,
        unique_urls: stats.unique_urls,
        words_written: stats.words_written,
        started_at,
        finished_at: Utc::now(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for source in &report.sources {
            eprintln!("[+] {} contributed {} URLs", source.name, source.urls);
        }
        eprintln!("[+] {} unique URLs after merge", report.unique_urls);
        eprintln!(
            "[+] Wordlist written to {} ({} unique words, {}s)",
            report.output.display(),
            report.words_written,
            report.duration_secs()
        );
    }

    Ok(())
}

/// Check that both discovery tools answer their version probe
async fn run_doctor() -> Result<()> {
    let cfg = config::config()?;

    let checks: Vec<(Box<dyn Source>, &str)> = vec![
        (
            Box::new(GauSource::with_binary_path(&cfg.gau_bin)),
            GAU_INSTALL_HINT,
        ),
        (
            Box::new(UrlFinderSource::with_binary_path(&cfg.urlfinder_bin)),
            URLFINDER_INSTALL_HINT,
        ),
    ];

    let mut unreachable = 0;
    for (source, hint) in &checks {
        match source.health_check().await {
            Ok(()) => println!("{:<12} ok", source.name()),
            Err(e) => {
                println!("{:<12} unavailable: {:#}", source.name(), e);
                println!("{:<12} install: {}", "", hint);
                unreachable += 1;
            }
        }
    }

    if unreachable > 0 {
        anyhow::bail!("{} discovery tool(s) unreachable", unreachable);
    }

    Ok(())
}

/// Print the effective extension filter table, one entry per line
fn show_extensions() -> Result<()> {
    let cfg = config::config()?;
    let filter = ExtensionFilter::with_rules(&cfg.extra_extensions, &cfg.allow_extensions);

    for extension in filter.table() {
        println!("{}", extension);
    }

    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = config::config()?;
    let filter = ExtensionFilter::with_rules(&cfg.extra_extensions, &cfg.allow_extensions);

    println!("dictforge configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Tools:");
    println!("  gau:       {}", cfg.gau_bin);
    println!("  urlfinder: {}", cfg.urlfinder_bin);
    println!(
        "  timeout:   {}",
        cfg.default_timeout
            .map(|t| format!("{}s", t.as_secs()))
            .unwrap_or_else(|| "unbounded".to_string())
    );
    println!();
    println!("Filter:");
    println!("  table entries:    {}", filter.len());
    println!("  extra extensions: {:?}", cfg.extra_extensions);
    println!("  allowed back:     {:?}", cfg.allow_extensions);

    Ok(())
}
