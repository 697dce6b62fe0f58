//! Command-line interface for storefront-sitemap.
//!
//! Provides commands for dumping the entries of a catalog snapshot,
//! showing the resolved configuration and validating snapshots.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::adapters::EntryCollector;
use crate::catalog::Catalog;
use crate::config::{self, ContentIntegration, SitemapConfig};
use crate::core::EntryAssembler;
use crate::domain::{EntryOptions, SitemapEntry};

/// storefront-sitemap - Sitemap entries for storefront catalogs
#[derive(Parser, Debug)]
#[command(name = "storefront-sitemap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (searched for in .storefront-sitemap/ if not provided)
    #[arg(long, global = true, env = "STOREFRONT_SITEMAP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the sitemap entries of one store
    Generate {
        /// Catalog snapshot (.json, .yaml or .yml)
        #[arg(short, long)]
        catalog: PathBuf,

        /// Store code
        #[arg(short, long)]
        store: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Change frequency attached to every entry
        #[arg(long)]
        changefreq: Option<String>,

        /// Priority attached to every entry
        #[arg(long)]
        priority: Option<f32>,
    },

    /// Show resolved configuration (debug)
    Config,

    /// Validate a catalog snapshot against the configuration
    Check {
        /// Catalog snapshot (.json, .yaml or .yml)
        #[arg(short, long)]
        catalog: PathBuf,
    },
}

/// Entry dump format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    Json,

    /// Aligned columns
    Table,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let cfg = match &self.config {
            Some(path) => config::load_config_from(path)?,
            None => config::config()?.clone(),
        };

        match self.command {
            Commands::Generate {
                catalog,
                store,
                format,
                changefreq,
                priority,
            } => {
                let options = EntryOptions {
                    changefreq,
                    priority,
                    ..Default::default()
                };
                generate(&cfg, &catalog, &store, format, &options)
            }
            Commands::Config => show_config(&cfg),
            Commands::Check { catalog } => check(&cfg, &catalog),
        }
    }
}

/// Assemble and print every entry of a store
fn generate(
    cfg: &SitemapConfig,
    catalog_path: &Path,
    store_code: &str,
    format: OutputFormat,
    options: &EntryOptions,
) -> Result<()> {
    let catalog = Catalog::from_file(catalog_path)?;
    catalog
        .validate()
        .with_context(|| format!("Invalid catalog: {}", catalog_path.display()))?;
    let store = catalog.store_by_code(store_code)?;

    let mut collector = EntryCollector::new();
    EntryAssembler::new(cfg, &catalog).emit_all(&mut collector, store, options);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_entries(&mut out, collector.entries(), format)?;
    out.flush()?;

    Ok(())
}

/// Render entries in the requested format
pub fn write_entries<W: Write>(out: &mut W, entries: &[SitemapEntry], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            for entry in entries {
                let line = serde_json::to_string(entry).context("Failed to serialize entry")?;
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Table => {
            writeln!(out, "{:<50} {:<22} {:<6}", "PATH", "LASTMOD", "VIDEO")?;
            writeln!(out, "{}", "-".repeat(80))?;

            for entry in entries {
                let lastmod = entry
                    .lastmod()
                    .map(|t| t.format("%Y-%m-%dT%H:%M:%SZ").to_string())
                    .unwrap_or_else(|| "-".to_string());
                let video = if entry.video().is_some() { "yes" } else { "" };
                writeln!(out, "{:<50} {:<22} {:<6}", entry.path, lastmod, video)?;
            }

            writeln!(out)?;
            writeln!(out, "{} entries", entries.len())?;
        }
    }

    Ok(())
}

fn show_config(cfg: &SitemapConfig) -> Result<()> {
    let content = match cfg.capabilities.content {
        Some(ContentIntegration::EssentialCms) => "essential_cms",
        Some(ContentIntegration::StaticContent) => "static_content",
        None => "(none)",
    };

    println!("Storefront Sitemap Configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Site name:         {}", cfg.site_name.as_deref().unwrap_or("(unset)"));
    println!("Global store code: {}", cfg.global_store_code);
    println!();
    println!("Integrations:");
    println!("  Videos:  {}", if cfg.capabilities.videos { "enabled" } else { "disabled" });
    println!("  Content: {}", content);
    println!();
    println!("Exclusions:");
    if cfg.exclude.is_empty() {
        println!("  (none)");
    } else {
        for pattern in &cfg.exclude {
            println!("  {}", pattern);
        }
    }

    Ok(())
}

fn check(cfg: &SitemapConfig, catalog_path: &Path) -> Result<()> {
    cfg.exclusion_patterns()?;

    let catalog = Catalog::from_file(catalog_path)?;
    catalog
        .validate()
        .with_context(|| format!("Invalid catalog: {}", catalog_path.display()))?;

    if !catalog.stores.iter().any(|s| cfg.is_global_store(&s.code)) {
        tracing::warn!(
            code = %cfg.global_store_code,
            "No store uses the global store code; every store will use local filter slugs"
        );
    }

    let orphan_filters = catalog
        .filters()
        .iter()
        .filter(|f| f.taxon_id.and_then(|id| catalog.taxon(id)).is_none())
        .count();

    println!(
        "OK: {} stores, {} products, {} pages, {} taxons, {} filters ({} without taxon)",
        catalog.stores.len(),
        catalog.products.len(),
        catalog.pages.len(),
        catalog.taxons.len(),
        catalog.filters.len(),
        orphan_filters
    );

    Ok(())
}
