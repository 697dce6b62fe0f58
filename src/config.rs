//! Configuration for sitemap assembly.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (STOREFRONT_SITEMAP_SITE_NAME, STOREFRONT_SITEMAP_GLOBAL_STORE)
//! 2. Config file (.storefront-sitemap/config.yaml)
//! 3. Defaults (no site name, "global" store code, no integrations)
//!
//! Config file discovery:
//! - Searches current directory and parents for .storefront-sitemap/config.yaml
//!
//! Optional integrations are plain capability flags. Nothing is probed at
//! runtime: an integration that is not enabled here simply disables the
//! matching emission branch.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use glob::Pattern;
use serde::Deserialize;
use thiserror::Error;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<SitemapConfig, String>> = OnceLock::new();

pub const CONFIG_DIR: &str = ".storefront-sitemap";
pub const DEFAULT_GLOBAL_STORE_CODE: &str = "global";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub global_store_code: Option<String>,
    #[serde(default)]
    pub integrations: IntegrationsConfig,
    /// Glob patterns for paths that must never be emitted
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntegrationsConfig {
    #[serde(default)]
    pub videos: bool,
    #[serde(default)]
    pub essential_cms: bool,
    #[serde(default)]
    pub static_content: bool,
}

/// Invalid configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("essential_cms and static_content are mutually exclusive; enable at most one")]
    ConflictingContentIntegrations,

    #[error("invalid exclude pattern '{pattern}': {message}")]
    InvalidExcludePattern { pattern: String, message: String },
}

/// An optional integration the assembler can branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integration {
    /// Product videos
    Videos,
    /// Essential CMS pages (emitted by path)
    EssentialCms,
    /// Static content pages (emitted by slug)
    StaticContent,
}

impl std::fmt::Display for Integration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Integration::Videos => write!(f, "videos"),
            Integration::EssentialCms => write!(f, "essential_cms"),
            Integration::StaticContent => write!(f, "static_content"),
        }
    }
}

/// The content-management integration in use, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentIntegration {
    EssentialCms,
    StaticContent,
}

/// Enabled integrations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub videos: bool,
    pub content: Option<ContentIntegration>,
}

impl Capabilities {
    /// Build from raw flags, refusing two content integrations at once
    pub fn from_flags(
        videos: bool,
        essential_cms: bool,
        static_content: bool,
    ) -> Result<Self, ConfigError> {
        let content = match (essential_cms, static_content) {
            (true, true) => return Err(ConfigError::ConflictingContentIntegrations),
            (true, false) => Some(ContentIntegration::EssentialCms),
            (false, true) => Some(ContentIntegration::StaticContent),
            (false, false) => None,
        };

        Ok(Self { videos, content })
    }

    /// Whether an integration is enabled
    pub fn is_available(&self, integration: Integration) -> bool {
        match integration {
            Integration::Videos => self.videos,
            Integration::EssentialCms => self.content == Some(ContentIntegration::EssentialCms),
            Integration::StaticContent => self.content == Some(ContentIntegration::StaticContent),
        }
    }
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct SitemapConfig {
    /// Prefix of video titles ("{site_name} - {product}")
    pub site_name: Option<String>,
    /// Store code that selects the global filter slug
    pub global_store_code: String,
    pub capabilities: Capabilities,
    pub exclude: Vec<String>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            site_name: None,
            global_store_code: DEFAULT_GLOBAL_STORE_CODE.to_string(),
            capabilities: Capabilities::default(),
            exclude: Vec::new(),
            config_file: None,
        }
    }
}

impl SitemapConfig {
    /// Compile the exclusion patterns
    pub fn exclusion_patterns(&self) -> Result<Vec<Pattern>, ConfigError> {
        self.exclude
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| ConfigError::InvalidExcludePattern {
                    pattern: p.clone(),
                    message: e.to_string(),
                })
            })
            .collect()
    }

    /// Whether `code` names the global store
    pub fn is_global_store(&self, code: &str) -> bool {
        code == self.global_store_code
    }

    fn from_file(config: ConfigFile, config_file: Option<PathBuf>) -> Result<Self, ConfigError> {
        let IntegrationsConfig {
            videos,
            essential_cms,
            static_content,
        } = config.integrations;

        let resolved = Self {
            site_name: config.site_name.filter(|s| !s.trim().is_empty()),
            global_store_code: config
                .global_store_code
                .unwrap_or_else(|| DEFAULT_GLOBAL_STORE_CODE.to_string()),
            capabilities: Capabilities::from_flags(videos, essential_cms, static_content)?,
            exclude: config.exclude,
            config_file,
        };

        resolved.exclusion_patterns()?;
        Ok(resolved)
    }

    /// Apply environment overrides
    fn with_env(mut self) -> Self {
        if let Ok(site_name) = std::env::var("STOREFRONT_SITEMAP_SITE_NAME") {
            if !site_name.trim().is_empty() {
                self.site_name = Some(site_name);
            }
        }
        if let Ok(code) = std::env::var("STOREFRONT_SITEMAP_GLOBAL_STORE") {
            if !code.trim().is_empty() {
                self.global_store_code = code;
            }
        }
        self
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(CONFIG_DIR).join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
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

/// Load configuration from an explicit file, then apply environment overrides
pub fn load_config_from(path: &Path) -> Result<SitemapConfig> {
    let file = load_config_file(path)?;
    let config = SitemapConfig::from_file(file, Some(path.to_path_buf()))
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    Ok(config.with_env())
}

/// Load configuration from all sources
fn load_config() -> Result<SitemapConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => Ok(SitemapConfig::default().with_env()),
    }
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static SitemapConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}
