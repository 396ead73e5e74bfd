//! Configuration management for docsift.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{DocsiftError, Result};
use crate::core::types::MatchOptions;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Extraction service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    /// Endpoint answering `GET ?url=<encoded>` with `{title, textContent}`
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_sec: u64,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Results per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Match case exactly by default
    #[serde(default)]
    pub case_sensitive: bool,

    /// Restrict matches to word boundaries by default
    #[serde(default)]
    pub whole_word: bool,

    /// Maximum query string length (characters)
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

/// Display configuration for the document outline
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Number of paragraphs listed in the outline
    #[serde(default = "default_outline_limit")]
    pub outline_limit: usize,

    /// Characters kept per outline entry before truncation
    #[serde(default = "default_outline_preview_chars")]
    pub outline_preview_chars: usize,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:3000/api/extract".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_page_size() -> usize {
    12
}

fn default_max_query_length() -> usize {
    500
}

fn default_outline_limit() -> usize {
    200
}

fn default_outline_preview_chars() -> usize {
    140
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_sec: default_timeout(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            case_sensitive: false,
            whole_word: false,
            max_query_length: default_max_query_length(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            outline_limit: default_outline_limit(),
            outline_preview_chars: default_outline_preview_chars(),
        }
    }
}

impl ExtractionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_sec)
    }
}

impl SearchConfig {
    /// Match options a fresh session starts with
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            case_sensitive: self.case_sensitive,
            whole_word: self.whole_word,
        }
    }
}

/// Parse boolean env values (`1`, `true`, `yes`, `on`)
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocsiftError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Config file that [`Config::load_with_xdg`] reads, if any
    ///
    /// File lookup order:
    /// 1. DOCSIFT_CONFIG env var
    /// 2. XDG config file (~/.config/docsift/config.toml)
    /// 3. ./docsift.toml
    pub fn file_path(xdg: &XdgDirs) -> Option<PathBuf> {
        if let Ok(config_path) = env::var("DOCSIFT_CONFIG") {
            return Some(PathBuf::from(config_path));
        }

        let xdg_config = xdg.config_file();
        if xdg_config.exists() {
            return Some(xdg_config);
        }

        let local = PathBuf::from("docsift.toml");
        local.exists().then_some(local)
    }

    /// Load config with explicit XDG directories, falling back to defaults
    /// when no config file is found
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = match Self::file_path(xdg) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(endpoint) = env::var("DOCSIFT_ENDPOINT") {
            self.extraction.endpoint = endpoint;
        }
        if let Ok(timeout) = env::var("DOCSIFT_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.extraction.timeout_sec = t;
            }
        }

        if let Ok(page_size) = env::var("DOCSIFT_PAGE_SIZE") {
            if let Ok(size) = page_size.parse() {
                self.search.page_size = size;
            }
        }
        if let Ok(value) = env::var("DOCSIFT_CASE_SENSITIVE") {
            if let Some(flag) = parse_bool(&value) {
                self.search.case_sensitive = flag;
            }
        }
        if let Ok(value) = env::var("DOCSIFT_WHOLE_WORD") {
            if let Some(flag) = parse_bool(&value) {
                self.search.whole_word = flag;
            }
        }
        if let Ok(max_query_len) = env::var("DOCSIFT_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let endpoint = url::Url::parse(&self.extraction.endpoint).map_err(|e| {
            DocsiftError::ConfigError(format!(
                "Invalid extraction endpoint '{}': {e}",
                self.extraction.endpoint
            ))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(DocsiftError::ConfigError(format!(
                "Extraction endpoint must be http or https, got '{}'",
                endpoint.scheme()
            )));
        }

        if self.extraction.timeout_sec == 0 {
            return Err(DocsiftError::ConfigError(
                "Request timeout must be non-zero".to_string(),
            ));
        }

        if self.search.page_size == 0 {
            return Err(DocsiftError::ConfigError(
                "Page size must be non-zero".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(DocsiftError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.display.outline_preview_chars == 0 {
            return Err(DocsiftError::ConfigError(
                "Outline preview length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Extraction endpoint: {}", self.extraction.endpoint);
        tracing::debug!("  Request timeout: {}s", self.extraction.timeout_sec);
        tracing::debug!("  Page size: {}", self.search.page_size);
        tracing::debug!("  Case sensitive: {}", self.search.case_sensitive);
        tracing::debug!("  Whole word: {}", self.search.whole_word);
        tracing::debug!("  Max query length: {}", self.search.max_query_length);
        tracing::debug!("  Outline limit: {}", self.display.outline_limit);
    }
}
