//! XDG Base Directory Support
//!
//! Resolves where docsift looks for its configuration file on
//! Linux/Unix systems. Documents and results are never persisted,
//! so only the config directory is needed.

use std::env;
use std::path::PathBuf;

/// XDG directory structure for docsift
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}

impl XdgDirs {
    /// Create new XDG directory structure with proper resolution order
    ///
    /// Priority order (highest to lowest):
    /// 1. DOCSIFT_CONFIG_DIR
    /// 2. XDG_CONFIG_HOME
    /// 3. XDG default (~/.config/docsift)
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(dir) = env::var("DOCSIFT_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("docsift");
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("docsift")
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Log resolved paths
    pub fn log_paths(&self) {
        tracing::debug!(config_dir = ?self.config_dir, "XDG directories resolved");
    }
}
