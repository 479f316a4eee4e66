//! Configuration file loading
//!
//! Handles loading configuration from TOML files.

use crate::config::NotifyConfig;
use crate::error::ConfigError;

use std::path::{Path, PathBuf};

/// Configuration file handler
pub struct ConfigFile;

impl ConfigFile {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<NotifyConfig, ConfigError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;

        let config: NotifyConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// Returns the built-in defaults when no file is found or parseable.
    pub fn load_default() -> NotifyConfig {
        for path in Self::default_paths() {
            if path.exists() {
                match Self::load(&path) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        log::warn!("Ignoring config at {}: {}", path.display(), e);
                    }
                }
            }
        }
        NotifyConfig::default()
    }

    /// Get default configuration file paths
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // System-wide config
        paths.push(PathBuf::from("/etc/lintbell/config.toml"));

        // User config
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("lintbell/config.toml"));
        }

        // Current directory
        paths.push(PathBuf::from("lintbell.toml"));
        paths.push(PathBuf::from(".lintbell.toml"));

        paths
    }
}
