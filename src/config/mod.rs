//! Configuration system
//!
//! Handles TOML config file parsing for the notification facility.

pub mod file;

pub use file::ConfigFile;

use serde::{Deserialize, Serialize};

/// Default installation-documentation URL
pub const DEFAULT_DOCS_URL: &str = "https://lintbell.dev/docs/installing-the-lint-tool";

/// Notification facility configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Display name used as the default notification title
    ///
    /// Falls back to the message bundle's plugin name when unset.
    pub display_name: Option<String>,
    /// Where the lint-tool installation documentation lives
    pub docs_url: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            display_name: None,
            docs_url: DEFAULT_DOCS_URL.to_string(),
        }
    }
}
