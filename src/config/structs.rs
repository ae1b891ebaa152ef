//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Global severity threshold.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "off".to_string(),
        }
    }
}

/// File destination configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Active log file. `~` is expanded.
    pub path: String,
    /// Print only the final component of source file paths.
    pub basename: bool,
    /// Function name style (full, package, short).
    pub function_style: String,
    /// Rotation threshold, e.g. `"10M"`.
    pub max_size: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            path: "hwlog.log".to_string(),
            basename: false,
            function_style: "full".to_string(),
            max_size: "10M".to_string(),
        }
    }
}

/// Diagnostics about hwlog itself (rotation failures, config fallbacks).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InternalConfig {
    /// Disabled by default so the library stays silent unless asked.
    pub enabled: bool,
    /// Where diagnostics go. Empty means stdout.
    pub path: String,
    /// Threshold for diagnostics, independent of the global one.
    pub level: String,
}

impl Default for InternalConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: String::new(),
            level: "warn".to_string(),
        }
    }
}
