//! TOML configuration loading.
//!
//! Separated from struct definitions so the loading logic (file lookup, tilde
//! expansion, value parsing) stays independent of the serde schema.

mod structs;

pub use structs::{FileConfig, GeneralConfig, InternalConfig};

use crate::fmt::FunctionStyle;
use crate::internal;
use crate::level::Severity;
use crate::rotation::{self, RotationPolicy};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// An empty file must still produce a working logger — every field has a default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub file: FileConfig,
    pub internal: InternalConfig,
}

impl FromStr for Config {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

impl Config {
    /// Loads from the default location; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the file can't be read or parsed.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        Self::load_from(&path)
    }

    /// Loads from an explicit path; a missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = fs::read_to_string(path)?.parse()?;
        internal::debug("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// `<config_dir>/hwlog/hwlog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("hwlog").join("hwlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Unknown strings fall back to `Off` rather than failing the whole config.
    #[must_use]
    pub fn parse_level(&self) -> Severity {
        parse_or_warn(&self.general.level, "level")
    }

    #[must_use]
    pub fn parse_internal_level(&self) -> Severity {
        parse_or_warn(&self.internal.level, "internal level")
    }

    #[must_use]
    pub fn parse_function_style(&self) -> FunctionStyle {
        parse_or_warn(&self.file.function_style, "function style")
    }

    /// # Errors
    /// `max_size` isn't a valid size string.
    pub fn rotation_policy(&self) -> Result<RotationPolicy, crate::Error> {
        rotation::parse_size(&self.file.max_size)
            .map(RotationPolicy::new)
            .ok_or_else(|| crate::Error::InvalidSize(self.file.max_size.clone()))
    }

    /// Log file path with `~` expanded.
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        expand(&self.file.path)
    }

    /// `None` sends internal diagnostics to stdout.
    #[must_use]
    pub fn internal_path(&self) -> Option<PathBuf> {
        (!self.internal.path.is_empty()).then(|| expand(&self.internal.path))
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

fn parse_or_warn<T: FromStr + Default>(value: &str, what: &str) -> T {
    value.parse().unwrap_or_else(|_| {
        internal::warn("CONFIG", &format!("Unknown {what} '{value}', using default"));
        T::default()
    })
}
