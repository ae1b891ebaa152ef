//! Unified error type for all hwlog operations.

use std::path::PathBuf;

/// Error type for hwlog operations.
#[derive(Debug)]
pub enum Error {
    /// Level value outside the known set, or `Off` used as a record severity.
    InvalidSeverity(String),
    /// Both the exclusive create and the fallback append-open failed.
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Size query on the opened log file failed.
    FileStat {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Writing the rendered record failed.
    Write(std::io::Error),
    /// I/O error outside the write path (config reading, backup listing).
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Size string like `"10M"` that couldn't be parsed.
    InvalidSize(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSeverity(s) => write!(f, "unrecognized severity: {s}"),
            Self::FileOpen { path, source } => {
                write!(f, "cannot open {}: {source}", path.display())
            }
            Self::FileStat { path, source } => {
                write!(f, "cannot stat {}: {source}", path.display())
            }
            Self::Write(e) => write!(f, "write error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidSize(s) => write!(f, "invalid size: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileOpen { source, .. } | Self::FileStat { source, .. } => Some(source),
            Self::Write(e) | Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::InvalidSeverity(_) | Self::ConfigDirNotFound | Self::InvalidSize(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
