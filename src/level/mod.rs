//! Severity levels and the shared threshold that gates which records get written.

mod threshold;

pub use threshold::{Threshold, set_global_threshold};

use std::fmt;
use std::str::FromStr;

/// Ordered by verbosity: a record passes when its rank is at or below the threshold's rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// As a threshold, suppresses everything. Never valid as a record severity.
    #[default]
    Off = 0,
    /// Failures that prevent the operation from completing.
    Error = 1,
    /// Anomalies worth a look that don't stop anything.
    Warn = 2,
    /// Diagnostic detail.
    Debug = 3,
    /// The most verbose level.
    Info = 4,
}

impl Severity {
    /// Integer rank used by the threshold comparison.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Inverse of [`rank`](Self::rank) for values read back from the atomic threshold.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::Off),
            1 => Some(Self::Error),
            2 => Some(Self::Warn),
            3 => Some(Self::Debug),
            4 => Some(Self::Info),
            _ => None,
        }
    }

    /// Legacy numeric codes (`0x1000` per step) still used by callers that pass levels as integers.
    ///
    /// # Errors
    /// Any code outside the five known values is rejected.
    pub fn from_code(code: u32) -> Result<Self, crate::Error> {
        match code {
            0x0000 => Ok(Self::Off),
            0x1000 => Ok(Self::Error),
            0x2000 => Ok(Self::Warn),
            0x3000 => Ok(Self::Debug),
            0x4000 => Ok(Self::Info),
            _ => Err(crate::Error::InvalidSeverity(format!("{code:#06x}"))),
        }
    }

    /// Numeric code matching [`from_code`](Self::from_code).
    #[must_use]
    pub const fn code(self) -> u32 {
        (self as u32) << 12
    }

    /// Label printed in front of every record. `Off` has none since it can't be written.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::Off => None,
            Self::Error => Some("ERR"),
            Self::Warn => Some("WARN"),
            Self::Debug => Some("DEBUG"),
            Self::Info => Some("INFO"),
        }
    }

    /// Lowercase because config files use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 5] {
        [Self::Off, Self::Error, Self::Warn, Self::Debug, Self::Info]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "error" | "err" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            _ => Err(crate::Error::InvalidSeverity(s.to_string())),
        }
    }
}
