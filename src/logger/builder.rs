//! Stepwise construction for loggers that need more than the defaults.

use super::Logger;
use crate::fmt::{CallerFormat, FunctionStyle};
use crate::level::Threshold;
use crate::output::LogWriter;
use crate::rotation::RotationPolicy;
use std::path::PathBuf;

#[derive(Debug)]
pub struct LoggerBuilder {
    path: PathBuf,
    threshold: Option<Threshold>,
    format: CallerFormat,
    policy: RotationPolicy,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            threshold: None,
            format: CallerFormat::default(),
            policy: RotationPolicy::default(),
        }
    }

    /// Injects a threshold handle instead of the process-wide one.
    #[must_use]
    pub fn threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = Some(threshold);
        self
    }

    #[must_use]
    pub const fn function_style(mut self, style: FunctionStyle) -> Self {
        self.format.function_style = style;
        self
    }

    #[must_use]
    pub const fn basename(mut self, use_basename: bool) -> Self {
        self.format.use_basename = use_basename;
        self
    }

    /// Rotation limit in bytes.
    #[must_use]
    pub const fn max_size(mut self, bytes: u64) -> Self {
        self.policy = RotationPolicy::new(bytes);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            threshold: self.threshold.unwrap_or_else(Threshold::global),
            format: self.format,
            writer: LogWriter::new(self.path, self.policy),
        }
    }
}
