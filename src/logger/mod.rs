//! The facade callers hold: filters by severity, renders the record with caller
//! metadata, and hands the text to the writer.

mod builder;
mod from_config;
mod macros;

pub use builder::LoggerBuilder;

use crate::fmt::{Caller, CallerFormat, FunctionStyle, LogRecord};
use crate::level::{Severity, Threshold};
use crate::output::{Destination, LogWriter};
use crate::rotation::RotationPolicy;
use chrono::Local;
use std::panic::Location;
use std::path::{Path, PathBuf};

/// One logger per log file path, usually created at startup and kept for the process lifetime.
///
/// Formatting happens without locks; only the file step is serialized.
#[derive(Debug)]
pub struct Logger {
    threshold: Threshold,
    format: CallerFormat,
    writer: LogWriter,
}

impl Logger {
    /// Full function names, full file paths, the global threshold, and a 10 MiB rotation limit.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::builder(path).build()
    }

    #[must_use]
    pub fn builder(path: impl Into<PathBuf>) -> LoggerBuilder {
        LoggerBuilder::new(path)
    }

    /// `true` prints only the final component of the caller's source path.
    pub const fn set_file_path_style(&mut self, use_basename: bool) {
        self.format.use_basename = use_basename;
    }

    pub const fn set_function_style(&mut self, style: FunctionStyle) {
        self.format.function_style = style;
    }

    /// Writes a record attributed to the immediate caller's file and line.
    ///
    /// The function name can't be recovered this way and shows as `?`; use
    /// [`hwlog_write!`](crate::hwlog_write) or [`write_at`](Self::write_at) with
    /// [`caller!`](crate::caller) to include it.
    ///
    /// # Errors
    /// See [`write_at`](Self::write_at).
    #[track_caller]
    pub fn write(
        &self,
        severity: Severity,
        msg: &str,
        destination: Destination,
        dump: Option<&[u8]>,
    ) -> Result<(), crate::Error> {
        let caller = Caller::from_location(Location::caller());
        self.write_at(&caller, severity, msg, destination, dump)
    }

    /// Core dispatch with explicit caller information.
    ///
    /// Records above the threshold are dropped and return `Ok`. An empty dump is
    /// treated like no dump.
    ///
    /// # Errors
    /// `InvalidSeverity` for `Off` (before any I/O), otherwise open, stat or
    /// write failures from the destination.
    pub fn write_at(
        &self,
        caller: &Caller,
        severity: Severity,
        msg: &str,
        destination: Destination,
        dump: Option<&[u8]>,
    ) -> Result<(), crate::Error> {
        if !self.threshold.allows(severity) {
            return Ok(());
        }
        if severity == Severity::Off {
            return Err(crate::Error::InvalidSeverity(severity.to_string()));
        }

        let record = LogRecord {
            severity,
            message: msg,
            caller,
            dump,
            pid: std::process::id(),
            time: Local::now(),
        };
        let rendered = record.render(self.format);

        self.writer
            .write(destination, &rendered, msg.len(), record.dump_len())
    }

    /// Integer-coded variant for callers that carry levels as legacy numeric codes.
    ///
    /// # Errors
    /// `InvalidSeverity` for unknown codes, otherwise as [`write`](Self::write).
    #[track_caller]
    pub fn write_code(
        &self,
        code: u32,
        msg: &str,
        destination: Destination,
        dump: Option<&[u8]>,
    ) -> Result<(), crate::Error> {
        let caller = Caller::from_location(Location::caller());
        let severity = Severity::from_code(code)?;
        self.write_at(&caller, severity, msg, destination, dump)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.writer.path()
    }

    #[must_use]
    pub const fn threshold(&self) -> &Threshold {
        &self.threshold
    }

    #[must_use]
    pub const fn function_style(&self) -> FunctionStyle {
        self.format.function_style
    }

    #[must_use]
    pub const fn uses_basename(&self) -> bool {
        self.format.use_basename
    }

    #[must_use]
    pub const fn rotation_policy(&self) -> RotationPolicy {
        self.writer.policy()
    }
}
