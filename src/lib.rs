//! `hwlog` - leveled logger with caller metadata, size-based rotation, and hex dumps.
//!
//! Each record carries the process id, a timestamp, the severity, and the
//! file, function and line it was issued from. Records go either to a log file
//! that is rotated to a timestamped backup once it would exceed a size limit,
//! or to standard output. A binary payload can be attached and is rendered as
//! a 16-column hex/ASCII table.
//!
//! # Example
//!
//! ```no_run
//! use hwlog::{Destination, FunctionStyle, Logger, Severity, hwlog_write, set_global_threshold};
//!
//! set_global_threshold(Severity::Debug);
//!
//! let mut logger = Logger::new("/var/log/app.log");
//! logger.set_function_style(FunctionStyle::Short);
//! logger.set_file_path_style(true);
//!
//! logger.write(Severity::Warn, "retrying", Destination::File, None)?;
//! hwlog_write!(logger, Severity::Debug, Destination::File, "packet", b"\x01\x02GET")?;
//! # Ok::<(), hwlog::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod rotation;

pub use config::Config;
pub use error::Error;
pub use fmt::{Caller, FunctionStyle};
pub use level::{Severity, Threshold, set_global_threshold};
pub use logger::{Logger, LoggerBuilder};
pub use output::{Destination, LogWriter};
pub use rotation::{BackupInfo, RotationPolicy, backups, parse_size};
