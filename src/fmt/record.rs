//! Assembles the text of one log record.

use super::caller::{Caller, FunctionStyle};
use super::hexdump;
use crate::level::Severity;
use chrono::{DateTime, Local};

/// `asctime`-style layout, e.g. `Mon Jan  2 15:04:05 2006`.
pub const ANSIC_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Display choices applied to the caller columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallerFormat {
    pub function_style: FunctionStyle,
    pub use_basename: bool,
}

/// Inputs needed to render one record. Lives only for the duration of a write.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub severity: Severity,
    pub message: &'a str,
    pub caller: &'a Caller,
    pub dump: Option<&'a [u8]>,
    pub pid: u32,
    pub time: DateTime<Local>,
}

impl LogRecord<'_> {
    /// Payload bytes counted by the rotation check.
    #[must_use]
    pub fn dump_len(&self) -> usize {
        self.dump.map_or(0, <[u8]>::len)
    }

    /// Header line, caller line, then the hex dump when a non-empty payload is attached.
    ///
    /// The logger rejects `Off` before rendering; it would print as `OFF`.
    /// Bytes rather than a `String` because the dump's ASCII column copies payload bytes verbatim.
    #[must_use]
    pub fn render(&self, format: CallerFormat) -> Vec<u8> {
        let label = self.severity.label().unwrap_or("OFF");
        let text = format!(
            "Pid [{}] | Time [{}] | Message: \n{label}>> File[{}] Function[{}] Line[{}] {} |\n",
            self.pid,
            self.time.format(ANSIC_FORMAT),
            self.caller.display_file(format.use_basename),
            self.caller.display_function(format.function_style),
            self.caller.line,
            self.message
        );

        let dump = self.dump.filter(|d| !d.is_empty());
        let mut out =
            Vec::with_capacity(text.len() + dump.map_or(0, |d| hexdump::rendered_len(d.len())));
        out.extend_from_slice(text.as_bytes());
        if let Some(dump) = dump {
            hexdump::render_into(&mut out, dump);
        }

        out
    }
}
