//! Destinations a rendered record can go to, and the writer that owns them.

mod file;
mod terminal;

pub use file::FileOutput;
pub use terminal::StdoutOutput;

use crate::rotation::RotationPolicy;
use std::path::{Path, PathBuf};

/// Chosen per call, not fixed per logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// The logger's path, with rotation.
    File,
    /// Process standard output, never rotated.
    Stdout,
}

/// Implemented by every sink so the writer can dispatch without knowing its internals.
///
/// `message_len` and `dump_len` are the raw sizes the rotation check projects;
/// `rendered` is the full record to append.
pub trait Output: Send + Sync {
    /// # Errors
    /// Open, stat or write failures of the underlying sink.
    fn write(&self, rendered: &[u8], message_len: usize, dump_len: usize)
    -> Result<(), crate::Error>;
}

/// Owns both destinations for one logger.
#[derive(Debug)]
pub struct LogWriter {
    file: FileOutput,
    stdout: StdoutOutput,
}

impl LogWriter {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, policy: RotationPolicy) -> Self {
        Self {
            file: FileOutput::new(path, policy),
            stdout: StdoutOutput,
        }
    }

    /// # Errors
    /// Whatever the selected destination reports.
    pub fn write(
        &self,
        destination: Destination,
        rendered: &[u8],
        message_len: usize,
        dump_len: usize,
    ) -> Result<(), crate::Error> {
        let output: &dyn Output = match destination {
            Destination::File => &self.file,
            Destination::Stdout => &self.stdout,
        };
        output.write(rendered, message_len, dump_len)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    #[must_use]
    pub const fn policy(&self) -> RotationPolicy {
        self.file.policy()
    }
}
