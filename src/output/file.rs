//! File destination with size-triggered rotation.
//!
//! Every write opens the file, checks its size, rotates if needed, appends, and
//! drops the handle. The mutex serializes that whole sequence for one logger.
//! Separate `FileOutput`s pointing at the same path are not coordinated and can
//! both decide to rotate at the same moment.

use super::Output;
use crate::internal;
use crate::rotation::{self, RotationPolicy};
use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

/// Owner read/write, group and others read.
pub const FILE_MODE: u32 = 0o644;

#[derive(Debug)]
pub struct FileOutput {
    path: PathBuf,
    policy: RotationPolicy,
    lock: Mutex<()>,
}

impl FileOutput {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, policy: RotationPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn policy(&self) -> RotationPolicy {
        self.policy
    }

    /// Exclusive create first; if the file already exists, append to it instead.
    fn open(&self) -> Result<File, crate::Error> {
        let created = base_options().create_new(true).open(&self.path);
        let result = match created {
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => base_options().open(&self.path),
            other => other,
        };
        result.map_err(|source| crate::Error::FileOpen {
            path: self.path.clone(),
            source,
        })
    }

    /// Renames the active file away and opens a fresh one in its place.
    ///
    /// A failed rename is reported on the internal channel only; the record is
    /// then appended to the existing file.
    fn rotate(&self, file: File) -> Result<File, crate::Error> {
        let backup = rotation::backup_path(&self.path, &Local::now());
        match fs::rename(&self.path, &backup) {
            Ok(()) => {
                drop(file);
                internal::debug(
                    "FILE",
                    &format!("Rotated {} to {}", self.path.display(), backup.display()),
                );
                self.open()
            }
            Err(e) => {
                internal::warn(
                    "FILE",
                    &format!(
                        "Rotation of {} failed, continuing in place: {e}",
                        self.path.display()
                    ),
                );
                Ok(file)
            }
        }
    }
}

fn base_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.read(true).append(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);
    options
}

impl Output for FileOutput {
    fn write(
        &self,
        rendered: &[u8],
        message_len: usize,
        dump_len: usize,
    ) -> Result<(), crate::Error> {
        // The mutex guards no data, so poisoning carries no state to distrust.
        let _guard = self
            .lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let mut file = self.open()?;
        let size = file
            .metadata()
            .map_err(|source| crate::Error::FileStat {
                path: self.path.clone(),
                source,
            })?
            .len();

        if self.policy.should_rotate(size, message_len, dump_len) {
            file = self.rotate(file)?;
        }

        file.write_all(rendered).map_err(crate::Error::Write)?;
        Ok(())
    }
}
