//! Size-triggered rotation of the active log file.
//!
//! The decision is recomputed on every write from the file's size on disk, so no
//! rotation state lives in memory. Rotation renames the active file to a
//! timestamped backup in the same directory; nothing is truncated or deleted.

mod backups;
mod size;

pub use backups::{BackupInfo, backups};
pub use size::parse_size;

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// 10 MiB.
pub const DEFAULT_MAX_SIZE: u64 = 10 * 1024 * 1024;

/// Inserted between the log file name and the backup timestamp.
pub const BACKUP_MARKER: &str = ".hwch.";

/// `YYYYMMDDHHMMSS`, local time.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Decides when the active file has grown too large for the next record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    max_size: u64,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE)
    }
}

impl RotationPolicy {
    #[must_use]
    pub const fn new(max_size: u64) -> Self {
        Self { max_size }
    }

    #[must_use]
    pub const fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Only the message text and dump payload are projected, not the rendered
    /// header, so a file can end slightly above `max_size` before it rotates.
    #[must_use]
    pub fn should_rotate(&self, current_size: u64, message_len: usize, dump_len: usize) -> bool {
        let incoming = u64::try_from(message_len.saturating_add(dump_len)).unwrap_or(u64::MAX);
        current_size.saturating_add(incoming) > self.max_size
    }
}

/// `<path>.hwch.<YYYYMMDDHHMMSS>` for a rotation decided at `at`.
#[must_use]
pub fn backup_path(path: &Path, at: &DateTime<Local>) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(BACKUP_MARKER);
    name.push(at.format(BACKUP_TIMESTAMP_FORMAT).to_string());
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn boundary_is_inclusive() {
        let policy = RotationPolicy::new(100);
        assert!(!policy.should_rotate(90, 10, 0));
        assert!(policy.should_rotate(90, 10, 1));
        assert!(!policy.should_rotate(0, 0, 100));
    }

    #[test]
    fn default_is_ten_mebibytes() {
        assert_eq!(RotationPolicy::default().max_size(), 10_485_760);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        assert!(RotationPolicy::default().should_rotate(u64::MAX, usize::MAX, usize::MAX));
    }

    #[test]
    fn backup_path_appends_timestamp() {
        let at = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap();
        let path = backup_path(Path::new("/var/log/app.log"), &at);
        assert_eq!(path, PathBuf::from("/var/log/app.log.hwch.20240307090502"));
    }
}
