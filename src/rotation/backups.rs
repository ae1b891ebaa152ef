//! Read-only inventory of the backups rotation has produced for a log file.

use super::{BACKUP_MARKER, BACKUP_TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

/// One rotated backup found next to the active file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupInfo {
    pub path: PathBuf,
    /// Local time parsed from the file name suffix.
    pub rotated_at: NaiveDateTime,
    pub size: u64,
}

/// Lists `<path>.hwch.<14 digits>` files in `path`'s directory, oldest first.
///
/// A missing directory yields an empty list. Files whose suffix isn't a valid
/// timestamp are skipped.
///
/// # Errors
/// Directory read failures other than "not found".
pub fn backups(path: &Path) -> Result<Vec<BackupInfo>, crate::Error> {
    let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
        return Ok(Vec::new());
    };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let prefix = format!("{file_name}{BACKUP_MARKER}");

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let Some(suffix) = name.to_str().and_then(|n| n.strip_prefix(&prefix)) else {
            continue;
        };
        if suffix.len() != 14 || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        let Ok(rotated_at) = NaiveDateTime::parse_from_str(suffix, BACKUP_TIMESTAMP_FORMAT) else {
            continue;
        };
        let Ok(meta) = entry.metadata() else {
            continue;
        };
        if meta.is_file() {
            found.push(BackupInfo {
                path: entry.path(),
                rotated_at,
                size: meta.len(),
            });
        }
    }

    found.sort_by(|a, b| a.rotated_at.cmp(&b.rotated_at).then_with(|| a.path.cmp(&b.path)));
    Ok(found)
}
