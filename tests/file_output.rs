//! Tests for the file destination and size-based rotation.

use chrono::{Duration, Local};
use hwlog::rotation::backup_path;
use hwlog::{Destination, Error, Logger, Severity, Threshold, backups};
use std::fs;
use tempfile::TempDir;

fn logger_at(dir: &TempDir, name: &str, max_size: u64) -> Logger {
    Logger::builder(dir.path().join(name))
        .threshold(Threshold::new(Severity::Info))
        .max_size(max_size)
        .build()
}

#[test]
fn creates_file_and_appends() {
    let tmp_dir = TempDir::new().unwrap();
    let logger = logger_at(&tmp_dir, "app.log", 1024 * 1024);

    logger.write(Severity::Error, "first", Destination::File, None).unwrap();
    logger.write(Severity::Info, "second", Destination::File, None).unwrap();

    let content = fs::read_to_string(logger.path()).unwrap();
    assert_eq!(content.matches("Pid [").count(), 2);
    let first = content.find(" first |").unwrap();
    let second = content.find(" second |").unwrap();
    assert!(first < second);
}

#[test]
fn appends_to_existing_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("existing.log");
    fs::write(&path, "previous run\n").unwrap();

    let logger = logger_at(&tmp_dir, "existing.log", 1024 * 1024);
    logger.write(Severity::Warn, "resumed", Destination::File, None).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("previous run\nPid ["));
    assert!(content.contains("WARN>> "));
}

#[test]
fn no_rotation_at_exact_limit() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("edge.log");
    fs::write(&path, vec![b'x'; 100]).unwrap();

    let msg = "0123456789";
    let dump = [0u8; 6];
    let logger = logger_at(&tmp_dir, "edge.log", 100 + 10 + 6);
    logger
        .write(Severity::Info, msg, Destination::File, Some(&dump[..]))
        .unwrap();

    assert!(backups(&path).unwrap().is_empty());
    let content = fs::read(&path).unwrap();
    assert!(content.starts_with(&[b'x'; 100]));
}

#[test]
fn rotates_once_when_limit_exceeded() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("rot.log");
    let old = "old content that must survive\n".repeat(4);
    fs::write(&path, &old).unwrap();

    let logger = logger_at(&tmp_dir, "rot.log", old.len() as u64);
    logger
        .write(Severity::Error, "trigger", Destination::File, None)
        .unwrap();

    let found = backups(&path).unwrap();
    assert_eq!(found.len(), 1);

    let backup_name = found[0].path.file_name().unwrap().to_str().unwrap().to_string();
    let suffix = backup_name.strip_prefix("rot.log.hwch.").unwrap();
    assert_eq!(suffix.len(), 14);
    assert!(suffix.bytes().all(|b| b.is_ascii_digit()));

    assert_eq!(fs::read_to_string(&found[0].path).unwrap(), old);
    assert_eq!(found[0].size, old.len() as u64);

    let fresh = fs::read_to_string(&path).unwrap();
    assert!(fresh.starts_with("Pid ["));
    assert_eq!(fresh.matches("Pid [").count(), 1);
    assert!(fresh.contains(" trigger |\n"));
    assert!(!fresh.contains("old content"));
}

#[test]
fn dump_length_counts_toward_limit() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("dump.log");
    fs::write(&path, vec![b'x'; 50]).unwrap();

    let logger = logger_at(&tmp_dir, "dump.log", 60);
    logger
        .write(Severity::Debug, "m", Destination::File, Some(&[0xAB; 10][..]))
        .unwrap();

    assert_eq!(backups(&path).unwrap().len(), 1);
    // the ASCII column holds raw 0xAB bytes, so the file isn't UTF-8
    let raw = fs::read(&path).unwrap();
    let fresh = String::from_utf8_lossy(&raw);
    assert!(fresh.contains("Displacement"));
    assert!(fresh.contains("AB  AB  "));
}

#[test]
fn stdout_never_touches_the_file() {
    let tmp_dir = TempDir::new().unwrap();
    let logger = logger_at(&tmp_dir, "unused.log", 1);

    logger
        .write(Severity::Info, "to stdout", Destination::Stdout, Some(&b"hi"[..]))
        .unwrap();

    assert!(!logger.path().exists());
}

#[test]
fn open_failure_is_reported() {
    let tmp_dir = TempDir::new().unwrap();
    let logger = logger_at(&tmp_dir, "missing/dir/app.log", 1024);

    let err = logger
        .write(Severity::Error, "nowhere", Destination::File, None)
        .unwrap_err();
    assert!(matches!(err, Error::FileOpen { .. }));
}

#[cfg(unix)]
#[test]
fn new_file_has_0644_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let tmp_dir = TempDir::new().unwrap();
    let logger = logger_at(&tmp_dir, "perm.log", 1024);
    logger.write(Severity::Info, "x", Destination::File, None).unwrap();

    // umask can only clear bits
    let mode = fs::metadata(logger.path()).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode & !0o644, 0);
    assert_eq!(mode & 0o600, 0o600);
}

#[test]
fn backups_listed_oldest_first() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    for name in [
        "app.log.hwch.20240101000000",
        "app.log.hwch.20230615120000",
        "app.log.hwch.bogus",
        "app.log.hwch.2024010100000",
        "other.log.hwch.20240101000000",
    ] {
        fs::write(tmp_dir.path().join(name), name).unwrap();
    }

    let found = backups(&path).unwrap();
    let names: Vec<_> = found
        .iter()
        .map(|b| b.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec!["app.log.hwch.20230615120000", "app.log.hwch.20240101000000"]
    );
}

#[test]
fn backups_of_missing_directory_is_empty() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("nope").join("app.log");
    assert!(backups(&path).unwrap().is_empty());
}

#[test]
fn dump_bytes_reach_the_file_verbatim() {
    let tmp_dir = TempDir::new().unwrap();
    let logger = logger_at(&tmp_dir, "raw.log", 1024 * 1024);

    logger
        .write(Severity::Info, "bin", Destination::File, Some(&[0xFFu8][..]))
        .unwrap();

    let content = fs::read(logger.path()).unwrap();
    assert!(content.ends_with(&[b' ', b' ', 0xFF, b'\n']));
    assert_eq!(content.iter().filter(|&&b| b == 0xFF).count(), 1);
    assert!(!content.windows(2).any(|w| w == [0xC3, 0xBF]));
}

#[test]
fn failed_rename_still_writes_in_place() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("r.log");
    fs::write(&path, "old\n").unwrap();

    // Occupy every backup name the rotation could pick with a non-empty directory.
    let now = Local::now();
    for offset in -1..=3 {
        let blocker = backup_path(&path, &(now + Duration::seconds(offset)));
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("keep"), "x").unwrap();
    }

    let logger = logger_at(&tmp_dir, "r.log", 1);
    logger
        .write(Severity::Error, "trig", Destination::File, None)
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("old\nPid ["));
    assert!(content.contains("ERR>> "));
    assert!(content.ends_with(" trig |\n"));
    assert!(backups(&path).unwrap().is_empty());
}
