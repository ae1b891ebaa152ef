//! Call-site macros that attach the full caller (file, line, function) to a record.

/// Writes a record with the invoking function's name attached.
///
/// ```no_run
/// use hwlog::{Destination, Logger, Severity};
///
/// let logger = Logger::new("/tmp/app.log");
/// hwlog::hwlog_write!(logger, Severity::Error, Destination::File, "short read").unwrap();
/// hwlog::hwlog_write!(logger, Severity::Debug, Destination::Stdout, "frame", b"AB").unwrap();
/// ```
#[macro_export]
macro_rules! hwlog_write {
    ($logger:expr, $severity:expr, $dest:expr, $msg:expr) => {
        $logger.write_at(&$crate::caller!(), $severity, $msg, $dest, None)
    };
    ($logger:expr, $severity:expr, $dest:expr, $msg:expr, $dump:expr) => {
        $logger.write_at(
            &$crate::caller!(),
            $severity,
            $msg,
            $dest,
            Some(::core::convert::AsRef::<[u8]>::as_ref($dump)),
        )
    };
}

#[macro_export]
macro_rules! hw_error {
    ($logger:expr, $dest:expr, $($arg:tt)+) => {
        $crate::hwlog_write!($logger, $crate::Severity::Error, $dest, &::std::format!($($arg)+))
    };
}

#[macro_export]
macro_rules! hw_warn {
    ($logger:expr, $dest:expr, $($arg:tt)+) => {
        $crate::hwlog_write!($logger, $crate::Severity::Warn, $dest, &::std::format!($($arg)+))
    };
}

#[macro_export]
macro_rules! hw_debug {
    ($logger:expr, $dest:expr, $($arg:tt)+) => {
        $crate::hwlog_write!($logger, $crate::Severity::Debug, $dest, &::std::format!($($arg)+))
    };
}

#[macro_export]
macro_rules! hw_info {
    ($logger:expr, $dest:expr, $($arg:tt)+) => {
        $crate::hwlog_write!($logger, $crate::Severity::Info, $dest, &::std::format!($($arg)+))
    };
}
