//! hwlog's own diagnostic channel, for anomalies that must not fail the caller's
//! write (a swallowed rotation rename, an unparsable config value).
//!
//! Uses `OnceLock` so the channel is initialized exactly once. Until then every
//! call is a no-op.

use crate::config::Config;
use crate::fmt::{Caller, FunctionStyle};
use crate::level::{Severity, Threshold};
use crate::logger::Logger;
use crate::output::Destination;
use std::cell::Cell;
use std::sync::OnceLock;

struct InternalLogger {
    logger: Logger,
    destination: Destination,
}

static INTERNAL_LOGGER: OnceLock<InternalLogger> = OnceLock::new();

thread_local! {
    /// Set while a diagnostic is being written, so a rotation warning raised by the
    /// internal logger's own file can't recurse.
    static IN_PROGRESS: Cell<bool> = const { Cell::new(false) };
}

/// Installs `logger` as the diagnostic channel. Later calls are ignored.
pub fn init(logger: Logger, destination: Destination) {
    let _ = INTERNAL_LOGGER.set(InternalLogger {
        logger,
        destination,
    });
}

/// Builds the channel from `[internal]`; does nothing when it's disabled.
pub fn init_with_config(config: &Config) {
    if !config.internal.enabled || INTERNAL_LOGGER.get().is_some() {
        return;
    }
    let threshold = Threshold::new(config.parse_internal_level());
    let (path, destination) = config.internal_path().map_or_else(
        || (config.file_path(), Destination::Stdout),
        |p| (p, Destination::File),
    );
    let logger = Logger::builder(path)
        .threshold(threshold)
        .function_style(FunctionStyle::Short)
        .basename(true)
        .build();
    init(logger, destination);
    debug("INTERNAL", "Internal logger ready");
}

fn log(severity: Severity, scope: &str, msg: &str) {
    let Some(internal) = INTERNAL_LOGGER.get() else {
        return;
    };
    if IN_PROGRESS.with(Cell::get) {
        return;
    }
    IN_PROGRESS.with(|f| f.set(true));
    let caller = Caller::new(file!(), line!(), &format!("hwlog::internal::{scope}"));
    // Nowhere left to report a failure of the diagnostic channel itself.
    let _ = internal
        .logger
        .write_at(&caller, severity, msg, internal.destination, None);
    IN_PROGRESS.with(|f| f.set(false));
}

pub fn debug(scope: &str, msg: &str) {
    log(Severity::Debug, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Severity::Warn, scope, msg);
}
