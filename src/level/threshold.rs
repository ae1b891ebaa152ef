//! Process-wide severity threshold.
//!
//! Reads and writes use `Ordering::Relaxed`: the value is a single byte that is set
//! rarely and read on every write, so a thread may briefly observe the previous
//! threshold after a change. Callers that need strict visibility must add their own
//! synchronization.

use super::Severity;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Threshold> = OnceLock::new();

/// Cloneable handle to a shared threshold. Every clone observes the same value.
#[derive(Debug, Clone, Default)]
pub struct Threshold(Arc<AtomicU8>);

impl Threshold {
    /// A fresh threshold independent of the global one — useful for tests and embedded loggers.
    #[must_use]
    pub fn new(level: Severity) -> Self {
        Self(Arc::new(AtomicU8::new(level.rank())))
    }

    /// Shared handle used by loggers that weren't given an explicit one. Starts at `Off`.
    #[must_use]
    pub fn global() -> Self {
        GLOBAL.get_or_init(|| Self::new(Severity::Off)).clone()
    }

    /// Takes effect for every subsequent write through any clone of this handle.
    pub fn set(&self, level: Severity) {
        self.0.store(level.rank(), Ordering::Relaxed);
    }

    #[must_use]
    pub fn get(&self) -> Severity {
        Severity::from_rank(self.0.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// True when a record of `severity` passes this threshold.
    #[must_use]
    pub fn allows(&self, severity: Severity) -> bool {
        severity.rank() <= self.0.load(Ordering::Relaxed)
    }
}

/// Sets the threshold shared by every logger built without an explicit handle.
pub fn set_global_threshold(level: Severity) {
    Threshold::global().set(level);
}
