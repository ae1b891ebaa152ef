//! Logger construction from an hwlog config file.

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;
use crate::level::set_global_threshold;

impl Logger {
    /// Builds a logger from the default config file, falling back to defaults when it can't be loaded.
    ///
    /// Sets the global threshold from `[general] level`.
    #[must_use]
    pub fn from_default_config() -> Self {
        let config = Config::load().unwrap_or_else(|e| {
            internal::warn("CONFIG", &format!("Config load failed, using defaults: {e}"));
            Config::default()
        });
        Self::from_config(&config)
    }

    /// Builds a logger for `[file]` and applies `[general] level` to the global threshold.
    /// Also brings up the `[internal]` diagnostic channel if enabled.
    ///
    /// An invalid `max_size` keeps the default rotation limit.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        internal::init_with_config(config);
        let level = config.parse_level();
        set_global_threshold(level);

        let mut builder = LoggerBuilder::new(config.file_path())
            .function_style(config.parse_function_style())
            .basename(config.file.basename);

        match config.rotation_policy() {
            Ok(policy) => builder = builder.max_size(policy.max_size()),
            Err(e) => internal::warn("CONFIG", &format!("{e}, keeping default rotation size")),
        }

        let logger = builder.build();
        internal::debug(
            "LOGGER",
            &format!(
                "Logger ready: path={}, level={level}, max_size={} bytes",
                logger.path().display(),
                logger.rotation_policy().max_size()
            ),
        );
        logger
    }
}
