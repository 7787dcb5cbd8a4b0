// clog - app/global.rs
//
// Process-wide convenience instance for programs that do not want to pass
// a `Logger` around. It is an ordinary `Logger` built lazily from the
// environment (see platform::config) on first use; everything here is a
// thin wrapper over it.

use crate::app::logger::Logger;
use crate::core::callsite::Location;
use crate::core::level::{Level, Severity};
use crate::platform::config;
use crate::util::error::Result;
use std::fmt;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, built on first access.
///
/// If the environment asks for file mode and the file cannot be created,
/// the logger starts on the console at the default level and the failure
/// is reported as a `tracing` warning.
pub fn logger() -> &'static Logger {
    GLOBAL.get_or_init(|| {
        let (config, _warnings) = config::load_config();
        Logger::new(config).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to console logging");
            Logger::default()
        })
    })
}

/// [`Logger::configure`] on the process-wide logger.
pub fn configure(level: Level) -> Result<()> {
    logger().configure(level)
}

/// [`Logger::release`] on the process-wide logger.
pub fn release() {
    logger().release();
}

/// [`Logger::emit`] on the process-wide logger.
pub fn emit(severity: Severity, location: &Location<'_>, message: fmt::Arguments<'_>) {
    logger().emit(severity, location, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_is_a_single_instance() {
        assert!(std::ptr::eq(logger(), logger()));
    }

    // The global instance is shared by every test in this binary, so only
    // operations that leave it on the console are exercised here.
    #[test]
    fn test_release_on_fresh_global_is_noop() {
        release();
        release();
        assert!(!logger().is_file_mode());
    }

    #[test]
    fn test_facade_emit_does_not_panic() {
        emit(
            Severity::Unknown,
            &Location::new(file!(), "test_facade_emit_does_not_panic", line!()),
            format_args!("ignored"),
        );
        crate::clog_debug!("facade {}", "debug");
    }
}
