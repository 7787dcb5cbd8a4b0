// clog - lib.rs
//
// Library entry point: a minimal level-gated logger that writes one line per
// record to stdout/stderr, or to a timestamped file in file mode.
//
// ```rust,no_run
// use clog::{clog_error, clog_info, Level, Logger, LoggerConfig};
//
// let logger = Logger::new(LoggerConfig::default())?;
// logger.configure(Level::Debug)?;
// clog_info!(logger: &logger, "{} started", "worker");
// logger.configure(Level::File)?;
// clog_error!(logger: &logger, "disk {} full", 3);
// logger.release();
// # Ok::<(), clog::ClogError>(())
// ```

pub mod app;
pub mod core;
pub mod platform;
pub mod util;

pub use crate::app::logger::Logger;
pub use crate::core::callsite::Location;
pub use crate::core::level::{Level, Severity};
pub use crate::platform::config::LoggerConfig;
pub use crate::util::error::ClogError;

/// Name of the item the call-site macros plant in the caller's function.
#[doc(hidden)]
pub const CALLSITE_MARKER: &str = "__clog_here";

/// Name of the enclosing function, as a `&'static str`.
#[doc(hidden)]
#[macro_export]
macro_rules! __clog_function {
    () => {{
        fn __clog_here() {}
        fn __clog_type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::core::callsite::function_from_type_name(__clog_type_name_of(__clog_here))
    }};
}

/// [`Location`] of the invocation: file, enclosing function and line.
#[macro_export]
macro_rules! here {
    () => {
        $crate::core::callsite::Location::new(
            ::std::file!(),
            $crate::__clog_function!(),
            ::std::line!(),
        )
    };
}

/// Emit a record with an explicit severity.
///
/// `clog!(severity, "fmt", args..)` uses the process-wide logger;
/// `clog!(logger: &logger, severity, "fmt", args..)` uses the given one.
#[macro_export]
macro_rules! clog {
    (logger: $logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.emit($severity, &$crate::here!(), ::std::format_args!($($arg)+))
    };
    ($severity:expr, $($arg:tt)+) => {
        $crate::app::global::emit($severity, &$crate::here!(), ::std::format_args!($($arg)+))
    };
}

/// Emit an info record. Accepts the same `logger:` prefix as [`clog!`].
#[macro_export]
macro_rules! clog_info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::clog!(logger: $logger, $crate::Severity::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::clog!($crate::Severity::Info, $($arg)+)
    };
}

/// Emit an error record. Accepts the same `logger:` prefix as [`clog!`].
#[macro_export]
macro_rules! clog_error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::clog!(logger: $logger, $crate::Severity::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::clog!($crate::Severity::Error, $($arg)+)
    };
}

/// Emit a debug record. Accepts the same `logger:` prefix as [`clog!`].
#[macro_export]
macro_rules! clog_debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::clog!(logger: $logger, $crate::Severity::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::clog!($crate::Severity::Debug, $($arg)+)
    };
}
