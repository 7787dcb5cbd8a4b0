// clog - util/constants.rs
//
// Single source of truth for named constants, formats, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "clog";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Log file naming
// =============================================================================

/// Prefix of every file created in file mode.
pub const LOG_FILE_PREFIX: &str = "clog_";

/// Extension of every file created in file mode.
pub const LOG_FILE_EXTENSION: &str = "txt";

/// chrono format for the timestamp embedded in the file name
/// (`clog_YYYYMMDDhhmmss.txt`).
pub const LOG_FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Directory file-mode logs are created in when none is configured.
pub const DEFAULT_LOG_DIR: &str = ".";

// =============================================================================
// Record format
// =============================================================================

/// chrono format for the timestamp shown in every record.
pub const RECORD_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Message written instead of the caller's text when the severity is not
/// one of the known values.
pub const UNKNOWN_SEVERITY_MESSAGE: &str = "unknown type";

/// Separator between the call-site segment and the message.
pub const MESSAGE_SEPARATOR: &str = " > ";

// =============================================================================
// ANSI colour codes
// =============================================================================

/// Resets all attributes.
pub const COLOR_RESET: &str = "\x1b[0m";

/// Error lines.
pub const COLOR_RED: &str = "\x1b[31m";

/// Debug lines.
pub const COLOR_YELLOW: &str = "\x1b[33m";

/// Function name and line number of every record.
pub const COLOR_BLUE: &str = "\x1b[34m";

// =============================================================================
// Environment configuration
// =============================================================================

/// Initial level: a name (`info`, `error`, `debug`, `file`) or code (1-4).
pub const ENV_LEVEL: &str = "CLOG_LEVEL";

/// Colour override: `1/0`, `true/false`, `on/off`, `yes/no`.
pub const ENV_COLOR: &str = "CLOG_COLOR";

/// <https://no-color.org>: any non-empty value disables colour.
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Directory for file-mode logs.
pub const ENV_DIR: &str = "CLOG_DIR";

/// Include the thread id next to the process id.
pub const ENV_THREAD_ID: &str = "CLOG_THREAD_ID";

// =============================================================================
// Diagnostics
// =============================================================================

/// Default filter for the logger's own `tracing` diagnostics.
pub const DEFAULT_DIAGNOSTIC_LEVEL: &str = "warn";
