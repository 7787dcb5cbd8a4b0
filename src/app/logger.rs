// clog - app/logger.rs
//
// The logger: level gate, destination routing, file-mode lifecycle.
//
// Design principles:
// - One mutex guards all mutable state. Configuration changes and the
//   resolve-destination-then-write step of `emit` are each one critical
//   section, so no caller can observe a half-switched destination.
// - The destination is an enum, so an open file exists exactly when the
//   logger is in file mode.
// - Colour is always off while a file is the destination.
// - Write failures are not reported to the caller; they surface only as
//   `tracing` warnings. Opening the file is the one failure callers see.

use crate::core::callsite::Location;
use crate::core::level::{Level, Severity};
use crate::core::record::{ProcessIdentity, Record};
use crate::platform::clock::{Clock, SystemClock};
use crate::platform::config::LoggerConfig;
use crate::platform::console::Console;
use crate::platform::{fs, process};
use crate::util::constants::UNKNOWN_SEVERITY_MESSAGE;
use crate::util::error::{ClogError, Result};
use std::fmt;
use std::fs::File;
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Where records currently go.
enum Destination {
    Console,
    File {
        path: PathBuf,
        writer: LineWriter<File>,
    },
}

struct State {
    level: Level,
    color: bool,
    destination: Destination,
    console: Console,
}

impl State {
    /// Back to the console with the configured colour default.
    ///
    /// Flushes and closes the file if one is open; no-op otherwise.
    fn close_file(&mut self, color_default: bool) {
        if let Destination::File { path, mut writer } =
            std::mem::replace(&mut self.destination, Destination::Console)
        {
            if let Err(e) = writer.flush() {
                tracing::warn!(path = %path.display(), error = %e, "Failed to flush log file on close");
            }
            tracing::debug!(path = %path.display(), "Log file closed");
        }
        self.color = color_default;
    }
}

/// A level-gated logger writing to the console or a timestamped file.
///
/// Safe to share between threads (`&Logger` is all any operation needs).
pub struct Logger {
    state: Mutex<State>,
    clock: Box<dyn Clock>,
    color_default: bool,
    file_dir: PathBuf,
    show_thread_id: bool,
}

impl Logger {
    /// Build a logger on the real stdout/stderr and system clock, then apply
    /// `config.level` (which opens a file when it is `Level::File`).
    pub fn new(config: LoggerConfig) -> Result<Self> {
        Self::with_parts(config, Console::stdio(), Box::new(SystemClock))
    }

    /// Build a logger with explicit console streams and clock.
    pub fn with_parts(
        config: LoggerConfig,
        console: Console,
        clock: Box<dyn Clock>,
    ) -> Result<Self> {
        let logger = Self::console_only(&config, console, clock);
        if config.level == Level::File {
            logger.configure(Level::File)?;
        }
        Ok(logger)
    }

    fn console_only(config: &LoggerConfig, console: Console, clock: Box<dyn Clock>) -> Self {
        let level = match config.level {
            // File mode is entered through `configure`, never constructed directly.
            Level::File => Level::default(),
            other => other,
        };
        Self {
            state: Mutex::new(State {
                level,
                color: config.color,
                destination: Destination::Console,
                console,
            }),
            clock,
            color_default: config.color,
            file_dir: config.file_dir.clone(),
            show_thread_id: config.show_thread_id,
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A panic while holding the lock cannot leave State inconsistent
        // (every field is replaced whole), so a poisoned lock is reused.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Set the level.
    ///
    /// `Level::File` creates `clog_YYYYMMDDhhmmss.txt` in the configured
    /// directory (truncating an existing file of that name), switches all
    /// output to it and disables colour. Selecting it again creates a new
    /// file and closes the previous one.
    ///
    /// Any other level closes an open file and returns output to the
    /// console with colour restored to its default.
    ///
    /// # Errors
    ///
    /// `ClogError::FileOpen` when the file cannot be created. The logger is
    /// then left exactly as it was before the call.
    pub fn configure(&self, level: Level) -> Result<()> {
        let mut state = self.lock();

        if level != Level::File {
            state.level = level;
            state.close_file(self.color_default);
            tracing::debug!(level = %level, "Logger level set");
            return Ok(());
        }

        let path = self.file_dir.join(fs::log_file_name(self.clock.now()));
        let file = match fs::create_truncated(&path) {
            Ok(file) => file,
            Err(source) => {
                tracing::warn!(path = %path.display(), error = %source, "Cannot open log file");
                return Err(ClogError::FileOpen { path, source });
            }
        };

        // The new file is open; only now is the previous one let go.
        state.close_file(self.color_default);
        state.level = Level::File;
        state.color = false;
        state.destination = Destination::File {
            path: path.clone(),
            writer: LineWriter::new(file),
        };
        tracing::debug!(path = %path.display(), "Logging to file");
        Ok(())
    }

    /// Close the file (if any) and return to the console with colour
    /// restored. The level is left unchanged.
    ///
    /// Idempotent. Must be called before exit whenever file mode was used,
    /// so the file is flushed and closed deterministically.
    pub fn release(&self) {
        self.lock().close_file(self.color_default);
    }

    /// Write one record if `severity` passes the gate.
    ///
    /// Known severities go to the file in file mode, otherwise Info/Debug
    /// to stdout and Error to stderr. `Severity::Unknown` bypasses the
    /// gate and always writes an "unknown type" line to stderr.
    pub fn emit(&self, severity: Severity, location: &Location<'_>, message: fmt::Arguments<'_>) {
        if severity == Severity::Unknown {
            self.write(
                severity,
                location,
                format_args!("{UNKNOWN_SEVERITY_MESSAGE}"),
            );
        } else {
            self.write(severity, location, message);
        }
    }

    fn write(&self, severity: Severity, location: &Location<'_>, message: fmt::Arguments<'_>) {
        let mut state = self.lock();
        if severity != Severity::Unknown && !state.level.permits(severity) {
            return;
        }

        let record = Record {
            severity,
            timestamp: self.clock.now(),
            process: ProcessIdentity {
                pid: process::process_id(),
                tid: self.show_thread_id.then(process::thread_id),
            },
            location: *location,
            message,
        };
        let line = record.render(state.color).to_string();

        let state = &mut *state;
        let result = match (&mut state.destination, severity) {
            (_, Severity::Unknown) => state.console.err().write_all(line.as_bytes()),
            (Destination::File { writer, .. }, _) => writer.write_all(line.as_bytes()),
            (Destination::Console, s) if s.is_error_stream() => {
                state.console.err().write_all(line.as_bytes())
            }
            (Destination::Console, _) => state.console.out().write_all(line.as_bytes()),
        };

        if let Err(e) = result {
            tracing::warn!(severity = %severity, error = %e, "Log record lost");
        }
    }

    /// Flush the active destination and both console streams.
    pub fn flush(&self) -> io::Result<()> {
        let mut state = self.lock();
        if let Destination::File { writer, .. } = &mut state.destination {
            writer.flush()?;
        }
        state.console.flush()
    }

    /// Current level.
    pub fn level(&self) -> Level {
        self.lock().level
    }

    /// Whether output currently goes to a file.
    pub fn is_file_mode(&self) -> bool {
        matches!(self.lock().destination, Destination::File { .. })
    }

    /// Whether ANSI colour is currently emitted.
    pub fn color_enabled(&self) -> bool {
        self.lock().color
    }

    /// Path of the open log file, if any.
    pub fn file_path(&self) -> Option<PathBuf> {
        match &self.lock().destination {
            Destination::File { path, .. } => Some(path.clone()),
            Destination::Console => None,
        }
    }

    /// Directory file-mode logs are created in.
    pub fn file_dir(&self) -> &Path {
        &self.file_dir
    }
}

impl Default for Logger {
    /// Console logger at the default level on the real stdio streams.
    fn default() -> Self {
        Self::console_only(
            &LoggerConfig::default(),
            Console::stdio(),
            Box::new(SystemClock),
        )
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("file", &self.file_path())
            .field("color", &self.color_enabled())
            .finish_non_exhaustive()
    }
}
