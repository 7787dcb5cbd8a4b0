// clog - platform/fs.rs
//
// Filesystem helpers for file mode: naming and creating the log file.

use crate::util::constants::{LOG_FILE_EXTENSION, LOG_FILE_PREFIX, LOG_FILE_TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

/// File name for a log activated at `at`: `clog_YYYYMMDDhhmmss.txt`.
///
/// Uses the calendar year and 1-based month, matching the timestamps
/// written inside the file.
pub fn log_file_name(at: NaiveDateTime) -> String {
    format!(
        "{LOG_FILE_PREFIX}{}.{LOG_FILE_EXTENSION}",
        at.format(LOG_FILE_TIMESTAMP_FORMAT)
    )
}

/// Create `path` for writing, truncating any existing content.
///
/// The parent directory must already exist; it is never created here.
pub fn create_truncated(path: &Path) -> io::Result<File> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    tracing::debug!(path = %path.display(), "Log file created");
    Ok(file)
}
