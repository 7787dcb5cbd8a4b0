// clog - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all clog operations.
#[derive(Debug)]
pub enum ClogError {
    /// The file-mode log file could not be created.
    FileOpen { path: PathBuf, source: io::Error },

    /// A level selector could not be parsed.
    InvalidLevel { value: String },

    /// A severity could not be parsed.
    InvalidSeverity { value: String },
}

impl fmt::Display for ClogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileOpen { path, source } => write!(
                f,
                "Cannot open log file '{}': {source}",
                path.display()
            ),
            Self::InvalidLevel { value } => write!(
                f,
                "Unknown log level '{value}'. Expected info, error, debug, file or 1-4"
            ),
            Self::InvalidSeverity { value } => write!(
                f,
                "Unknown severity '{value}'. Expected info, error, debug or a numeric code"
            ),
        }
    }
}

impl std::error::Error for ClogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileOpen { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for clog results.
pub type Result<T> = std::result::Result<T, ClogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_file_open_display_names_path_and_keeps_source() {
        let err = ClogError::FileOpen {
            path: PathBuf::from("/nope/clog_20240101000000.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let text = err.to_string();
        assert!(text.contains("/nope/clog_20240101000000.txt"), "{text}");
        assert!(text.contains("denied"), "{text}");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_parse_errors_have_no_source() {
        let err = ClogError::InvalidLevel {
            value: "loud".to_string(),
        };
        assert!(err.to_string().contains("'loud'"));
        assert!(err.source().is_none());
    }
}
