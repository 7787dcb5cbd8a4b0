// clog - core/level.rs
//
// Level selectors and record severities, plus the gate between them.
// Pure data definitions with no I/O.

use crate::util::error::ClogError;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Level (configuration selector)
// =============================================================================

/// Configured verbosity, ordered from least to most permissive.
///
/// Raising the level enables more verbose severities. `File` is not a
/// severity of its own: it permits everything and routes records to a
/// timestamped file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Level {
    Info = 1,
    #[default]
    Error = 2,
    Debug = 3,
    File = 4,
}

impl Level {
    /// Returns all variants in gate order.
    pub fn all() -> &'static [Level] {
        &[Level::Info, Level::Error, Level::Debug, Level::File]
    }

    /// Numeric code used by the gate.
    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn from_code(code: i64) -> Option<Level> {
        Level::all().iter().copied().find(|l| l.code() == code)
    }

    /// Lower-case name accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Error => "error",
            Level::Debug => "debug",
            Level::File => "file",
        }
    }

    /// Whether a record of `severity` passes the gate at this level.
    ///
    /// `Severity::Unknown` never passes; unknown records bypass the gate
    /// entirely and are handled by the logger.
    pub fn permits(self, severity: Severity) -> bool {
        severity
            .code()
            .is_some_and(|code| code <= self.code())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = ClogError;

    /// Accepts a name (case-insensitive) or a numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let by_name = Level::all()
            .iter()
            .copied()
            .find(|l| l.name().eq_ignore_ascii_case(trimmed));
        by_name
            .or_else(|| trimmed.parse::<i64>().ok().and_then(Level::from_code))
            .ok_or_else(|| ClogError::InvalidLevel {
                value: s.to_string(),
            })
    }
}

// =============================================================================
// Severity (category of a single record)
// =============================================================================

/// Category of one record.
///
/// `Unknown` stands for any code outside 1-3. It is reported on stderr as
/// an error-style "unknown type" line regardless of the configured level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Error,
    Debug,
    Unknown,
}

impl Severity {
    /// Numeric code, `None` for `Unknown`.
    pub fn code(self) -> Option<i64> {
        match self {
            Severity::Info => Some(1),
            Severity::Error => Some(2),
            Severity::Debug => Some(3),
            Severity::Unknown => None,
        }
    }

    /// Maps 1/2/3 to the known severities and everything else to `Unknown`.
    pub fn from_code(code: i64) -> Severity {
        match code {
            1 => Severity::Info,
            2 => Severity::Error,
            3 => Severity::Debug,
            _ => Severity::Unknown,
        }
    }

    /// Leading character of a rendered record.
    pub fn glyph(self) -> char {
        match self {
            Severity::Info => 'I',
            Severity::Error | Severity::Unknown => 'E',
            Severity::Debug => 'D',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Error => "error",
            Severity::Debug => "debug",
            Severity::Unknown => "unknown",
        }
    }

    /// Errors and the unknown fallback go to stderr on the console.
    pub fn is_error_stream(self) -> bool {
        matches!(self, Severity::Error | Severity::Unknown)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = ClogError;

    /// Accepts `info`, `error`, `debug` (case-insensitive) or any integer
    /// code; integers outside 1-3 become `Unknown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        for severity in [Severity::Info, Severity::Error, Severity::Debug] {
            if severity.label().eq_ignore_ascii_case(trimmed) {
                return Ok(severity);
            }
        }
        trimmed
            .parse::<i64>()
            .map(Severity::from_code)
            .map_err(|_| ClogError::InvalidSeverity {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: [Severity; 3] = [Severity::Info, Severity::Error, Severity::Debug];

    #[test]
    fn test_gate_matches_numeric_comparison_for_every_pair() {
        for level in Level::all() {
            for severity in KNOWN {
                let expected = severity.code().unwrap() <= level.code();
                assert_eq!(
                    level.permits(severity),
                    expected,
                    "level {level} / severity {severity}"
                );
            }
        }
    }

    #[test]
    fn test_gate_examples() {
        assert!(Level::Info.permits(Severity::Info));
        assert!(!Level::Info.permits(Severity::Error));
        assert!(Level::Error.permits(Severity::Info));
        assert!(!Level::Error.permits(Severity::Debug));
        assert!(Level::Debug.permits(Severity::Debug));
    }

    #[test]
    fn test_file_level_permits_all_known_severities() {
        for severity in KNOWN {
            assert!(Level::File.permits(severity));
        }
    }

    #[test]
    fn test_unknown_never_passes_gate() {
        for level in Level::all() {
            assert!(!level.permits(Severity::Unknown));
        }
    }

    #[test]
    fn test_default_level_is_error() {
        assert_eq!(Level::default(), Level::Error);
    }

    #[test]
    fn test_level_parses_names_and_codes() {
        assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!(" File ".parse::<Level>().unwrap(), Level::File);
        assert_eq!("2".parse::<Level>().unwrap(), Level::Error);
        assert_eq!("4".parse::<Level>().unwrap(), Level::File);
    }

    #[test]
    fn test_level_rejects_out_of_range_and_garbage() {
        assert!(matches!(
            "0".parse::<Level>(),
            Err(ClogError::InvalidLevel { .. })
        ));
        assert!("5".parse::<Level>().is_err());
        assert!("verbose".parse::<Level>().is_err());
    }

    #[test]
    fn test_severity_from_code_maps_unknown() {
        assert_eq!(Severity::from_code(1), Severity::Info);
        assert_eq!(Severity::from_code(2), Severity::Error);
        assert_eq!(Severity::from_code(3), Severity::Debug);
        assert_eq!(Severity::from_code(4), Severity::Unknown);
        assert_eq!(Severity::from_code(99), Severity::Unknown);
        assert_eq!(Severity::from_code(-1), Severity::Unknown);
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!("Error".parse::<Severity>().unwrap(), Severity::Error);
        assert_eq!("3".parse::<Severity>().unwrap(), Severity::Debug);
        assert_eq!("99".parse::<Severity>().unwrap(), Severity::Unknown);
        assert!(matches!(
            "warn".parse::<Severity>(),
            Err(ClogError::InvalidSeverity { .. })
        ));
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Severity::Info.glyph(), 'I');
        assert_eq!(Severity::Error.glyph(), 'E');
        assert_eq!(Severity::Debug.glyph(), 'D');
        assert_eq!(Severity::Unknown.glyph(), 'E');
    }

    #[test]
    fn test_error_stream_routing() {
        assert!(!Severity::Info.is_error_stream());
        assert!(Severity::Error.is_error_stream());
        assert!(!Severity::Debug.is_error_stream());
        assert!(Severity::Unknown.is_error_stream());
    }
}
