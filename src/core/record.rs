// clog - core/record.rs
//
// Rendering of a single record into its text line. Pure: the caller
// supplies the timestamp, process identity and location, so the output is
// fully determined by the inputs.
//
// Layout:
//   <open><G>[<YYYY-MM-DD hh:mm:ss> <pid>][<file>]<blue><func>:<line><close> > <msg><reset>\n
//
// Info only colours the function segment. Error, Debug and the unknown
// fallback colour the whole line in their own colour.

use crate::core::callsite::Location;
use crate::core::level::Severity;
use crate::util::constants::{
    COLOR_BLUE, COLOR_RED, COLOR_RESET, COLOR_YELLOW, MESSAGE_SEPARATOR,
    RECORD_TIMESTAMP_FORMAT,
};
use chrono::NaiveDateTime;
use std::fmt;

/// Identity of the emitting process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessIdentity {
    pub pid: u32,
    /// Shown as `<pid>:<tid>` when present.
    pub tid: Option<u64>,
}

/// Everything needed to render one line.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub severity: Severity,
    /// Local wall-clock time of the call.
    pub timestamp: NaiveDateTime,
    pub process: ProcessIdentity,
    pub location: Location<'a>,
    pub message: fmt::Arguments<'a>,
}

/// Escape sequences applied to one line.
struct Palette {
    open: &'static str,
    func: &'static str,
    close: &'static str,
    reset: &'static str,
}

impl Palette {
    const PLAIN: Palette = Palette {
        open: "",
        func: "",
        close: "",
        reset: "",
    };

    fn for_severity(severity: Severity, color: bool) -> Palette {
        if !color {
            return Palette::PLAIN;
        }
        match severity {
            Severity::Info => Palette {
                open: "",
                func: COLOR_BLUE,
                close: COLOR_RESET,
                reset: "",
            },
            Severity::Error | Severity::Unknown => Palette {
                open: COLOR_RED,
                func: COLOR_BLUE,
                close: COLOR_RED,
                reset: COLOR_RESET,
            },
            Severity::Debug => Palette {
                open: COLOR_YELLOW,
                func: COLOR_BLUE,
                close: COLOR_YELLOW,
                reset: COLOR_RESET,
            },
        }
    }
}

impl<'a> Record<'a> {
    /// Display adapter producing the full line, newline included.
    pub fn render(&self, color: bool) -> Rendered<'_, 'a> {
        Rendered {
            record: self,
            color,
        }
    }
}

/// A record bound to a colour decision; see [`Record::render`].
pub struct Rendered<'r, 'a> {
    record: &'r Record<'a>,
    color: bool,
}

impl fmt::Display for Rendered<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rec = self.record;
        let palette = Palette::for_severity(rec.severity, self.color);

        write!(
            f,
            "{}{}[{} {}",
            palette.open,
            rec.severity.glyph(),
            rec.timestamp.format(RECORD_TIMESTAMP_FORMAT),
            rec.process.pid
        )?;
        if let Some(tid) = rec.process.tid {
            write!(f, ":{tid}")?;
        }
        writeln!(
            f,
            "][{}]{}{}:{}{}{}{}{}",
            rec.location.base_name(),
            palette.func,
            rec.location.function,
            rec.location.line,
            palette.close,
            MESSAGE_SEPARATOR,
            rec.message,
            palette.reset
        )
    }
}
