// clog - core/callsite.rs
//
// Source location of a record: file, enclosing function, line.
// The macros in `lib.rs` fill this in automatically; callers may also
// build it by hand (for example when forwarding records from elsewhere).

/// Where a record was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    /// Source path as given by the caller (usually `file!()`).
    pub file: &'a str,
    /// Name of the calling function.
    pub function: &'a str,
    pub line: u32,
}

impl<'a> Location<'a> {
    pub fn new(file: &'a str, function: &'a str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// Final path segment of `file`.
    pub fn base_name(&self) -> &'a str {
        base_name(self.file)
    }
}

/// Final segment of a source path. Both `/` and `\` separate segments so
/// that paths produced on Windows hosts render the same way.
pub fn base_name(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(path)
}

/// Reduces the type name of an item nested in a function to the bare
/// function name.
///
/// `my_crate::net::Server::accept::__clog_here` becomes `accept`;
/// closure and async-block segments (`{{closure}}`) are dropped so a
/// record logged inside a closure names the function that contains it.
pub fn function_from_type_name(type_name: &str) -> &str {
    let mut name = type_name
        .strip_suffix(crate::CALLSITE_MARKER)
        .and_then(|n| n.strip_suffix("::"))
        .unwrap_or(type_name);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name.rsplit("::").next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_unix_path() {
        assert_eq!(base_name("src/app/logger.rs"), "logger.rs");
    }

    #[test]
    fn test_base_name_windows_path() {
        assert_eq!(base_name(r"src\app\logger.rs"), "logger.rs");
    }

    // Edge case: no separator at all
    #[test]
    fn test_base_name_without_separator() {
        assert_eq!(base_name("main.rs"), "main.rs");
    }

    #[test]
    fn test_location_base_name() {
        let loc = Location::new("/home/u/proj/src/main.rs", "main", 7);
        assert_eq!(loc.base_name(), "main.rs");
        assert_eq!(loc.line, 7);
    }

    #[test]
    fn test_function_from_type_name_plain() {
        assert_eq!(
            function_from_type_name("clog::app::logger::emit::__clog_here"),
            "emit"
        );
    }

    #[test]
    fn test_function_from_type_name_strips_closures() {
        assert_eq!(
            function_from_type_name("demo::worker::run::{{closure}}::{{closure}}::__clog_here"),
            "run"
        );
    }

    #[test]
    fn test_function_from_type_name_without_marker() {
        assert_eq!(function_from_type_name("demo::main"), "main");
    }

    #[test]
    fn test_function_macro_names_enclosing_function() {
        let name = crate::__clog_function!();
        assert_eq!(name, "test_function_macro_names_enclosing_function");
    }

    #[test]
    fn test_function_macro_inside_closure() {
        let name = (|| crate::__clog_function!())();
        assert_eq!(name, "test_function_macro_inside_closure");
    }

    #[test]
    fn test_here_macro_captures_file_and_line() {
        let line = line!() + 1;
        let loc = crate::here!();
        assert_eq!(loc.base_name(), "callsite.rs");
        assert_eq!(loc.line, line);
        assert_eq!(loc.function, "test_here_macro_captures_file_and_line");
    }
}
