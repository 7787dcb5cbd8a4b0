// clog - platform/config.rs
//
// Logger configuration resolved from the process environment, with
// field-by-field validation. There is no configuration file: every knob is
// an environment variable (see util::constants::ENV_*) or a constructor
// argument.
//
// Invalid values produce actionable warnings and fall back to defaults;
// they never prevent the logger from being built.

use crate::core::level::Level;
use crate::platform::process;
use crate::util::constants;
use std::path::PathBuf;

/// Validated logger configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Level applied when the logger is built.
    pub level: Level,
    /// Colour setting restored whenever the logger leaves file mode.
    pub color: bool,
    /// Directory file-mode logs are created in.
    pub file_dir: PathBuf,
    /// Show the thread id next to the process id.
    pub show_thread_id: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::default(),
            color: process::color_default(),
            file_dir: PathBuf::from(constants::DEFAULT_LOG_DIR),
            show_thread_id: false,
        }
    }
}

/// Resolve configuration from the real process environment.
pub fn load_config() -> (LoggerConfig, Vec<String>) {
    load_config_with(|key| std::env::var(key).ok())
}

/// Resolve configuration through `lookup` (key -> value).
///
/// Returns the validated config and a list of non-fatal warnings.
pub fn load_config_with<F>(lookup: F) -> (LoggerConfig, Vec<String>)
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = LoggerConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    // -- level --
    if let Some(raw) = lookup(constants::ENV_LEVEL) {
        match raw.parse::<Level>() {
            Ok(level) => config.level = level,
            Err(e) => warnings.push(format!(
                "{} = \"{raw}\": {e}. Using default ({}).",
                constants::ENV_LEVEL,
                Level::default(),
            )),
        }
    }

    // -- colour --
    if let Some(raw) = lookup(constants::ENV_COLOR) {
        match parse_bool(&raw) {
            Some(on) => config.color = on,
            None => warnings.push(format!(
                "{} = \"{raw}\" is not a boolean. Expected 1/0, true/false, on/off or yes/no. \
                 Using default ({}).",
                constants::ENV_COLOR,
                config.color,
            )),
        }
    }

    // NO_COLOR wins over everything when set to a non-empty value.
    if lookup(constants::ENV_NO_COLOR).is_some_and(|v| !v.is_empty()) {
        config.color = false;
    }

    // -- file directory --
    if let Some(raw) = lookup(constants::ENV_DIR) {
        if raw.trim().is_empty() {
            warnings.push(format!(
                "{} is empty. Using default ({}).",
                constants::ENV_DIR,
                constants::DEFAULT_LOG_DIR,
            ));
        } else {
            config.file_dir = PathBuf::from(raw);
        }
    }

    // -- thread id --
    if let Some(raw) = lookup(constants::ENV_THREAD_ID) {
        match parse_bool(&raw) {
            Some(on) => config.show_thread_id = on,
            None => warnings.push(format!(
                "{} = \"{raw}\" is not a boolean. Using default (false).",
                constants::ENV_THREAD_ID,
            )),
        }
    }

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    (config, warnings)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
