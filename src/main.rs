// clog - main.rs
//
// Command-line front end. Handles:
// 1. CLI argument parsing
// 2. Diagnostics initialisation (debug mode support)
// 3. Logger configuration (environment, then CLI overrides)
// 4. Emitting one record and releasing the destination

use clap::Parser;
use clog::platform::config;
use clog::util;
use clog::{Level, Logger, Severity};
use std::path::PathBuf;

/// clog - write one formatted log record from the shell.
///
/// Records go to stdout (info, debug) or stderr (error), or to
/// clog_YYYYMMDDhhmmss.txt when the level is "file".
#[derive(Parser, Debug)]
#[command(name = "clog", version, about)]
struct Cli {
    /// Message text; multiple words are joined with spaces.
    #[arg(required = true)]
    message: Vec<String>,

    /// Level: info, error, debug, file (or 1-4). Overrides CLOG_LEVEL.
    #[arg(short = 'l', long = "level")]
    level: Option<Level>,

    /// Severity of the record: info, error, debug, or a numeric code.
    #[arg(short = 's', long = "severity", default_value = "info")]
    severity: Severity,

    /// Directory for file mode. Overrides CLOG_DIR.
    #[arg(long = "dir")]
    dir: Option<PathBuf>,

    /// Disable ANSI colour.
    #[arg(long = "no-color")]
    no_color: bool,

    /// Show the thread id next to the process id.
    #[arg(long = "thread-id")]
    thread_id: bool,

    /// Enable the logger's own diagnostics (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    let (mut config, _warnings) = config::load_config();
    if let Some(level) = cli.level {
        config.level = level;
    }
    if let Some(dir) = cli.dir {
        config.file_dir = dir;
    }
    if cli.no_color {
        config.color = false;
    }
    if cli.thread_id {
        config.show_thread_id = true;
    }

    tracing::debug!(
        version = util::constants::APP_VERSION,
        level = %config.level,
        "clog starting"
    );

    let logger = match Logger::new(config) {
        Ok(logger) => logger,
        Err(e) => {
            tracing::error!(error = %e, "Failed to configure logger");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let message = cli.message.join(" ");
    clog::clog!(logger: &logger, cli.severity, "{}", message);

    if let Err(e) = logger.flush() {
        tracing::warn!(error = %e, "Failed to flush output");
    }
    logger.release();
}
