// clog - util/logging.rs
//
// Diagnostics for the logger itself (file opened, open failures, lost
// writes, configuration warnings), routed through `tracing`.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//
// Output: stderr. Records produced by the logger never pass through here.

use tracing_subscriber::EnvFilter;

/// Initialise the diagnostic subscriber.
///
/// Priority: RUST_LOG env var > `debug_flag` > default "warn".
/// Safe to call more than once; later calls are ignored.
pub fn init(debug_flag: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(super::constants::DEFAULT_DIAGNOSTIC_LEVEL)
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            app = super::constants::APP_NAME,
            version = super::constants::APP_VERSION,
            "Diagnostics initialised"
        );
    }
}
