//! Diagnostic logging on stderr using tracing.
//!
//! The report goes to stdout; every progress and failure line goes through
//! the subscriber installed here.

use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,groupsync=debug,groupsync_cli=debug,groupsync_directory=debug"
    } else {
        "warn,groupsync=info,groupsync_cli=info,groupsync_directory=info"
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(verbose: bool, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
