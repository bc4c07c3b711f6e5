use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `langsync=trace`.
pub const LOG_ENV: &str = "LANGSYNC_LOG";

/// Install the stderr log subscriber. `LANGSYNC_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("langsync=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
