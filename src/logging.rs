//! Logger setup for the `patterns` binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber for the `patterns` binary. `RUST_LOG` wins
/// over the defaults when it is set.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "design_patterns=debug,info"
    } else {
        "design_patterns=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
