//! Logging setup for the `soma` binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Install the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` (for example `RUST_LOG=soma_lexer=debug`),
/// defaulting to warnings only. Output goes to stderr so that command
/// output on stdout stays clean. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        // Another subscriber may already be installed, e.g. by an embedding test.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .try_init();
    });
}
