//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the riskcast tracing/logging system.
///
/// Reads the `RISKCAST_LOG` environment variable for per-module log levels.
/// Format: `RISKCAST_LOG=riskcast_analysis::simulation=debug,riskcast_core=warn`
///
/// Falls back to `riskcast=info` if `RISKCAST_LOG` is not set or is invalid.
/// Library code never calls this; binaries and tests opt in.
///
/// Idempotent: later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("RISKCAST_LOG")
            .unwrap_or_else(|_| EnvFilter::new("riskcast=info"));

        // try_init: an embedding application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();

        tracing::debug!(version = crate::constants::VERSION, "riskcast tracing initialized");
    });
}
