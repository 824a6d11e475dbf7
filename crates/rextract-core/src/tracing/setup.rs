//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the rextract tracing/logging system.
///
/// Reads the `REXTRACT_LOG` environment variable for per-subsystem log
/// levels. Format: `REXTRACT_LOG=rextract_analysis=debug,rextract_cli=info`
///
/// Falls back to `rextract=info` if `REXTRACT_LOG` is not set or is invalid.
///
/// Diagnostics go to stderr; stdout carries only extraction reports.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("REXTRACT_LOG")
            .unwrap_or_else(|_| EnvFilter::new("rextract=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    });
}
