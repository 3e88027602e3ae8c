//! Diagnostic logging setup.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `CSCAN_LOG=cscan=trace`.
pub const LOG_ENV: &str = "CSCAN_LOG";

/// Initialize tracing for debug output.
///
/// Does nothing unless `CSCAN_LOG` or `RUST_LOG` is set. Logs go to stderr so
/// token output on stdout stays clean. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if std::env::var(LOG_ENV).is_ok() {
            EnvFilter::try_from_env(LOG_ENV)
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::try_from_default_env()
        } else {
            return;
        };

        let filter = match filter {
            Ok(filter) => filter,
            Err(e) => {
                eprintln!("Warning: ignoring invalid log filter: {}", e);
                return;
            }
        };

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
