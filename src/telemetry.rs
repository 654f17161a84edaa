//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "CLT_LOG";

const DEFAULT_FILTER: &str = "u_clt=info,clt_playground=info";

static INIT: Once = Once::new();

/// Installs a global fmt subscriber writing to stderr.
///
/// Reads `CLT_LOG` for filter directives, e.g. `CLT_LOG=u_clt=debug`.
/// Falls back to `u_clt=info` when unset or invalid. Calling it more than
/// once is a no-op. The library itself never calls this; binaries do.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // An already-installed global subscriber (e.g. from a test harness) wins.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
    });
}
