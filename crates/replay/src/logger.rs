use std::sync::Once;

use tracing_subscriber::{EnvFilter, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Installs the global subscriber once.
///
/// Reads `RUST_LOG` and falls back to `info`.
pub fn setup_logger() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt::Subscriber::builder()
            .compact()
            .without_time()
            .with_target(false)
            .with_env_filter(filter)
            .finish()
            .init();
    });
}
