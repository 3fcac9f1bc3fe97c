use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "pocketbook=info,pocket_core=info,pocket_storage_json=info";

/// Initializes the global tracing subscriber, logging to stderr so command
/// output on stdout stays clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
