use std::io;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info,sqlx=warn,sea_orm=warn";

/// `RUST_LOG` when set, otherwise [`DEFAULT_FILTER`].
fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Compact human-readable output on stdout.
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(filter())
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// One JSON object per event on stdout, with targets and span context.
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(filter())
        .with_target(true)
        .json()
        .with_current_span(true)
        .with_writer(io::stdout)
        .try_init();
}

/// Pick the formatter from a `json` switch. A second call is a no-op.
pub fn init_logging(json: bool) {
    if json { init_logging_json() } else { init_logging_default() }
}
