use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the process-wide tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise request tracing from tower-http and
/// axum stays at info. Output goes to stdout so environments that hide
/// stderr still show logs. Calling this twice is a no-op.
pub fn init_logging_default() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,axum=info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}
