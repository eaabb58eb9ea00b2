//! Structured logging setup

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

use crate::types::*;

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `log_level`. Logs go to stderr so audit output on stdout
/// stays clean: JSON lines when `json` is set, pretty text otherwise.
pub fn init_tracing(log_level: &str, json: bool) -> RentalResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fleet_rental_core={}", log_level)));

    let result = if json {
        let formatting_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(true)
            .with_span_events(FmtSpan::CLOSE);

        Registry::default()
            .with(env_filter)
            .with(formatting_layer)
            .try_init()
    } else {
        let formatting_layer = fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE);

        Registry::default()
            .with(env_filter)
            .with(formatting_layer)
            .try_init()
    };

    result.map_err(|e| RentalError::Internal(format!("Failed to initialize tracing: {}", e)))?;

    tracing::debug!(log_level, json, "logging initialized");
    Ok(())
}
