//! Subscriber setup for the two faces of the binary: the HTTP service logs
//! at the configured level on stdout, while the report CLI keeps stdout
//! reserved for the rendered report and pushes warnings to stderr.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

/// Dependencies of the HTTP stack that drown out diagnostics at `debug`.
const NOISE_DIRECTIVES: &[&str] = &["hyper=warn", "tower=warn", "mio=warn"];

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{value}'")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("log subscriber already installed")]
    AlreadyInstalled(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Installs the service subscriber. An explicit `RUST_LOG` wins over the
/// configured level; either way the HTTP dependencies stay damped to `warn`.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => service_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}

/// Subscriber for `hse report`: warnings only, written to stderr, so the
/// report text on stdout stays pipeable.
pub fn init_quiet() -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(service_filter("warn")?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}

fn service_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    let spec = std::iter::once(level)
        .chain(NOISE_DIRECTIVES.iter().copied())
        .collect::<Vec<_>>()
        .join(",");

    EnvFilter::try_new(&spec).map_err(|source| TelemetryError::Filter {
        value: level.to_string(),
        source,
    })
}
