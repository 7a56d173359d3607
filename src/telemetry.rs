//! Tracing subscriber installation for embedders.
//!
//! The services emit `tracing` events: `info` for mutations, `warn` for rule
//! violations, and `debug` for reads. Embedders that do not install their
//! own subscriber can call [`init_tracing`].

use thiserror::Error;
use tracing_subscriber::{EnvFilter, filter::ParseError, fmt, prelude::*};

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The fallback filter directive could not be parsed.
    #[error("invalid tracing directive: {0}")]
    InvalidDirective(#[from] ParseError),
}

/// Installs a global fmt subscriber filtered by `RUST_LOG`, falling back to
/// `default_directive` (for example `"taskboard=info"`).
///
/// Returns `Ok(true)` when the subscriber was installed and `Ok(false)` when
/// a global subscriber already exists.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidDirective`] when `RUST_LOG` is unset or
/// unparsable and `default_directive` is not a valid filter either.
pub fn init_tracing(default_directive: &str) -> Result<bool, TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(default_directive)?,
    };

    let installed = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
        .is_ok();
    Ok(installed)
}
