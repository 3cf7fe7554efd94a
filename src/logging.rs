//! Logging setup for the binary.
//!
//! Standard output carries only the predicted label, so every log line goes to
//! standard error. The default filter is quiet; `RUST_LOG=risk_predictor=debug`
//! shows the solver iterations.

use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "warn";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// `RUST_LOG` was set but could not be parsed.
    #[error("Invalid RUST_LOG directive: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::FromEnvError),
    /// Failed to set the global tracing subscriber.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] TryInitError),
}

fn env_filter() -> Result<EnvFilter, LoggingError> {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        Ok(EnvFilter::try_from_default_env()?)
    } else {
        Ok(EnvFilter::new(DEFAULT_DIRECTIVE))
    }
}

/// Install a global subscriber writing to stderr.
pub fn init() -> Result<(), LoggingError> {
    let filter = env_filter()?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()?;

    Ok(())
}
