//! # Logging
//!
//! Installs the global `tracing` subscriber.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from
//! [`LoggingConfig::level`]. The output format follows
//! [`LoggingConfig::format`]. Events are written to stderr so that stdout
//! carries only command output.

use crate::application::error::{ApplicationResult, InfrastructureError};
use crate::infrastructure::config::{LogFormat, LoggingConfig};
use std::io;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Builds the filter for a logging configuration, preferring `RUST_LOG`.
///
/// # Errors
///
/// Returns an error if `RUST_LOG` is set but is not a valid filter
/// directive, or if it is unset and the configured level is invalid.
pub fn env_filter(config: &LoggingConfig) -> ApplicationResult<EnvFilter> {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(), config)
}

fn filter_from(rust_log: Option<&str>, config: &LoggingConfig) -> ApplicationResult<EnvFilter> {
    match rust_log {
        Some(directives) => EnvFilter::try_new(directives).map_err(|e| {
            InfrastructureError::logging(format!(
                "{} '{directives}' is not a valid filter: {e}",
                EnvFilter::DEFAULT_ENV
            ))
            .into()
        }),
        None => EnvFilter::try_new(config.level()).map_err(|e| {
            InfrastructureError::logging(format!(
                "logging.level '{}' is not a valid filter: {e}",
                config.level()
            ))
            .into()
        }),
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a global subscriber is
/// already installed.
pub fn init_tracing(config: &LoggingConfig) -> ApplicationResult<()> {
    let registry = tracing_subscriber::registry().with(env_filter(config)?);

    let installed = match config.format() {
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(io::stderr))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_target(false).with_writer(io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false).with_writer(io::stderr))
            .try_init(),
    };

    installed.map_err(|e| InfrastructureError::logging(e.to_string()))?;
    tracing::debug!(level = config.level(), format = %config.format(), "tracing initialised");
    Ok(())
}
