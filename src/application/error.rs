//! # Application Errors
//!
//! Error types for the application layer.
//!
//! The pricing engines never fail; these errors come from the surfaces
//! around them: parsing caller input, loading configuration, setting up
//! logging, and serializing results.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)                 - Unparseable service, year, or action
//! ├── Infrastructure(InfrastructureError) - Configuration, logging, serialization, I/O
//! └── Validation(String)                  - Input validation failures
//! ```
//!
//! # Examples
//!
//! ```
//! use package_pricing::application::error::{ApplicationError, InfrastructureError};
//!
//! let err = ApplicationError::validation("log level must not be empty");
//! assert!(err.is_validation());
//!
//! let infra_err = InfrastructureError::logging("subscriber already set");
//! let app_err: ApplicationError = infra_err.into();
//! assert!(app_err.to_string().contains("logging"));
//! ```

use crate::domain::errors::DomainError;
use thiserror::Error;

/// Infrastructure layer error.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Configuration could not be loaded or deserialized.
    #[error("configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("logging error: {0}")]
    Logging(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InfrastructureError {
    /// Creates a logging error.
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging(message.into())
    }
}

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from parsing caller input.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Infrastructure error.
    #[error("infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    /// Validation failed.
    #[error("validation error: {0}")]
    Validation(String),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<config::ConfigError> for ApplicationError {
    fn from(err: config::ConfigError) -> Self {
        Self::Infrastructure(err.into())
    }
}

impl From<serde_json::Error> for ApplicationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Infrastructure(err.into())
    }
}

impl From<std::io::Error> for ApplicationError {
    fn from(err: std::io::Error) -> Self {
        Self::Infrastructure(err.into())
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
