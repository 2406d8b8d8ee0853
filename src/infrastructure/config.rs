//! # Configuration
//!
//! Layered application configuration.
//!
//! Sources, later ones overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. A TOML file (`package-pricing.toml` in the working directory if
//!    present, or an explicit path)
//! 3. Environment variables prefixed with `PACKAGE_PRICING`, using `__` to
//!    separate nesting levels, e.g. `PACKAGE_PRICING__PRICING__DEFAULT_YEAR=2021`
//!
//! A `.env` file is loaded into the environment first.
//!
//! # Examples
//!
//! ```
//! use package_pricing::infrastructure::config::{AppConfig, LogFormat};
//! use package_pricing::domain::value_objects::ServiceYear;
//!
//! let config = AppConfig::from_toml_str(r#"
//!     [pricing]
//!     default_year = 2021
//!
//!     [logging]
//!     format = "json"
//! "#).unwrap();
//! assert_eq!(config.pricing().default_year(), ServiceYear::Y2021);
//! assert_eq!(config.logging().format(), LogFormat::Json);
//! assert_eq!(config.logging().level(), "info");
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::value_objects::enums::ServiceYear;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "package-pricing.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "PACKAGE_PRICING";

/// Default log filter directive.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human readable output.
    Pretty,
    /// Single-line human readable output.
    #[default]
    Compact,
    /// Newline-delimited JSON.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Compact => write!(f, "compact"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Pricing defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Year used when the caller does not pick one.
    #[serde(default)]
    default_year: ServiceYear,
}

impl PricingConfig {
    /// Creates a pricing configuration.
    #[must_use]
    pub const fn new(default_year: ServiceYear) -> Self {
        Self { default_year }
    }

    /// Returns the default pricing year.
    #[inline]
    #[must_use]
    pub const fn default_year(&self) -> ServiceYear {
        self.default_year
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `package_pricing=debug`.
    #[serde(default = "default_log_level")]
    level: String,
    /// Output format.
    #[serde(default)]
    format: LogFormat,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl LoggingConfig {
    /// Creates a logging configuration.
    #[must_use]
    pub fn new(level: impl Into<String>, format: LogFormat) -> Self {
        Self {
            level: level.into(),
            format,
        }
    }

    /// Returns the filter directive.
    #[inline]
    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Returns the output format.
    #[inline]
    #[must_use]
    pub const fn format(&self) -> LogFormat {
        self.format
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_LEVEL, LogFormat::default())
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Pricing defaults.
    #[serde(default)]
    pricing: PricingConfig,
    /// Logging settings.
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Loads configuration from the file and environment layers.
    ///
    /// With `path = None` the default file is optional; an explicit path must
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized, or if
    /// the result fails validation.
    pub fn load(path: Option<&Path>) -> ApplicationResult<Self> {
        if let Ok(dotenv) = dotenvy::dotenv() {
            tracing::debug!(path = %dotenv.display(), "loaded .env file");
        }

        Self::load_layers(path, Self::environment())
    }

    /// Environment layer reading `PACKAGE_PRICING__SECTION__KEY` variables.
    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    fn load_layers(path: Option<&Path>, environment: Environment) -> ApplicationResult<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Self::from_builder(Config::builder().add_source(file).add_source(environment))
    }

    /// Parses configuration from a TOML document, without file or
    /// environment layers.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_toml_str(toml: &str) -> ApplicationResult<Self> {
        Self::from_builder(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> ApplicationResult<Self> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialization alone cannot.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the log level is not a valid filter
    /// directive.
    pub fn validate(&self) -> ApplicationResult<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ApplicationError::validation("logging.level must not be empty"));
        }
        EnvFilter::try_new(&self.logging.level).map_err(|e| {
            ApplicationError::validation(format!(
                "logging.level '{}' is not a valid filter: {e}",
                self.logging.level
            ))
        })?;
        Ok(())
    }

    /// Returns the pricing defaults.
    #[inline]
    #[must_use]
    pub const fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Returns the logging settings.
    #[inline]
    #[must_use]
    pub const fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}
