//! # Infrastructure Layer
//!
//! Configuration loading and logging setup.
//!
//! ## Modules
//!
//! - [`config`]: Layered file/environment configuration
//! - [`logging`]: Tracing subscriber installation

pub mod config;
pub mod logging;

pub use self::config::{AppConfig, LogFormat, LoggingConfig, PricingConfig};
pub use logging::init_tracing;
