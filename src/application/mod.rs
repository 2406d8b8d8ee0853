//! # Application Layer
//!
//! Caller-facing orchestration and the crate's error types.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult, InfrastructureError};
