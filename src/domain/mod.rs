//! # Domain Layer
//!
//! Catalog types, selection rules, and the pricing tables.

pub mod errors;
pub mod services;
pub mod value_objects;
