//! # Application Services
//!
//! Services that drive the domain engines on behalf of a caller.
//!
//! - [`PricingSession`]: Holds a selection and year, applies actions, quotes
//! - [`quote_report`]: Quote and price-table output of the command-line tool

pub mod pricing_session;
pub mod quote_report;

pub use pricing_session::PricingSession;
