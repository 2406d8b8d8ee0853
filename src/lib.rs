//! # Package Pricing
//!
//! Service selection rules and year-based pricing for bundled event-service
//! packages.
//!
//! Two stateless engines make up the core:
//!
//! - the **selection manager** turns a select or deselect action into a new
//!   [`Selection`], refusing services whose prerequisites are missing and
//!   cascading removals to dependents;
//! - the **price calculator** sums the per-service prices of a selection for
//!   a [`ServiceYear`] and subtracts the bundle and wedding discounts.
//!
//! The engines never fail and never call each other. A caller holds the
//! selection, usually through a [`PricingSession`].
//!
//! # Architecture
//!
//! ```text
//! domain/            catalog enums, selection, amounts, the two engines
//! application/       pricing session and error types
//! infrastructure/    configuration and logging setup
//! ```
//!
//! # Examples
//!
//! ```
//! use package_pricing::{
//!     Amount, Selection, SelectionAction, ServiceType, ServiceYear, calculate_price,
//!     update_selection,
//! };
//!
//! let mut selection = Selection::new();
//! for service in [ServiceType::Photography, ServiceType::VideoRecording] {
//!     selection = update_selection(&selection, SelectionAction::select(service));
//! }
//!
//! let price = calculate_price(&selection, ServiceYear::Y2021);
//! assert_eq!(price.base_price(), Amount::new(3600));
//! assert_eq!(price.final_price(), Amount::new(2300));
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::services::PricingSession;
pub use domain::services::{
    ActionOutcome, PriceBreakdown, PriceCalculator, calculate_price, update_selection,
};
pub use domain::value_objects::{
    ActionKind, Amount, PriceResult, Selection, SelectionAction, ServiceType, ServiceYear,
};
