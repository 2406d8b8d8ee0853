//! # Domain Services
//!
//! The two stateless engines of the crate.
//!
//! ## Services
//!
//! - [`selection_manager`]: select/deselect rules with dependency cascades
//! - [`price_calculator`]: base price, discounts, and final price
//! - [`price_table`]: year-specific prices and discount amounts

pub mod price_calculator;
pub mod price_table;
pub mod selection_manager;

pub use price_calculator::{
    Discount, DiscountLine, LineItem, PriceBreakdown, PriceCalculator, calculate_price,
};
pub use selection_manager::{ActionOutcome, SelectionChange, apply, update_selection};
