//! # Value Objects
//!
//! Immutable types describing the package catalog and a caller's choices.
//!
//! ## Catalog
//!
//! - [`ServiceType`]: a purchasable option
//! - [`ServiceYear`]: a pricing schedule
//!
//! ## Selection
//!
//! - [`Selection`]: ordered set of unique chosen services
//! - [`SelectionAction`], [`ActionKind`]: select/deselect requests
//!
//! ## Pricing
//!
//! - [`Amount`]: whole-unit currency amount, with [`ArithmeticError`] for
//!   checked arithmetic
//! - [`PriceResult`]: base and final price pair

pub mod amount;
pub mod enums;
pub mod price_result;
pub mod selection;
pub mod selection_action;

pub use amount::{Amount, ArithmeticError, ArithmeticResult};
pub use enums::{ParseEnumError, ServiceType, ServiceYear};
pub use price_result::PriceResult;
pub use selection::Selection;
pub use selection_action::{ActionKind, SelectionAction};
