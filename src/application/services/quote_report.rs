//! # Quote Report
//!
//! What the `package-pricing` command prints.
//!
//! A quote replays a list of actions from an empty selection and writes the
//! resulting [`PriceBreakdown`] as pretty JSON. The price table lists the
//! base price of every service for one year, one `SERVICE PRICE` line each.
//!
//! # Examples
//!
//! ```
//! use package_pricing::application::services::quote_report::{quote_actions, write_quote};
//! use package_pricing::domain::value_objects::{ServiceType, ServiceYear, SelectionAction};
//!
//! let breakdown = quote_actions(
//!     ServiceYear::Y2022,
//!     [SelectionAction::select(ServiceType::Photography)],
//! );
//!
//! let mut out = Vec::new();
//! write_quote(&mut out, &breakdown).unwrap();
//! let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
//! assert_eq!(json["final_price"], 1900);
//! ```

use crate::application::error::ApplicationResult;
use crate::application::services::pricing_session::PricingSession;
use crate::domain::services::price_calculator::PriceBreakdown;
use crate::domain::services::price_table::base_price_of;
use crate::domain::value_objects::enums::{ServiceType, ServiceYear};
use crate::domain::value_objects::selection_action::SelectionAction;
use crate::infrastructure::config::PricingConfig;
use std::io::Write;

/// Picks the requested year, or the configured default when none is given.
#[must_use]
pub fn resolve_year(requested: Option<ServiceYear>, config: &PricingConfig) -> ServiceYear {
    requested.unwrap_or(config.default_year())
}

/// Applies `actions` in order to an empty selection and prices the result.
///
/// Rejected selects are logged at `warn` and otherwise skipped.
#[must_use]
pub fn quote_actions(
    year: ServiceYear,
    actions: impl IntoIterator<Item = SelectionAction>,
) -> PriceBreakdown {
    let mut session = PricingSession::new(year);
    for action in actions {
        let outcome = session.apply(action);
        if outcome.is_rejected() {
            tracing::warn!(%action, ?outcome, "action ignored");
        }
    }

    let breakdown = session.breakdown();
    tracing::info!(
        selection = %session.selection(),
        quote = %breakdown.result(),
        "quoted package"
    );
    breakdown
}

/// Writes a breakdown as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_quote<W: Write>(out: &mut W, breakdown: &PriceBreakdown) -> ApplicationResult<()> {
    serde_json::to_writer_pretty(&mut *out, breakdown)?;
    writeln!(out)?;
    Ok(())
}

/// Writes the base price of every service for `year`.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn write_price_table<W: Write>(out: &mut W, year: ServiceYear) -> ApplicationResult<()> {
    for service in ServiceType::ALL {
        writeln!(
            out,
            "{:<16} {:>6}",
            service.to_string(),
            base_price_of(service, year).units()
        )?;
    }
    Ok(())
}
