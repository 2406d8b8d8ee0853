//! # Pricing Session
//!
//! Caller-side state for building up a package and quoting it.
//!
//! A [`PricingSession`] owns one [`Selection`] and one [`ServiceYear`]. Every
//! change to the selection goes through the selection manager, and every
//! quote goes through the price calculator; the two engines stay unaware of
//! each other.
//!
//! # Examples
//!
//! ```
//! use package_pricing::application::services::PricingSession;
//! use package_pricing::domain::value_objects::{Amount, ServiceType, ServiceYear};
//!
//! let mut session = PricingSession::new(ServiceYear::Y2020);
//! session.select(ServiceType::WeddingSession);
//! session.select(ServiceType::VideoRecording);
//!
//! let quote = session.quote();
//! assert_eq!(quote.base_price(), Amount::new(2300));
//! assert_eq!(quote.final_price(), Amount::new(2000));
//! ```

use crate::domain::services::price_calculator::{PriceBreakdown, PriceCalculator};
use crate::domain::services::selection_manager::{self, ActionOutcome};
use crate::domain::value_objects::enums::{ServiceType, ServiceYear};
use crate::domain::value_objects::price_result::PriceResult;
use crate::domain::value_objects::selection::Selection;
use crate::domain::value_objects::selection_action::SelectionAction;
use crate::infrastructure::config::PricingConfig;

/// A caller's in-progress package.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PricingSession {
    selection: Selection,
    year: ServiceYear,
    calculator: PriceCalculator,
}

impl PricingSession {
    /// Creates an empty session priced against `year`.
    #[must_use]
    pub fn new(year: ServiceYear) -> Self {
        Self {
            selection: Selection::new(),
            year,
            calculator: PriceCalculator::new(),
        }
    }

    /// Creates an empty session priced against the configured default year.
    #[must_use]
    pub fn from_config(config: &PricingConfig) -> Self {
        Self::new(config.default_year())
    }

    /// Returns the current selection.
    #[inline]
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the pricing year.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> ServiceYear {
        self.year
    }

    /// Switches the pricing year. The selection is kept as is.
    pub fn set_year(&mut self, year: ServiceYear) {
        self.year = year;
    }

    /// Applies an action and returns what it did.
    pub fn apply(&mut self, action: SelectionAction) -> ActionOutcome {
        let (selection, outcome) = selection_manager::apply(&self.selection, action).into_parts();
        tracing::debug!(%action, ?outcome, %selection, "applied selection action");
        self.selection = selection;
        outcome
    }

    /// Applies a sequence of actions in order, returning each outcome.
    pub fn apply_all(
        &mut self,
        actions: impl IntoIterator<Item = SelectionAction>,
    ) -> Vec<ActionOutcome> {
        actions.into_iter().map(|action| self.apply(action)).collect()
    }

    /// Selects a service.
    pub fn select(&mut self, service: ServiceType) -> ActionOutcome {
        self.apply(SelectionAction::select(service))
    }

    /// Deselects a service.
    pub fn deselect(&mut self, service: ServiceType) -> ActionOutcome {
        self.apply(SelectionAction::deselect(service))
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selection = Selection::new();
    }

    /// Prices the current selection.
    #[must_use]
    pub fn quote(&self) -> PriceResult {
        self.calculator.calculate(&self.selection, self.year)
    }

    /// Prices the current selection line by line.
    #[must_use]
    pub fn breakdown(&self) -> PriceBreakdown {
        self.calculator.breakdown(&self.selection, self.year)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Amount;
    use ServiceType::*;

    #[test]
    fn starts_empty_and_free() {
        let session = PricingSession::new(ServiceYear::Y2021);
        assert!(session.selection().is_empty());
        assert_eq!(session.quote(), PriceResult::new(Amount::ZERO, Amount::ZERO));
    }

    #[test]
    fn default_uses_latest_year() {
        assert_eq!(PricingSession::default().year(), ServiceYear::Y2022);
    }

    #[test]
    fn from_config_uses_default_year() {
        let config = PricingConfig::new(ServiceYear::Y2020);
        assert_eq!(PricingSession::from_config(&config).year(), ServiceYear::Y2020);
    }

    #[test]
    fn rejected_select_leaves_quote_unchanged() {
        let mut session = PricingSession::new(ServiceYear::Y2022);
        assert!(session.select(BlurayPackage).is_rejected());
        assert!(session.selection().is_empty());
        assert_eq!(session.quote().base_price(), Amount::ZERO);
    }

    #[test]
    fn requote_after_year_change() {
        let mut session = PricingSession::new(ServiceYear::Y2021);
        session.select(WeddingSession);
        session.select(Photography);
        assert_eq!(session.quote().final_price(), Amount::new(2100));

        session.set_year(ServiceYear::Y2022);
        assert_eq!(session.quote().final_price(), Amount::new(1900));
    }

    #[test]
    fn apply_all_in_order() {
        let mut session = PricingSession::new(ServiceYear::Y2022);
        let outcomes = session.apply_all([
            SelectionAction::select(BlurayPackage),
            SelectionAction::select(VideoRecording),
            SelectionAction::select(BlurayPackage),
            SelectionAction::deselect(VideoRecording),
        ]);
        assert_eq!(
            outcomes,
            vec![
                ActionOutcome::Rejected {
                    requires: vec![VideoRecording]
                },
                ActionOutcome::Added,
                ActionOutcome::Added,
                ActionOutcome::Removed {
                    cascaded: vec![BlurayPackage]
                },
            ]
        );
        assert!(session.selection().is_empty());
    }

    #[test]
    fn clear_resets_selection() {
        let mut session = PricingSession::new(ServiceYear::Y2020);
        session.select(Photography);
        session.clear();
        assert!(session.selection().is_empty());
        assert_eq!(session.year(), ServiceYear::Y2020);
    }

    #[test]
    fn breakdown_matches_quote() {
        let mut session = PricingSession::new(ServiceYear::Y2020);
        session.select(Photography);
        session.select(VideoRecording);
        session.select(BlurayPackage);
        session.select(TwoDayEvent);
        let breakdown = session.breakdown();
        assert_eq!(breakdown.items().len(), 4);
        assert_eq!(breakdown.result(), session.quote());
        assert_eq!(breakdown.result().final_price(), Amount::new(2900));
    }
}
