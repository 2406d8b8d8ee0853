//! # Price Calculator
//!
//! Computes the base and final price of a selection for a pricing year.
//!
//! ```text
//! base  = Σ base_price_of(service, year)
//! final = base − photo/video bundle discount − wedding discount
//! ```
//!
//! The calculator accepts any [`Selection`], including ones built without the
//! selection manager, and never fails. The final price is not floored at
//! zero.
//!
//! # Examples
//!
//! ```
//! use package_pricing::domain::services::price_calculator::calculate_price;
//! use package_pricing::domain::value_objects::{Amount, Selection, ServiceType, ServiceYear};
//!
//! let selection = Selection::from_services([
//!     ServiceType::Photography,
//!     ServiceType::VideoRecording,
//! ]);
//! let price = calculate_price(&selection, ServiceYear::Y2021);
//! assert_eq!(price.base_price(), Amount::new(3600));
//! assert_eq!(price.final_price(), Amount::new(2300));
//! ```

use crate::domain::services::price_table::{
    WEDDING_FLAT_DISCOUNT, base_price_of, photo_video_bundle_discount,
    wedding_free_with_photography, wedding_session_price,
};
use crate::domain::value_objects::amount::Amount;
use crate::domain::value_objects::enums::{ServiceType, ServiceYear};
use crate::domain::value_objects::price_result::PriceResult;
use crate::domain::value_objects::selection::Selection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A discount rule that can reduce the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Discount {
    /// Photography and video recording booked together.
    PhotoVideoBundle,
    /// Wedding session booked with photography or video.
    WeddingSession,
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PhotoVideoBundle => write!(f, "PHOTO_VIDEO_BUNDLE"),
            Self::WeddingSession => write!(f, "WEDDING_SESSION"),
        }
    }
}

/// Undiscounted price of one selected service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The priced service.
    pub service: ServiceType,
    /// Its base price for the year.
    pub amount: Amount,
}

/// A discount that applied, with the amount subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountLine {
    /// The rule that applied.
    pub discount: Discount,
    /// The amount subtracted from the base price.
    pub amount: Amount,
}

/// Itemized price of a selection.
///
/// Line items follow the selection's order. Only discounts with a non-zero
/// amount are listed. The totals always equal [`calculate_price`] for the
/// same inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    year: ServiceYear,
    items: Vec<LineItem>,
    discounts: Vec<DiscountLine>,
    base_price: Amount,
    final_price: Amount,
}

impl PriceBreakdown {
    /// Returns the pricing year.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> ServiceYear {
        self.year
    }

    /// Returns the per-service line items.
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the applied discounts.
    #[inline]
    #[must_use]
    pub fn discounts(&self) -> &[DiscountLine] {
        &self.discounts
    }

    /// Returns the base and final totals.
    #[inline]
    #[must_use]
    pub const fn result(&self) -> PriceResult {
        PriceResult::new(self.base_price, self.final_price)
    }
}

/// Stateless price calculator.
///
/// # Examples
///
/// ```
/// use package_pricing::domain::services::price_calculator::{Discount, PriceCalculator};
/// use package_pricing::domain::value_objects::{Amount, Selection, ServiceType, ServiceYear};
///
/// let selection = Selection::from_services([
///     ServiceType::WeddingSession,
///     ServiceType::Photography,
/// ]);
/// let breakdown = PriceCalculator::new().breakdown(&selection, ServiceYear::Y2022);
/// assert_eq!(breakdown.discounts().len(), 1);
/// assert_eq!(breakdown.discounts()[0].discount, Discount::WeddingSession);
/// assert_eq!(breakdown.result().final_price(), Amount::new(1900));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceCalculator;

impl PriceCalculator {
    /// Creates a calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Computes the base and final price.
    #[must_use]
    pub fn calculate(&self, selection: &Selection, year: ServiceYear) -> PriceResult {
        let base_price: Amount = selection.iter().map(|s| base_price_of(s, year)).sum();
        let final_price =
            base_price - photo_video_discount(selection, year) - wedding_discount(selection, year);

        tracing::trace!(
            %selection,
            %year,
            %base_price,
            %final_price,
            "calculated price"
        );

        PriceResult::new(base_price, final_price)
    }

    /// Computes an itemized price.
    #[must_use]
    pub fn breakdown(&self, selection: &Selection, year: ServiceYear) -> PriceBreakdown {
        let items: Vec<LineItem> = selection
            .iter()
            .map(|service| LineItem {
                service,
                amount: base_price_of(service, year),
            })
            .collect();

        let discounts: Vec<DiscountLine> = [
            (Discount::PhotoVideoBundle, photo_video_discount(selection, year)),
            (Discount::WeddingSession, wedding_discount(selection, year)),
        ]
        .into_iter()
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(discount, amount)| DiscountLine { discount, amount })
        .collect();

        let base_price: Amount = items.iter().map(|item| item.amount).sum();
        let final_price = base_price - discounts.iter().map(|line| line.amount).sum::<Amount>();

        PriceBreakdown {
            year,
            items,
            discounts,
            base_price,
            final_price,
        }
    }
}

/// Computes the base and final price of a selection for a year.
#[must_use]
pub fn calculate_price(selection: &Selection, year: ServiceYear) -> PriceResult {
    PriceCalculator::new().calculate(selection, year)
}

/// Discount for photography and video recording booked together.
///
/// Zero unless both are selected.
#[must_use]
pub fn photo_video_discount(selection: &Selection, year: ServiceYear) -> Amount {
    if selection.contains_all(&[ServiceType::Photography, ServiceType::VideoRecording]) {
        photo_video_bundle_discount(year)
    } else {
        Amount::ZERO
    }
}

/// Discount on a selected wedding session.
///
/// In 2022 the session is free with photography. Otherwise it is reduced by a
/// flat amount when photography or video recording is selected. At most one
/// of the two applies.
#[must_use]
pub fn wedding_discount(selection: &Selection, year: ServiceYear) -> Amount {
    if !selection.contains(ServiceType::WeddingSession) {
        return Amount::ZERO;
    }

    if wedding_free_with_photography(year) && selection.contains(ServiceType::Photography) {
        return wedding_session_price(year);
    }

    if selection.contains_any(&[ServiceType::Photography, ServiceType::VideoRecording]) {
        WEDDING_FLAT_DISCOUNT
    } else {
        Amount::ZERO
    }
}
