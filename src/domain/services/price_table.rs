//! # Price Tables
//!
//! Year-specific base prices and discount amounts.
//!
//! ```text
//! service          2020   2021   2022
//! Photography      1700   1800   1900
//! VideoRecording   1700   1800   1900
//! BlurayPackage     300    300    300
//! TwoDayEvent       400    400    400
//! WeddingSession    600    600    600
//! ```
//!
//! Every lookup is an exhaustive match except [`photo_video_base_price`],
//! which lists 2021 and 2022 explicitly and prices every other year at the
//! 2020 rate. A year added to [`ServiceYear`] without updating that function
//! silently inherits 1700.

use crate::domain::value_objects::amount::Amount;
use crate::domain::value_objects::enums::{ServiceType, ServiceYear};

/// Bluray package price, the same in every year.
pub const BLURAY_PACKAGE_PRICE: Amount = Amount::new(300);

/// Two-day event surcharge, the same in every year.
pub const TWO_DAY_EVENT_PRICE: Amount = Amount::new(400);

/// Flat wedding session discount when photography or video is booked.
pub const WEDDING_FLAT_DISCOUNT: Amount = Amount::new(300);

/// Returns the undiscounted price of a service in a pricing year.
///
/// # Examples
///
/// ```
/// use package_pricing::domain::services::price_table::base_price_of;
/// use package_pricing::domain::value_objects::{Amount, ServiceType, ServiceYear};
///
/// assert_eq!(
///     base_price_of(ServiceType::Photography, ServiceYear::Y2021),
///     Amount::new(1800),
/// );
/// assert_eq!(
///     base_price_of(ServiceType::WeddingSession, ServiceYear::Y2020),
///     Amount::new(600),
/// );
/// ```
#[must_use]
pub const fn base_price_of(service: ServiceType, year: ServiceYear) -> Amount {
    match service {
        ServiceType::Photography | ServiceType::VideoRecording => photo_video_base_price(year),
        ServiceType::BlurayPackage => BLURAY_PACKAGE_PRICE,
        ServiceType::TwoDayEvent => TWO_DAY_EVENT_PRICE,
        ServiceType::WeddingSession => wedding_session_price(year),
    }
}

/// Price of photography or video recording.
///
/// Only 2021 and 2022 have their own entry; any other year is priced at 1700.
#[must_use]
pub const fn photo_video_base_price(year: ServiceYear) -> Amount {
    match year {
        ServiceYear::Y2021 => Amount::new(1800),
        ServiceYear::Y2022 => Amount::new(1900),
        _ => Amount::new(1700),
    }
}

/// Price of a wedding session.
#[must_use]
pub const fn wedding_session_price(year: ServiceYear) -> Amount {
    match year {
        ServiceYear::Y2020 | ServiceYear::Y2021 | ServiceYear::Y2022 => Amount::new(600),
    }
}

/// Discount for booking photography and video recording together.
#[must_use]
pub const fn photo_video_bundle_discount(year: ServiceYear) -> Amount {
    match year {
        ServiceYear::Y2020 => Amount::new(1200),
        ServiceYear::Y2021 | ServiceYear::Y2022 => Amount::new(1300),
    }
}

/// Returns true if booking photography with a wedding session makes the
/// session free in this year.
#[must_use]
pub const fn wedding_free_with_photography(year: ServiceYear) -> bool {
    match year {
        ServiceYear::Y2022 => true,
        ServiceYear::Y2020 | ServiceYear::Y2021 => false,
    }
}
