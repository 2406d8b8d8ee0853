//! # Domain Enums
//!
//! Enumeration types for the package catalog.
//!
//! - [`ServiceType`] - A purchasable option of the package
//! - [`ServiceYear`] - The pricing schedule a quote is computed against
//!
//! Both sets are closed. Adding a variant means updating every price and
//! discount table in [`crate::domain::services`]; the compiler flags every
//! table except the photography/video default-year fallback.
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A purchasable service option.
///
/// Uses `#[repr(u8)]` for compact representation.
///
/// # Examples
///
/// ```
/// use package_pricing::domain::value_objects::enums::ServiceType;
///
/// let bluray = ServiceType::BlurayPackage;
/// assert_eq!(bluray.prerequisites(), &[ServiceType::VideoRecording]);
/// assert_eq!(bluray.to_string(), "BLURAY_PACKAGE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ServiceType {
    /// Photography coverage of the event.
    Photography = 0,
    /// Video recording of the event.
    VideoRecording = 1,
    /// Bluray disc of the recorded video.
    BlurayPackage = 2,
    /// Coverage extended over a second event day.
    TwoDayEvent = 3,
    /// Dedicated wedding session.
    WeddingSession = 4,
}

impl ServiceType {
    /// Every service type, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Photography,
        Self::VideoRecording,
        Self::BlurayPackage,
        Self::TwoDayEvent,
        Self::WeddingSession,
    ];

    /// Services of which at least one must already be selected before this
    /// service can be selected.
    ///
    /// An empty slice means the service is always selectable.
    ///
    /// # Examples
    ///
    /// ```
    /// use package_pricing::domain::value_objects::enums::ServiceType;
    ///
    /// assert!(ServiceType::Photography.prerequisites().is_empty());
    /// assert_eq!(
    ///     ServiceType::TwoDayEvent.prerequisites(),
    ///     &[ServiceType::WeddingSession, ServiceType::Photography],
    /// );
    /// ```
    #[must_use]
    pub const fn prerequisites(self) -> &'static [Self] {
        match self {
            Self::BlurayPackage => &[Self::VideoRecording],
            Self::TwoDayEvent => &[Self::WeddingSession, Self::Photography],
            Self::Photography | Self::VideoRecording | Self::WeddingSession => &[],
        }
    }

    /// Returns true if selecting this service depends on another one.
    #[inline]
    #[must_use]
    pub const fn has_prerequisites(self) -> bool {
        !self.prerequisites().is_empty()
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Photography => write!(f, "PHOTOGRAPHY"),
            Self::VideoRecording => write!(f, "VIDEO_RECORDING"),
            Self::BlurayPackage => write!(f, "BLURAY_PACKAGE"),
            Self::TwoDayEvent => write!(f, "TWO_DAY_EVENT"),
            Self::WeddingSession => write!(f, "WEDDING_SESSION"),
        }
    }
}

impl FromStr for ServiceType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "PHOTOGRAPHY" | "PHOTO" => Ok(Self::Photography),
            "VIDEO_RECORDING" | "VIDEORECORDING" | "VIDEO" => Ok(Self::VideoRecording),
            "BLURAY_PACKAGE" | "BLURAYPACKAGE" | "BLURAY" => Ok(Self::BlurayPackage),
            "TWO_DAY_EVENT" | "TWODAYEVENT" => Ok(Self::TwoDayEvent),
            "WEDDING_SESSION" | "WEDDINGSESSION" | "WEDDING" => Ok(Self::WeddingSession),
            _ => Err(ParseEnumError::InvalidValue("ServiceType", s.to_string())),
        }
    }
}

/// Pricing schedule year.
///
/// Serializes as its calendar year number. The default is the most recent
/// schedule.
///
/// # Examples
///
/// ```
/// use package_pricing::domain::value_objects::enums::ServiceYear;
///
/// let year: ServiceYear = "2021".parse().unwrap();
/// assert_eq!(year, ServiceYear::Y2021);
/// assert_eq!(year.value(), 2021);
/// assert_eq!(ServiceYear::default(), ServiceYear::Y2022);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum ServiceYear {
    /// The 2020 price list.
    Y2020,
    /// The 2021 price list.
    Y2021,
    /// The 2022 price list.
    #[default]
    Y2022,
}

impl ServiceYear {
    /// Every pricing year, oldest first.
    pub const ALL: [Self; 3] = [Self::Y2020, Self::Y2021, Self::Y2022];

    /// Returns the calendar year.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::Y2020 => 2020,
            Self::Y2021 => 2021,
            Self::Y2022 => 2022,
        }
    }
}

impl TryFrom<u16> for ServiceYear {
    type Error = ParseEnumError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2020 => Ok(Self::Y2020),
            2021 => Ok(Self::Y2021),
            2022 => Ok(Self::Y2022),
            other => Err(ParseEnumError::UnknownYear(other)),
        }
    }
}

impl From<ServiceYear> for u16 {
    fn from(year: ServiceYear) -> Self {
        year.value()
    }
}

impl fmt::Display for ServiceYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for ServiceYear {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix(['Y', 'y']).unwrap_or(trimmed);
        digits
            .parse::<u16>()
            .map_err(|_| ParseEnumError::InvalidValue("ServiceYear", s.to_string()))
            .and_then(Self::try_from)
    }
}

/// Error type for parsing enum values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEnumError {
    /// The provided string value is not valid for the enum.
    #[error("invalid {0} value: '{1}'")]
    InvalidValue(&'static str, String),

    /// The year is well formed but has no price list.
    #[error("no price list for year {0}")]
    UnknownYear(u16),
}
