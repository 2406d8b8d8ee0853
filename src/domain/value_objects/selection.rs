//! # Selection
//!
//! The caller-held, ordered set of chosen services.
//!
//! A [`Selection`] keeps insertion order and never holds duplicates. Order has
//! no effect on pricing. Selections are only grown or shrunk through
//! [`crate::domain::services::selection_manager`]; callers that need to price
//! an arbitrary set can still build one with [`Selection::from_services`],
//! which deduplicates but does not check dependencies.

use crate::domain::value_objects::enums::ServiceType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered sequence of unique service types.
///
/// # Examples
///
/// ```
/// use package_pricing::domain::value_objects::{Selection, ServiceType};
///
/// let selection = Selection::from_services([
///     ServiceType::Photography,
///     ServiceType::WeddingSession,
///     ServiceType::Photography,
/// ]);
/// assert_eq!(selection.len(), 2);
/// assert!(selection.contains(ServiceType::WeddingSession));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<ServiceType>", into = "Vec<ServiceType>")]
pub struct Selection {
    services: Vec<ServiceType>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            services: Vec::new(),
        }
    }

    /// Builds a selection from arbitrary services, keeping the first
    /// occurrence of each.
    ///
    /// Dependency rules are not applied, so the result may be inconsistent
    /// (see [`Selection::is_consistent`]).
    #[must_use]
    pub fn from_services(services: impl IntoIterator<Item = ServiceType>) -> Self {
        let mut selection = Self::new();
        for service in services {
            selection.insert(service);
        }
        selection
    }

    /// Returns true if the service is selected.
    #[inline]
    #[must_use]
    pub fn contains(&self, service: ServiceType) -> bool {
        self.services.contains(&service)
    }

    /// Returns true if at least one of the given services is selected.
    #[inline]
    #[must_use]
    pub fn contains_any(&self, services: &[ServiceType]) -> bool {
        services.iter().any(|s| self.contains(*s))
    }

    /// Returns true if every one of the given services is selected.
    #[inline]
    #[must_use]
    pub fn contains_all(&self, services: &[ServiceType]) -> bool {
        services.iter().all(|s| self.contains(*s))
    }

    /// Returns the number of selected services.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Returns true if nothing is selected.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Returns the services in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[ServiceType] {
        &self.services
    }

    /// Iterates over the services in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = ServiceType> + '_ {
        self.services.iter().copied()
    }

    /// Returns true if the dependency rules maintained by the selection
    /// manager hold:
    ///
    /// - a Bluray package is only present together with video recording;
    /// - a two-day event is only present together with photography, video
    ///   recording, or a wedding session.
    ///
    /// # Examples
    ///
    /// ```
    /// use package_pricing::domain::value_objects::{Selection, ServiceType};
    ///
    /// let orphan = Selection::from_services([ServiceType::BlurayPackage]);
    /// assert!(!orphan.is_consistent());
    /// ```
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let bluray_ok = !self.contains(ServiceType::BlurayPackage)
            || self.contains(ServiceType::VideoRecording);
        let two_day_ok = !self.contains(ServiceType::TwoDayEvent)
            || self.contains_any(&[
                ServiceType::Photography,
                ServiceType::VideoRecording,
                ServiceType::WeddingSession,
            ]);
        bluray_ok && two_day_ok
    }

    /// Appends a service unless already present. Returns true if added.
    pub(crate) fn insert(&mut self, service: ServiceType) -> bool {
        if self.contains(service) {
            return false;
        }
        self.services.push(service);
        true
    }

    /// Removes a service, keeping the order of the rest. Returns true if it
    /// was present.
    pub(crate) fn remove(&mut self, service: ServiceType) -> bool {
        let before = self.services.len();
        self.services.retain(|s| *s != service);
        self.services.len() != before
    }
}

impl From<Vec<ServiceType>> for Selection {
    fn from(services: Vec<ServiceType>) -> Self {
        Self::from_services(services)
    }
}

impl From<Selection> for Vec<ServiceType> {
    fn from(selection: Selection) -> Self {
        selection.services
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = ServiceType;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, ServiceType>>;

    fn into_iter(self) -> Self::IntoIter {
        self.services.iter().copied()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, service) in self.services.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{service}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ServiceType::*;

    mod construction {
        use super::*;

        #[test]
        fn new_is_empty() {
            let selection = Selection::new();
            assert!(selection.is_empty());
            assert_eq!(selection, Selection::default());
        }

        #[test]
        fn from_services_deduplicates_keeping_first() {
            let selection = Selection::from_services([VideoRecording, Photography, VideoRecording]);
            assert_eq!(selection.as_slice(), &[VideoRecording, Photography]);
        }

        #[test]
        fn from_services_skips_dependency_rules() {
            let selection = Selection::from_services([BlurayPackage, TwoDayEvent]);
            assert_eq!(selection.len(), 2);
            assert!(!selection.is_consistent());
        }
    }

    mod mutation {
        use super::*;

        #[test]
        fn insert_appends_once() {
            let mut selection = Selection::new();
            assert!(selection.insert(WeddingSession));
            assert!(selection.insert(Photography));
            assert!(!selection.insert(WeddingSession));
            assert_eq!(selection.as_slice(), &[WeddingSession, Photography]);
        }

        #[test]
        fn remove_keeps_order() {
            let mut selection = Selection::from_services([Photography, VideoRecording, TwoDayEvent]);
            assert!(selection.remove(VideoRecording));
            assert!(!selection.remove(VideoRecording));
            assert_eq!(selection.as_slice(), &[Photography, TwoDayEvent]);
        }
    }

    mod queries {
        use super::*;

        #[test]
        fn contains_any_and_all() {
            let selection = Selection::from_services([Photography, WeddingSession]);
            assert!(selection.contains_any(&[VideoRecording, Photography]));
            assert!(!selection.contains_any(&[VideoRecording, BlurayPackage]));
            assert!(!selection.contains_any(&[]));
            assert!(selection.contains_all(&[Photography, WeddingSession]));
            assert!(!selection.contains_all(&[Photography, VideoRecording]));
        }

        #[test]
        fn consistency() {
            assert!(Selection::new().is_consistent());
            assert!(Selection::from_services([VideoRecording, BlurayPackage]).is_consistent());
            assert!(Selection::from_services([VideoRecording, TwoDayEvent]).is_consistent());
            assert!(Selection::from_services([WeddingSession, TwoDayEvent]).is_consistent());
            assert!(!Selection::from_services([TwoDayEvent]).is_consistent());
            assert!(!Selection::from_services([Photography, BlurayPackage]).is_consistent());
        }

        #[test]
        fn iterates_in_order() {
            let selection = Selection::from_services([WeddingSession, Photography]);
            let collected: Vec<_> = selection.iter().collect();
            assert_eq!(collected, vec![WeddingSession, Photography]);
            let borrowed: Vec<_> = (&selection).into_iter().collect();
            assert_eq!(borrowed, collected);
        }

        #[test]
        fn display_format() {
            let selection = Selection::from_services([Photography, VideoRecording]);
            assert_eq!(selection.to_string(), "[PHOTOGRAPHY, VIDEO_RECORDING]");
            assert_eq!(Selection::new().to_string(), "[]");
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn serializes_as_array() {
            let selection = Selection::from_services([Photography, BlurayPackage]);
            let json = serde_json::to_string(&selection).unwrap();
            assert_eq!(json, r#"["PHOTOGRAPHY","BLURAY_PACKAGE"]"#);
        }

        #[test]
        fn deserialize_deduplicates() {
            let selection: Selection =
                serde_json::from_str(r#"["WEDDING_SESSION","WEDDING_SESSION"]"#).unwrap();
            assert_eq!(selection.as_slice(), &[WeddingSession]);
        }
    }
}
