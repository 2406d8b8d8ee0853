//! # Selection Actions
//!
//! A caller's request to add a service to, or drop a service from, a
//! selection.
//!
//! Actions parse from the `kind:SERVICE` form used on the command line:
//!
//! ```
//! use package_pricing::domain::value_objects::{ActionKind, SelectionAction, ServiceType};
//!
//! let action: SelectionAction = "select:photography".parse().unwrap();
//! assert_eq!(action.kind(), ActionKind::Select);
//! assert_eq!(action.service(), ServiceType::Photography);
//! assert_eq!(action.to_string(), "select:PHOTOGRAPHY");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::enums::{ParseEnumError, ServiceType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether an action adds or removes a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    /// Add the service if its prerequisites are met.
    Select,
    /// Remove the service and anything that depended on it.
    Deselect,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select => write!(f, "select"),
            Self::Deselect => write!(f, "deselect"),
        }
    }
}

impl FromStr for ActionKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "select" | "add" | "+" => Ok(Self::Select),
            "deselect" | "remove" | "-" => Ok(Self::Deselect),
            _ => Err(ParseEnumError::InvalidValue("ActionKind", s.to_string())),
        }
    }
}

/// A select or deselect request for one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionAction {
    /// What to do.
    kind: ActionKind,
    /// The service the action applies to.
    service: ServiceType,
}

impl SelectionAction {
    /// Creates a new action.
    #[inline]
    #[must_use]
    pub const fn new(kind: ActionKind, service: ServiceType) -> Self {
        Self { kind, service }
    }

    /// Creates a select action.
    #[inline]
    #[must_use]
    pub const fn select(service: ServiceType) -> Self {
        Self::new(ActionKind::Select, service)
    }

    /// Creates a deselect action.
    #[inline]
    #[must_use]
    pub const fn deselect(service: ServiceType) -> Self {
        Self::new(ActionKind::Deselect, service)
    }

    /// Returns the action kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Returns the targeted service.
    #[inline]
    #[must_use]
    pub const fn service(&self) -> ServiceType {
        self.service
    }
}

impl fmt::Display for SelectionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.service)
    }
}

impl FromStr for SelectionAction {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let (kind, service) = s
            .split_once(':')
            .ok_or_else(|| DomainError::invalid_action(s))?;
        Ok(Self::new(kind.parse()?, service.parse()?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        let select = SelectionAction::select(ServiceType::TwoDayEvent);
        assert_eq!(select.kind(), ActionKind::Select);
        assert_eq!(select.service(), ServiceType::TwoDayEvent);

        let deselect = SelectionAction::deselect(ServiceType::VideoRecording);
        assert_eq!(deselect.kind(), ActionKind::Deselect);
    }

    #[test]
    fn from_str_works() {
        assert_eq!(
            "deselect:VIDEO_RECORDING".parse::<SelectionAction>().unwrap(),
            SelectionAction::deselect(ServiceType::VideoRecording)
        );
        assert_eq!(
            "+:bluray".parse::<SelectionAction>().unwrap(),
            SelectionAction::select(ServiceType::BlurayPackage)
        );
    }

    #[test]
    fn from_str_missing_separator() {
        let err = "photography".parse::<SelectionAction>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidAction(_)));
    }

    #[test]
    fn from_str_bad_parts() {
        let err = "toggle:PHOTOGRAPHY".parse::<SelectionAction>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
        let err = "select:DRONE".parse::<SelectionAction>().unwrap_err();
        assert_eq!(err.to_string(), "invalid ServiceType value: 'DRONE'");
    }

    #[test]
    fn display_roundtrip() {
        let action = SelectionAction::deselect(ServiceType::WeddingSession);
        assert_eq!(action.to_string(), "deselect:WEDDING_SESSION");
        assert_eq!(action.to_string().parse::<SelectionAction>().unwrap(), action);
    }

    #[test]
    fn serde_shape() {
        let action = SelectionAction::select(ServiceType::Photography);
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"kind":"SELECT","service":"PHOTOGRAPHY"}"#);
    }
}
