//! # Domain Errors
//!
//! Errors raised while turning caller input into domain values.
//!
//! The selection manager and price calculator never fail; these errors only
//! come from parsing service names, years, and actions.

use crate::domain::value_objects::enums::ParseEnumError;
use thiserror::Error;

/// Error type for domain value construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// An enum value could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseEnumError),

    /// An action string is not of the form `kind:SERVICE`.
    #[error("invalid action '{0}': expected 'select:SERVICE' or 'deselect:SERVICE'")]
    InvalidAction(String),
}

impl DomainError {
    /// Creates an invalid action error.
    #[must_use]
    pub fn invalid_action(input: impl Into<String>) -> Self {
        Self::InvalidAction(input.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_is_transparent() {
        let err: DomainError = ParseEnumError::UnknownYear(2019).into();
        assert_eq!(err.to_string(), "no price list for year 2019");
    }

    #[test]
    fn invalid_action_message() {
        let err = DomainError::invalid_action("photography");
        assert_eq!(
            err.to_string(),
            "invalid action 'photography': expected 'select:SERVICE' or 'deselect:SERVICE'"
        );
    }
}
