use thiserror::Error;

use crate::domain::identifier::IdentifierKind;

/// Unified error type for semantic version construction and validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Negative {component} version {value} is not allowed")]
    NegativeComponent { component: &'static str, value: i64 },

    #[error("Empty {kind} identifier")]
    EmptyIdentifier { kind: IdentifierKind },

    #[error("Invalid character in {kind} identifier '{identifier}': only ASCII alphanumerics and hyphen are allowed")]
    InvalidCharacter {
        kind: IdentifierKind,
        identifier: String,
    },

    #[error("Leading zero in numeric pre-release identifier '{identifier}'")]
    LeadingZero { identifier: String },

    #[error("Increasing the {component} version would overflow")]
    ComponentOverflow { component: &'static str },

    #[error("Invalid version format: '{0}'")]
    InvalidFormat(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, VersionError>;

impl VersionError {
    /// Create a negative component error
    pub fn negative_component(component: &'static str, value: i64) -> Self {
        VersionError::NegativeComponent { component, value }
    }

    /// Create an empty identifier error
    pub fn empty_identifier(kind: IdentifierKind) -> Self {
        VersionError::EmptyIdentifier { kind }
    }

    /// Create an invalid character error
    pub fn invalid_character(kind: IdentifierKind, identifier: impl Into<String>) -> Self {
        VersionError::InvalidCharacter {
            kind,
            identifier: identifier.into(),
        }
    }

    /// Create a leading zero error
    pub fn leading_zero(identifier: impl Into<String>) -> Self {
        VersionError::LeadingZero {
            identifier: identifier.into(),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(input: impl Into<String>) -> Self {
        VersionError::InvalidFormat(input.into())
    }
}
