//! Validation of dot-separated pre-release and build metadata identifiers
//!
//! According to semver.org: https://semver.org/#spec-item-9 and https://semver.org/#spec-item-10

use crate::error::{Result, VersionError};
use std::fmt;
use tracing::debug;

/// Which section of a version an identifier belongs to
///
/// Pre-release identifiers reject leading zeros in numeric identifiers,
/// build metadata identifiers only check their character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    PreRelease,
    BuildMetadata,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::PreRelease => write!(f, "pre-release"),
            IdentifierKind::BuildMetadata => write!(f, "build metadata"),
        }
    }
}

/// Returns true if the identifier consists only of ASCII digits
pub fn is_numeric_identifier(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if the identifier starts with '0' and is longer than one character
pub fn has_leading_zero(identifier: &str) -> bool {
    identifier.len() > 1 && identifier.starts_with('0')
}

/// Returns true if every character is an ASCII alphanumeric or a hyphen
pub fn is_ascii_alphanumerics_and_hyphen(identifier: &str) -> bool {
    !identifier.is_empty()
        && identifier
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Validates a single identifier of the given kind
pub fn validate_identifier(identifier: &str, kind: IdentifierKind) -> Result<()> {
    if is_blank(identifier) {
        debug!(%kind, "rejected blank identifier");
        return Err(VersionError::empty_identifier(kind));
    }
    if !is_ascii_alphanumerics_and_hyphen(identifier) {
        debug!(%kind, identifier, "rejected identifier with invalid characters");
        return Err(VersionError::invalid_character(kind, identifier));
    }
    if kind == IdentifierKind::PreRelease
        && is_numeric_identifier(identifier)
        && has_leading_zero(identifier)
    {
        debug!(identifier, "rejected numeric pre-release identifier with leading zero");
        return Err(VersionError::leading_zero(identifier));
    }
    Ok(())
}

/// Splits a raw identifier string on `separator` and validates every token
///
/// Stops at the first failing token.
///
/// # Arguments
/// * `raw` - String to split (e.g., "alpha.1")
/// * `separator` - Separator character, '.' for both sections
/// * `kind` - Which validation rules apply
///
/// # Returns
/// * `Ok(Vec<String>)` - Tokens in their original order
/// * `Err` - If the string or any token is blank, contains invalid characters,
///   or is a numeric pre-release identifier with a leading zero
pub fn parse_identifiers(raw: &str, separator: char, kind: IdentifierKind) -> Result<Vec<String>> {
    if is_blank(raw) {
        debug!(%kind, "rejected blank identifier string");
        return Err(VersionError::empty_identifier(kind));
    }

    raw.split(separator)
        .map(|token| validate_identifier(token, kind).map(|()| token.to_string()))
        .collect()
}
