//! Precedence ordering between versions
//!
//! According to semver.org: https://semver.org/#spec-item-11
//! Build metadata never takes part in precedence.

use super::identifier::is_numeric_identifier;
use super::version::Version;
use std::cmp::Ordering;

/// Compares two numeric identifiers by integer value without parsing them,
/// so arbitrarily long identifiers never overflow.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compares a single pair of pre-release identifiers
///
/// Numeric identifiers always have lower precedence than alphanumeric ones.
/// Alphanumeric identifiers compare by ASCII code point.
pub fn compare_identifiers(a: &str, b: &str) -> Ordering {
    match (is_numeric_identifier(a), is_numeric_identifier(b)) {
        (true, true) => compare_numeric(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

/// Compares two pre-release identifier sequences
///
/// An empty sequence means "no pre-release" and ranks above any pre-release.
pub fn compare_pre_release<S: AsRef<str>>(a: &[S], b: &[S]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    for (x, y) in a.iter().zip(b.iter()) {
        match compare_identifiers(x.as_ref(), y.as_ref()) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    a.len().cmp(&b.len())
}

/// Total precedence order between two versions, ignoring build metadata
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.major()
        .cmp(&b.major())
        .then_with(|| a.minor().cmp(&b.minor()))
        .then_with(|| a.patch().cmp(&b.patch()))
        .then_with(|| compare_pre_release(a.pre_release_identifiers(), b.pre_release_identifiers()))
}
