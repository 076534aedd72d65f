//! Regex rendition of the SemVer grammar and the combined-string parser
//!
//! See https://semver.org/#backusnaur-form-grammar-for-valid-semver-versions
//!
//! The fragments compose the same way the BNF rules do. Parsing first checks
//! the whole string against [`VERSION`], then hands the captured parts to
//! [`VersionBuilder`] so the identifier rules are applied in one place.

use crate::domain::factory::VersionBuilder;
use crate::domain::version::Version;
use crate::error::{Result, VersionError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;
use tracing::debug;

/// `<numeric identifier>`: "0" or a digit sequence without leading zero
pub const NUMERIC_IDENTIFIER: &str = r"0|[1-9][0-9]*";

/// `<alphanumeric identifier>`: contains at least one letter or hyphen
pub const ALPHANUMERIC_IDENTIFIER: &str = r"[0-9]*[A-Za-z-][0-9A-Za-z-]*";

/// `<build identifier>`: any non-empty run of identifier characters
pub const BUILD_IDENTIFIER: &str = r"[0-9A-Za-z-]+";

/// `<pre-release identifier>`
pub static PRE_RELEASE_IDENTIFIER: Lazy<String> =
    Lazy::new(|| format!("(?:{})|(?:{})", ALPHANUMERIC_IDENTIFIER, NUMERIC_IDENTIFIER));

/// `<pre-release>`: dot-separated pre-release identifiers
pub static PRE_RELEASE: Lazy<String> = Lazy::new(|| {
    format!(
        r"(?:{id})(?:\.(?:{id}))*",
        id = PRE_RELEASE_IDENTIFIER.as_str()
    )
});

/// `<build>`: dot-separated build identifiers
pub static BUILD: Lazy<String> =
    Lazy::new(|| format!(r"{id}(?:\.{id})*", id = BUILD_IDENTIFIER));

/// `<version core>` with the three numbers captured as `major`, `minor`, `patch`
pub static VERSION_CORE: Lazy<String> = Lazy::new(|| {
    format!(
        r"(?P<major>{n})\.(?P<minor>{n})\.(?P<patch>{n})",
        n = NUMERIC_IDENTIFIER
    )
});

/// `<valid semver>`, anchored, capturing `pre` and `build`
pub static VERSION: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"^{core}(?:-(?P<pre>{pre}))?(?:\+(?P<build>{build}))?$",
        core = VERSION_CORE.as_str(),
        pre = PRE_RELEASE.as_str(),
        build = BUILD.as_str()
    );
    Regex::new(&pattern).expect("semver grammar is a valid regex")
});

static PRE_RELEASE_IDENTIFIER_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^(?:{})$", PRE_RELEASE_IDENTIFIER.as_str()))
        .expect("pre-release identifier grammar is a valid regex")
});

static BUILD_IDENTIFIER_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^(?:{})$", BUILD_IDENTIFIER))
        .expect("build identifier grammar is a valid regex")
});

/// Returns true if `input` is a complete, valid semantic version string
pub fn is_valid_version(input: &str) -> bool {
    VERSION.is_match(input)
}

/// Returns true if `identifier` is a valid single pre-release identifier
pub fn is_valid_pre_release_identifier(identifier: &str) -> bool {
    PRE_RELEASE_IDENTIFIER_ONLY.is_match(identifier)
}

/// Returns true if `identifier` is a valid single build identifier
pub fn is_valid_build_identifier(identifier: &str) -> bool {
    BUILD_IDENTIFIER_ONLY.is_match(identifier)
}

fn number(input: &str, value: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .map_err(|_| VersionError::invalid_format(input))
}

/// Parse a combined version string such as "1.2.3-alpha+001"
pub fn parse_version(input: &str) -> Result<Version> {
    let Some(caps) = VERSION.captures(input) else {
        debug!(input, "rejected version string not matching the grammar");
        return Err(VersionError::invalid_format(input));
    };

    let builder = VersionBuilder::from_numbers(
        number(input, &caps["major"])?,
        number(input, &caps["minor"])?,
        number(input, &caps["patch"])?,
    )
    .pre_release(caps.name("pre").map_or("", |m| m.as_str()))
    .build_metadata(caps.name("build").map_or("", |m| m.as_str()));

    builder.build()
}

impl Version {
    /// Parse a combined version string such as "1.2.3-alpha+001"
    pub fn parse(input: &str) -> Result<Self> {
        parse_version(input)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        parse_version(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_versions() {
        for input in [
            "0.0.4",
            "1.2.3",
            "10.20.30",
            "1.1.2-prerelease+meta",
            "1.1.2+meta",
            "1.1.2+meta-valid",
            "1.0.0-alpha",
            "1.0.0-alpha.beta.1",
            "1.0.0-alpha.0valid",
            "1.0.0-alpha-a.b-c-somethinglong+build.1-aef.1-its-okay",
            "1.0.0-rc.1+build.123",
            "1.0.0+0.build.1-rc.10000aaa-kk-0.1",
            "1.0.0-0A.is.legal",
            "1.2.3----RC-SNAPSHOT.12.9.1--.12+788",
        ] {
            assert!(is_valid_version(input), "expected valid: {}", input);
        }
    }

    #[test]
    fn test_invalid_versions() {
        for input in [
            "",
            "1",
            "1.2",
            "1.2.3.4",
            "01.1.1",
            "1.01.1",
            "1.1.01",
            "1.2.3-",
            "1.2.3+",
            "1.2.3-0123",
            "1.2.3-0123.0123",
            "1.2.3-alpha..1",
            "1.2.3-alpha_1",
            "+invalid",
            "-invalid",
            "1.2.3-alpha+beta+gamma",
            " 1.2.3",
            "v1.2.3",
        ] {
            assert!(!is_valid_version(input), "expected invalid: {}", input);
        }
    }

    #[test]
    fn test_identifier_grammar() {
        assert!(is_valid_pre_release_identifier("0"));
        assert!(is_valid_pre_release_identifier("alpha"));
        assert!(is_valid_pre_release_identifier("01a"));
        assert!(!is_valid_pre_release_identifier("01"));
        assert!(!is_valid_pre_release_identifier(""));
        assert!(!is_valid_pre_release_identifier("a.b"));

        assert!(is_valid_build_identifier("001"));
        assert!(is_valid_build_identifier("exp-1"));
        assert!(!is_valid_build_identifier("exp_1"));
        assert!(!is_valid_build_identifier(""));
    }

    #[test]
    fn test_parse_full_version() {
        let v = parse_version("1.2.3-alpha.1+exp.sha.5114f85").unwrap();
        assert_eq!((v.major(), v.minor(), v.patch()), (1, 2, 3));
        assert_eq!(v.pre_release_identifiers(), &["alpha", "1"]);
        assert_eq!(v.build_metadata_identifiers(), &["exp", "sha", "5114f85"]);
        assert_eq!(v.to_string(), "1.2.3-alpha.1+exp.sha.5114f85");
    }

    #[test]
    fn test_parse_matches_factory() {
        let parsed: Version = "2.0.0-rc.1".parse().unwrap();
        assert_eq!(parsed, Version::with_pre_release(2, 0, 0, "rc.1").unwrap());

        let parsed = Version::parse("1.0.0+001").unwrap();
        assert_eq!(parsed, Version::with_build_metadata(1, 0, 0, "001").unwrap());
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert_eq!(
            parse_version("1.2"),
            Err(VersionError::invalid_format("1.2"))
        );
        assert!(parse_version("1.2.3-01").is_err());
        assert!("1.2.3-".parse::<Version>().is_err());
    }

    #[test]
    fn test_parse_component_overflow() {
        let input = "18446744073709551616.0.0";
        assert_eq!(
            parse_version(input),
            Err(VersionError::invalid_format(input))
        );
        let max = parse_version("18446744073709551615.0.0").unwrap();
        assert_eq!(max.major(), u64::MAX);
    }
}
