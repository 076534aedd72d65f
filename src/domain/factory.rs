//! Construction of versions
//!
//! Every constructor validates eagerly and either returns a complete
//! [`Version`] or the first violation found. Blank qualifier strings mean
//! "no qualifier" and are never an error here.

use super::identifier::{parse_identifiers, IdentifierKind};
use super::version::Version;
use crate::error::{Result, VersionError};
use crate::notation::{BUILD_METADATA_SEPARATOR, PRE_RELEASE_SEPARATOR};
use tracing::{debug, trace};

fn component(name: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| {
        debug!(component = name, value, "rejected negative version component");
        VersionError::negative_component(name, value)
    })
}

fn non_blank(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Validate-then-construct builder for [`Version`]
///
/// # Example
/// ```ignore
/// let v = VersionBuilder::new(1, 2, 3)?
///     .pre_release("alpha.1")
///     .build_metadata("exp.sha.5114f85")
///     .build()?;
/// assert_eq!(v.to_string(), "1.2.3-alpha.1+exp.sha.5114f85");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionBuilder {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<String>,
    build_metadata: Option<String>,
}

impl VersionBuilder {
    /// Start from a numeric core, rejecting negative components
    pub fn new(major: i64, minor: i64, patch: i64) -> Result<Self> {
        Ok(VersionBuilder {
            major: component("major", major)?,
            minor: component("minor", minor)?,
            patch: component("patch", patch)?,
            pre_release: None,
            build_metadata: None,
        })
    }

    /// Start from an already non-negative numeric core
    pub fn from_numbers(major: u64, minor: u64, patch: u64) -> Self {
        VersionBuilder {
            major,
            minor,
            patch,
            pre_release: None,
            build_metadata: None,
        }
    }

    /// Start from the core of an existing version, dropping its qualifiers
    pub fn from_core(core: &Version) -> Self {
        VersionBuilder::from_numbers(core.major(), core.minor(), core.patch())
    }

    /// Attach a dot-separated pre-release; a blank string clears it
    pub fn pre_release(mut self, pre_release: &str) -> Self {
        self.pre_release = non_blank(pre_release);
        self
    }

    /// Attach dot-separated build metadata; a blank string clears it
    pub fn build_metadata(mut self, build_metadata: &str) -> Self {
        self.build_metadata = non_blank(build_metadata);
        self
    }

    /// Validate the qualifiers and produce the version
    pub fn build(self) -> Result<Version> {
        let pre_release = match self.pre_release {
            Some(raw) => parse_identifiers(&raw, PRE_RELEASE_SEPARATOR, IdentifierKind::PreRelease)?,
            None => Vec::new(),
        };
        let build_metadata = match self.build_metadata {
            Some(raw) => parse_identifiers(
                &raw,
                BUILD_METADATA_SEPARATOR,
                IdentifierKind::BuildMetadata,
            )?,
            None => Vec::new(),
        };

        let version = Version::from_parts(
            self.major,
            self.minor,
            self.patch,
            pre_release,
            build_metadata,
        );
        trace!(%version, "constructed version");
        Ok(version)
    }
}

impl Version {
    /// `0.0.1`, the first version of a project in initial development
    pub fn initial_development() -> Self {
        Version::from_parts(0, 0, 1, Vec::new(), Vec::new())
    }

    /// `1.0.0`, the first version with a public API
    pub fn initial_public() -> Self {
        Version::from_parts(1, 0, 0, Vec::new(), Vec::new())
    }

    /// `1.0.0` if the API is public, `0.0.1` otherwise
    pub fn initial(is_public: bool) -> Self {
        if is_public {
            Version::initial_public()
        } else {
            Version::initial_development()
        }
    }

    /// Create a normal version, rejecting negative components
    pub fn new(major: i64, minor: i64, patch: i64) -> Result<Self> {
        VersionBuilder::new(major, minor, patch)?.build()
    }

    /// Create a version with an optional pre-release (blank means none)
    pub fn with_pre_release(major: i64, minor: i64, patch: i64, pre_release: &str) -> Result<Self> {
        VersionBuilder::new(major, minor, patch)?
            .pre_release(pre_release)
            .build()
    }

    /// Create a version with optional build metadata (blank means none)
    pub fn with_build_metadata(
        major: i64,
        minor: i64,
        patch: i64,
        build_metadata: &str,
    ) -> Result<Self> {
        VersionBuilder::new(major, minor, patch)?
            .build_metadata(build_metadata)
            .build()
    }

    /// Create a version with an optional pre-release and optional build metadata
    pub fn with_pre_release_and_build_metadata(
        major: i64,
        minor: i64,
        patch: i64,
        pre_release: &str,
        build_metadata: &str,
    ) -> Result<Self> {
        VersionBuilder::new(major, minor, patch)?
            .pre_release(pre_release)
            .build_metadata(build_metadata)
            .build()
    }

    /// Reuse the core of `core` with a new optional pre-release
    pub fn from_core_with_pre_release(core: &Version, pre_release: &str) -> Result<Self> {
        VersionBuilder::from_core(core)
            .pre_release(pre_release)
            .build()
    }

    /// Reuse the core of `core` with new optional build metadata
    pub fn from_core_with_build_metadata(core: &Version, build_metadata: &str) -> Result<Self> {
        VersionBuilder::from_core(core)
            .build_metadata(build_metadata)
            .build()
    }

    /// Reuse the core of `core` with a new optional pre-release and build metadata
    pub fn from_core_with_pre_release_and_build_metadata(
        core: &Version,
        pre_release: &str,
        build_metadata: &str,
    ) -> Result<Self> {
        VersionBuilder::from_core(core)
            .pre_release(pre_release)
            .build_metadata(build_metadata)
            .build()
    }

    /// `(major + 1).0.0`; qualifiers are discarded
    pub fn increase_major(&self) -> Result<Self> {
        let major = self
            .major()
            .checked_add(1)
            .ok_or(VersionError::ComponentOverflow { component: "major" })?;
        Ok(Version::from_parts(major, 0, 0, Vec::new(), Vec::new()))
    }

    /// `major.(minor + 1).0`; qualifiers are discarded
    pub fn increase_minor(&self) -> Result<Self> {
        let minor = self
            .minor()
            .checked_add(1)
            .ok_or(VersionError::ComponentOverflow { component: "minor" })?;
        Ok(Version::from_parts(self.major(), minor, 0, Vec::new(), Vec::new()))
    }

    /// `major.minor.(patch + 1)`; qualifiers are discarded
    pub fn increase_patch(&self) -> Result<Self> {
        let patch = self
            .patch()
            .checked_add(1)
            .ok_or(VersionError::ComponentOverflow { component: "patch" })?;
        Ok(Version::from_parts(
            self.major(),
            self.minor(),
            patch,
            Vec::new(),
            Vec::new(),
        ))
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::initial_development()
    }
}
