use super::precedence;
use crate::notation::{
    BUILD_METADATA_PREFIX, BUILD_METADATA_SEPARATOR, PRE_RELEASE_PREFIX, PRE_RELEASE_SEPARATOR,
    VERSION_NUMBER_SEPARATOR,
};
use std::cmp::Ordering;
use std::fmt;

/// Semantic version representation
///
/// Immutable once built. Equality and hashing cover all five parts, including
/// build metadata, while [`Version::cmp_precedence`] ignores build metadata.
/// Two versions can therefore share precedence without being equal, which is
/// why `Version` does not implement `Ord`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Vec<String>,
    build_metadata: Vec<String>,
}

impl Version {
    /// Assembles an already validated version; only the builder calls this
    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Vec<String>,
        build_metadata: Vec<String>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The `major.minor.patch` triple
    pub fn version_core(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.major,
            self.minor,
            self.patch,
            sep = VERSION_NUMBER_SEPARATOR
        )
    }

    pub fn pre_release_identifiers(&self) -> &[String] {
        &self.pre_release
    }

    /// Pre-release identifiers joined by '.', or an empty string
    pub fn pre_release(&self) -> String {
        self.pre_release
            .join(PRE_RELEASE_SEPARATOR.to_string().as_str())
    }

    /// Pre-release with its leading '-', or an empty string
    pub fn pre_release_with_prefix(&self) -> String {
        if self.is_pre_release_version() {
            format!("{}{}", PRE_RELEASE_PREFIX, self.pre_release())
        } else {
            String::new()
        }
    }

    pub fn build_metadata_identifiers(&self) -> &[String] {
        &self.build_metadata
    }

    /// Build metadata identifiers joined by '.', or an empty string
    pub fn build_metadata(&self) -> String {
        self.build_metadata
            .join(BUILD_METADATA_SEPARATOR.to_string().as_str())
    }

    /// Build metadata with its leading '+', or an empty string
    pub fn build_metadata_with_prefix(&self) -> String {
        if self.has_build_metadata() {
            format!("{}{}", BUILD_METADATA_PREFIX, self.build_metadata())
        } else {
            String::new()
        }
    }

    pub fn has_build_metadata(&self) -> bool {
        !self.build_metadata.is_empty()
    }

    /// Major version zero is for initial development, anything may change
    pub fn is_initial_development(&self) -> bool {
        self.major == 0
    }

    pub fn has_stable_public_api(&self) -> bool {
        !self.is_initial_development()
    }

    pub fn is_pre_release_version(&self) -> bool {
        !self.pre_release.is_empty()
    }

    pub fn is_normal_version(&self) -> bool {
        !self.is_pre_release_version()
    }

    /// Compare precedence with another version, ignoring build metadata
    ///
    /// # Example
    /// ```ignore
    /// let rc = Version::with_pre_release(1, 0, 0, "rc.1")?;
    /// let release = Version::new(1, 0, 0)?;
    /// assert_eq!(rc.cmp_precedence(&release), Ordering::Less);
    /// ```
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        precedence::compare(self, other)
    }

    /// True if neither version takes precedence over the other.
    /// Unlike `==`, build metadata is ignored.
    pub fn precedence_eq(&self, other: &Version) -> bool {
        self.cmp_precedence(other) == Ordering::Equal
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.version_core(),
            self.pre_release_with_prefix(),
            self.build_metadata_with_prefix()
        )
    }
}
