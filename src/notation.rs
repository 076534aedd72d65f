//! Characters used when rendering a semantic version
//!
//! See https://semver.org/#backusnaur-form-grammar-for-valid-semver-versions

/// Separates major, minor and patch in the version core
pub const VERSION_NUMBER_SEPARATOR: char = '.';

/// Introduces the pre-release section
pub const PRE_RELEASE_PREFIX: char = '-';

/// Separates pre-release identifiers
pub const PRE_RELEASE_SEPARATOR: char = '.';

/// Introduces the build metadata section
pub const BUILD_METADATA_PREFIX: char = '+';

/// Separates build metadata identifiers
pub const BUILD_METADATA_SEPARATOR: char = '.';
