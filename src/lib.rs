pub mod domain;
pub mod error;
pub mod grammar;
pub mod notation;
mod serde_impl;

pub use domain::{IdentifierKind, Version, VersionBuilder};
pub use error::{Result, VersionError};
