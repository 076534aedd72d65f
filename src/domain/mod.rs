//! Domain logic - the version value, its validation rules and precedence

pub mod factory;
pub mod identifier;
pub mod precedence;
pub mod version;

pub use factory::VersionBuilder;
pub use identifier::IdentifierKind;
pub use version::Version;
