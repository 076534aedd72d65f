//! serde support: a version travels as its canonical string

use crate::domain::version::Version;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VersionVisitor;

        impl<'de> Visitor<'de> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a semantic version string")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Version::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::value::{Error as ValueError, StrDeserializer};
    use serde::de::IntoDeserializer;

    #[test]
    fn test_deserialize_from_str() {
        let de: StrDeserializer<ValueError> = "1.0.0-beta.11+sha".into_deserializer();
        let v = Version::deserialize(de).unwrap();
        assert_eq!(
            v,
            Version::with_pre_release_and_build_metadata(1, 0, 0, "beta.11", "sha").unwrap()
        );
    }

    #[test]
    fn test_deserialize_reports_validation_error() {
        let de: StrDeserializer<ValueError> = "1.0.0-01".into_deserializer();
        let err = Version::deserialize(de).unwrap_err();
        assert!(err.to_string().contains("Invalid version format"));
    }
}
