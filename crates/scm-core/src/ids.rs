//! Strongly-typed identifiers for configuration resources.
//!
//! Every configuration object is addressed by a server-assigned UUID. Wrapping
//! each in its own type keeps a folder id from being passed where an address
//! id is expected.

use crate::error::{Error, Result};

/// Macro to generate strongly-typed UUID wrapper types.
#[macro_export]
macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident, $doc:expr) => {
        $(#[$meta])*
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name($crate::ids::Uuid);

        impl $name {
            /// Creates a new identifier from a UUID.
            #[must_use]
            pub const fn new(uuid: $crate::ids::Uuid) -> Self {
                Self(uuid)
            }

            /// Creates a new random identifier (v4).
            #[must_use]
            pub fn new_v4() -> Self {
                Self($crate::ids::Uuid::new_v4())
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &$crate::ids::Uuid {
                &self.0
            }

            /// Parses an identifier from a string.
            ///
            /// # Errors
            ///
            /// Returns an error if the string is not a valid UUID.
            pub fn parse_str(input: &str) -> $crate::Result<Self> {
                $crate::ids::parse_uuid(input).map(Self)
            }
        }

        impl From<$crate::ids::Uuid> for $name {
            fn from(uuid: $crate::ids::Uuid) -> Self {
                Self(uuid)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> $crate::Result<Self> {
                Self::parse_str(s)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                <$crate::ids::Uuid as $crate::__private::serde::Deserialize>::deserialize(deserializer)
                    .map(Self)
            }
        }
    };
}

pub use uuid::Uuid;

/// Parses a UUID string.
///
/// # Errors
///
/// Returns [`Error::InvalidId`] if the string is not a valid UUID.
pub fn parse_uuid(input: &str) -> Result<Uuid> {
    Uuid::parse_str(input).map_err(|_| Error::InvalidId(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_UUID: &str = "550e8400-e29b-41d4-a716-446655440000";
    const INVALID_UUID: &str = "not-a-uuid";

    crate::resource_id!(SampleId, "Sample resource id");

    #[test]
    fn test_parse_valid() {
        let id = SampleId::parse_str(VALID_UUID).unwrap();
        assert_eq!(id.to_string(), VALID_UUID);
    }

    #[test]
    fn test_parse_invalid() {
        let err = SampleId::parse_str(INVALID_UUID).unwrap_err();
        assert_eq!(err, Error::InvalidId(INVALID_UUID.to_string()));
    }

    #[test]
    fn test_from_str() {
        let id: SampleId = VALID_UUID.parse().unwrap();
        assert_eq!(id.as_uuid(), &Uuid::parse_str(VALID_UUID).unwrap());
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = SampleId::parse_str(VALID_UUID).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{VALID_UUID}\""));

        let decoded: SampleId = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, id);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        assert!(serde_json::from_str::<SampleId>("\"not-a-uuid\"").is_err());
    }

    #[test]
    fn test_new_v4_is_random() {
        assert_ne!(SampleId::new_v4(), SampleId::new_v4());
    }
}
