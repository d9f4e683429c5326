//! Closed one-of groups for polymorphic schema members.
//!
//! Several API schemas carry groups of mutually exclusive members, for example
//! an address is exactly one of `ip_netmask`, `ip_range`, `ip_wildcard` or
//! `fqdn`. [`one_of!`](crate::one_of) turns such a group into an enum with one
//! arm per member. On the wire the enum is a single JSON member, so it can be
//! flattened into its parent struct or used as a nested object.
//!
//! Decoding rejects a group with no member or with more than one member. A
//! member sent as JSON `null` counts as absent.

use serde::{Deserialize, Serialize};

/// Payload for members whose presence alone carries the meaning (`"tunnel": {}`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

#[doc(hidden)]
#[must_use]
pub fn conflict_message(group: &str, first: &str, second: &str) -> String {
    format!("{group}: `{first}` and `{second}` are mutually exclusive")
}

#[doc(hidden)]
#[must_use]
pub fn missing_message(group: &str, members: &[&str]) -> String {
    format!("{group}: expected exactly one of {}", members.join(", "))
}

/// Generate an enum for a group of mutually exclusive JSON members.
///
/// ```
/// scm_core::one_of! {
///     /// Address value.
///     pub enum AddressValue {
///         /// CIDR notation.
///         IpNetmask(String) = "ip_netmask",
///         /// Fully qualified domain name.
///         Fqdn(String) = "fqdn",
///     }
/// }
///
/// let value: AddressValue = serde_json::from_str(r#"{"fqdn":"example.com"}"#).unwrap();
/// assert_eq!(value, AddressValue::Fqdn("example.com".into()));
/// assert!(serde_json::from_str::<AddressValue>(r#"{"fqdn":"a","ip_netmask":"b"}"#).is_err());
/// ```
#[macro_export]
macro_rules! one_of {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($ty:ty) = $key:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant($ty),
            )+
        }

        impl $name {
            /// Wire member names belonging to this group.
            pub const MEMBERS: &'static [&'static str] = &[$($key),+];

            /// Wire member name of the populated arm.
            #[must_use]
            pub const fn member(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $key, )+
                }
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                use $crate::__private::serde::ser::SerializeMap;

                let mut map = serializer.serialize_map(Some(1))?;
                match self {
                    $( Self::$variant(value) => map.serialize_entry($key, value)?, )+
                }
                map.end()
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                use $crate::__private::serde::de::{Error, IgnoredAny, MapAccess, Visitor};

                struct GroupVisitor;

                impl<'de> Visitor<'de> for GroupVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                        write!(f, "exactly one of {}", $name::MEMBERS.join(", "))
                    }

                    fn visit_map<A>(self, mut map: A) -> ::std::result::Result<$name, A::Error>
                    where
                        A: MapAccess<'de>,
                    {
                        let mut found: ::std::option::Option<$name> = None;
                        while let Some(key) = map.next_key::<::std::string::String>()? {
                            let value = match key.as_str() {
                                $(
                                    $key => match map.next_value::<::std::option::Option<$ty>>()? {
                                        Some(value) => $name::$variant(value),
                                        None => continue,
                                    },
                                )+
                                _ => {
                                    map.next_value::<IgnoredAny>()?;
                                    continue;
                                }
                            };
                            if let Some(previous) = &found {
                                return Err(<A::Error as Error>::custom($crate::choice::conflict_message(
                                    stringify!($name),
                                    previous.member(),
                                    value.member(),
                                )));
                            }
                            found = Some(value);
                        }
                        found.ok_or_else(|| {
                            <A::Error as Error>::custom($crate::choice::missing_message(
                                stringify!($name),
                                $name::MEMBERS,
                            ))
                        })
                    }
                }

                deserializer.deserialize_map(GroupVisitor)
            }
        }
    };
}

one_of! {
    /// Configuration container a resource lives in.
    ///
    /// Every configuration object belongs to exactly one folder, snippet or device.
    pub enum Container {
        /// Folder name.
        Folder(String) = "folder",
        /// Snippet name.
        Snippet(String) = "snippet",
        /// Device serial or name.
        Device(String) = "device",
    }
}

impl Container {
    /// Name of the container regardless of its kind.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Folder(name) | Self::Snippet(name) | Self::Device(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    crate::one_of! {
        enum DscpTos {
            Any(Empty) = "any",
            Codepoints(Vec<String>) = "codepoints",
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        #[serde(flatten)]
        container: Container,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dscp_tos: Option<DscpTos>,
    }

    #[test]
    fn container_serializes_as_single_member() {
        let value = serde_json::to_value(Container::Snippet("shared".into())).unwrap();
        assert_eq!(value, json!({ "snippet": "shared" }));
    }

    #[test]
    fn flattened_group_keeps_wire_shape() {
        let record = Record {
            name: "web".into(),
            container: Container::Folder("Texas".into()),
            dscp_tos: Some(DscpTos::Any(Empty {})),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({ "name": "web", "folder": "Texas", "dscp_tos": { "any": {} } })
        );

        let decoded: Record = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn flattened_group_ignores_sibling_fields() {
        let decoded: Record =
            serde_json::from_value(json!({ "name": "db", "device": "0079", "extra": 1 })).unwrap();
        assert_eq!(decoded.container, Container::Device("0079".into()));
        assert_eq!(decoded.container.name(), "0079");
        assert!(decoded.dscp_tos.is_none());
    }

    #[test]
    fn rejects_conflicting_members() {
        let err = serde_json::from_value::<Record>(
            json!({ "name": "db", "folder": "Texas", "snippet": "shared" }),
        )
        .unwrap_err();
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn rejects_missing_member() {
        let err = serde_json::from_value::<Container>(json!({})).unwrap_err();
        assert!(err.to_string().contains("expected exactly one of folder, snippet, device"));
    }

    #[test]
    fn null_sibling_member_is_absent() {
        let decoded: Record = serde_json::from_value(json!({
            "name": "web",
            "folder": "Texas",
            "snippet": null,
            "device": null
        }))
        .unwrap();
        assert_eq!(decoded.container, Container::Folder("Texas".into()));

        let decoded: DscpTos =
            serde_json::from_value(json!({ "any": null, "codepoints": ["ef"] })).unwrap();
        assert_eq!(decoded, DscpTos::Codepoints(vec!["ef".into()]));
    }

    #[test]
    fn only_null_member_is_missing() {
        let err = serde_json::from_value::<Record>(json!({ "name": "web", "folder": null }))
            .unwrap_err();
        assert!(err.to_string().contains("expected exactly one of folder, snippet, device"));

        let err = serde_json::from_value::<Container>(json!({ "device": null })).unwrap_err();
        assert!(err.to_string().contains("expected exactly one of"));
    }

    #[test]
    fn nested_group_with_list_payload() {
        let decoded: DscpTos =
            serde_json::from_value(json!({ "codepoints": ["af11", "ef"] })).unwrap();
        assert_eq!(decoded, DscpTos::Codepoints(vec!["af11".into(), "ef".into()]));
        assert_eq!(decoded.member(), "codepoints");
    }
}
