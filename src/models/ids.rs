//! Newtype wrappers for document identifiers.
//!
//! Every collection in the household document store is keyed by an opaque
//! string. Wrapping them keeps a member ID from being passed where a
//! household ID is expected.

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapping a `String`.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from the given string.
            #[inline]
            #[must_use]
            pub const fn new(value: String) -> Self {
                Self(value)
            }

            /// Returns a reference to the inner string.
            #[inline]
            #[must_use]
            pub fn as_inner(&self) -> &str {
                &self.0
            }

            /// Consumes the wrapper and returns the inner string.
            #[inline]
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }
    };
}

define_string_id! {
    /// Identifier of a household (the tenant that owns every other record).
    HouseholdId
}

define_string_id! {
    /// Identifier of a household member.
    MemberId
}

define_string_id! {
    /// Identifier of a single row in one of the household collections.
    RecordId
}

define_string_id! {
    /// Identifier of the authenticated user linked to a member.
    UserId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn household_id_serde_roundtrip() {
        let id = HouseholdId::new("demo-household".to_owned());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""demo-household""#);
        let deserialized: HouseholdId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn string_id_display() {
        let id = MemberId::new("suami".to_owned());
        assert_eq!(id.to_string(), "suami");
    }

    #[test]
    fn id_from_inner() {
        let id: RecordId = "abc".to_owned().into();
        assert_eq!(id.as_inner(), "abc");

        let id: MemberId = "isteri".into();
        assert_eq!(id.as_inner(), "isteri");
    }

    #[test]
    fn id_into_inner() {
        let id = UserId::new("u-1".to_owned());
        assert_eq!(id.into_inner(), "u-1");
    }
}
