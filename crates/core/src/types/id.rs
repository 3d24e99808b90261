//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `generate()` for fresh, collision-free IDs
/// - `From<String>` and `From<&str>` implementations
///
/// IDs are opaque strings because the directory assigns them at creation
/// time; there is no database sequence behind them.
///
/// # Example
///
/// ```rust
/// # use supplylink_core::define_id;
/// define_id!(IdentityId);
/// define_id!(OrderId);
///
/// let identity_id = IdentityId::new("1");
/// let order_id = OrderId::new("ORD-001");
///
/// // These are different types, so this won't compile:
/// // let _: IdentityId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from an existing value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh, unique ID.
            #[must_use]
            pub fn generate() -> Self {
                Self(::uuid::Uuid::new_v4().simple().to_string())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(IdentityId);
define_id!(ProductId);
define_id!(InventoryItemId);
define_id!(OrderId);
define_id!(SupplierId);
define_id!(BulkOrderId);
define_id!(MessageId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_as_str() {
        let id = OrderId::new("ORD-001");
        assert_eq!(id.as_str(), "ORD-001");
    }

    #[test]
    fn test_generate_is_unique() {
        let a = IdentityId::generate();
        let b = IdentityId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_display() {
        let id = SupplierId::new("2");
        assert_eq!(format!("{id}"), "2");
    }

    #[test]
    fn test_serde_transparent() {
        let id = InventoryItemId::new("3");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"3\"");

        let parsed: InventoryItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_from_conversions() {
        let id: IdentityId = "abc".into();
        assert_eq!(id.as_str(), "abc");

        let s: String = id.into();
        assert_eq!(s, "abc");
    }
}
