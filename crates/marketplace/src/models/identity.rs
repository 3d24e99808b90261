//! Identity domain types.
//!
//! These types represent validated domain objects; the serialized form is
//! also what the session slot stores.

use serde::{Deserialize, Serialize};

use supplylink_core::{Email, IdentityId, Role};

/// A directory member.
///
/// The role tag distinguishes buyer behavior (browsing suppliers, managing
/// stock) from supplier behavior (fulfilling orders).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique directory ID.
    pub id: IdentityId,
    /// Email address, unique within the directory.
    pub email: Email,
    /// Contact person's name.
    pub full_name: String,
    /// Registered business name.
    pub business_name: String,
    /// Marketplace role.
    pub role: Role,
    /// Contact phone number.
    pub phone: String,
    /// Business address.
    pub address: String,
    /// Optional avatar image path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Sign-up payload: an identity before the directory has assigned an ID.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub email: Email,
    pub full_name: String,
    pub business_name: String,
    pub role: Role,
    pub phone: String,
    pub address: String,
    pub avatar: Option<String>,
}

impl NewIdentity {
    /// Attach a freshly assigned ID, producing a directory-ready identity.
    pub(crate) fn into_identity(self, id: IdentityId) -> Identity {
        Identity {
            id,
            email: self.email,
            full_name: self.full_name,
            business_name: self.business_name,
            role: self.role,
            phone: self.phone,
            address: self.address,
            avatar: self.avatar,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_serde_roundtrip() {
        let identity = Identity {
            id: IdentityId::new("1"),
            email: Email::parse("buyer@example.com").unwrap(),
            full_name: "John Doe".to_owned(),
            business_name: "Joe's Tacos".to_owned(),
            role: Role::Buyer,
            phone: "+1 (555) 123-4567".to_owned(),
            address: "123 Main St, City, State".to_owned(),
            avatar: None,
        };

        let json = serde_json::to_string(&identity).unwrap();
        let parsed: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, identity);
    }

    #[test]
    fn test_avatar_omitted_when_absent() {
        let identity = Identity {
            id: IdentityId::new("1"),
            email: Email::parse("buyer@example.com").unwrap(),
            full_name: "John Doe".to_owned(),
            business_name: "Joe's Tacos".to_owned(),
            role: Role::Buyer,
            phone: String::new(),
            address: String::new(),
            avatar: None,
        };

        let json = serde_json::to_string(&identity).unwrap();
        assert!(!json.contains("avatar"));
    }
}
