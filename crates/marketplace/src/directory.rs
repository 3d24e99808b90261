//! In-memory identity directory.
//!
//! The directory is the process-lifetime collection of all known
//! identities, searched by email during sign-in and appended to during
//! sign-up. It is reconstructed from fixtures on every start; only the
//! session slot outlives the process.

use parking_lot::RwLock;

use supplylink_core::Email;

use crate::models::Identity;

/// Shared, interior-mutable identity list.
///
/// All access goes through the auth facade; the lock is held only for the
/// duration of a scan or append.
pub struct Directory {
    identities: RwLock<Vec<Identity>>,
}

impl Directory {
    /// Create a directory seeded with the given identities.
    #[must_use]
    pub fn new(seed: Vec<Identity>) -> Self {
        Self {
            identities: RwLock::new(seed),
        }
    }

    /// Create an empty directory.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Create a directory seeded with the sample identities.
    #[must_use]
    pub fn with_sample_identities() -> Self {
        Self::new(crate::catalog::fixtures::sample_identities())
    }

    /// Find an identity by exact email match.
    #[must_use]
    pub fn find_by_email(&self, email: &Email) -> Option<Identity> {
        self.identities
            .read()
            .iter()
            .find(|identity| identity.email == *email)
            .cloned()
    }

    /// Whether an identity with this email exists.
    #[must_use]
    pub fn contains_email(&self, email: &Email) -> bool {
        self.identities
            .read()
            .iter()
            .any(|identity| identity.email == *email)
    }

    /// Append the identity unless its email is already registered.
    ///
    /// The check and the append happen under one write lock so a
    /// duplicate can never slip in between them. Returns `false` (and
    /// leaves the directory unchanged) on a duplicate email.
    pub(crate) fn insert_unique(&self, identity: Identity) -> bool {
        let mut identities = self.identities.write();
        if identities.iter().any(|existing| existing.email == identity.email) {
            return false;
        }
        identities.push(identity);
        true
    }

    /// Number of registered identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.identities.read().len()
    }

    /// Whether the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identities.read().is_empty()
    }
}
