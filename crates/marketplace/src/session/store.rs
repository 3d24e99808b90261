//! Caching session store.

use parking_lot::RwLock;

use crate::models::Identity;

use super::{SessionBackend, SessionError};

/// The signed-in identity, cached in memory and mirrored to a backend.
///
/// Reads prefer the in-memory copy and fall back to deserializing the
/// persisted slot. Absent or malformed persisted content degrades to "no
/// session" rather than raising; a warning is logged for malformed data so
/// corruption is visible without breaking the caller.
pub struct SessionStore {
    backend: Box<dyn SessionBackend>,
    cached: RwLock<Option<Identity>>,
}

impl SessionStore {
    /// Create a store over the given backend.
    #[must_use]
    pub fn new(backend: Box<dyn SessionBackend>) -> Self {
        Self {
            backend,
            cached: RwLock::new(None),
        }
    }

    /// Create a store over a fresh in-memory backend.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Box::new(super::MemoryBackend::new()))
    }

    /// The current identity, if any.
    ///
    /// Checks the in-memory cache first; otherwise reads the persisted
    /// slot and caches a successful deserialization.
    pub fn current(&self) -> Option<Identity> {
        if let Some(identity) = self.cached.read().as_ref() {
            return Some(identity.clone());
        }

        let stored = match self.backend.load() {
            Ok(stored) => stored?,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted session, treating as signed out");
                return None;
            }
        };

        match serde_json::from_str::<Identity>(&stored) {
            Ok(identity) => {
                *self.cached.write() = Some(identity.clone());
                Some(identity)
            }
            Err(e) => {
                tracing::warn!(error = %e, "malformed persisted session, treating as signed out");
                None
            }
        }
    }

    /// Set the current identity and persist it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if serialization or the backend write fails;
    /// the in-memory copy is not updated in that case.
    pub fn set(&self, identity: &Identity) -> Result<(), SessionError> {
        let serialized = serde_json::to_string(identity)?;
        self.backend.save(&serialized)?;
        *self.cached.write() = Some(identity.clone());
        Ok(())
    }

    /// Clear both the in-memory and persisted session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the backend cannot clear its slot. The
    /// in-memory copy is cleared regardless.
    pub fn clear(&self) -> Result<(), SessionError> {
        *self.cached.write() = None;
        self.backend.clear()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use supplylink_core::{Email, IdentityId, Role};

    use crate::session::{JsonFileBackend, MemoryBackend};

    use super::*;

    fn identity() -> Identity {
        Identity {
            id: IdentityId::new("1"),
            email: Email::parse("buyer@example.com").unwrap(),
            full_name: "John Doe".to_owned(),
            business_name: "Joe's Tacos".to_owned(),
            role: Role::Buyer,
            phone: "+1 (555) 123-4567".to_owned(),
            address: "123 Main St, City, State".to_owned(),
            avatar: Some("/placeholder.svg?height=40&width=40".to_owned()),
        }
    }

    #[test]
    fn test_empty_store_has_no_session() {
        let store = SessionStore::in_memory();
        assert!(store.current().is_none());
    }

    #[test]
    fn test_set_then_current() {
        let store = SessionStore::in_memory();
        store.set(&identity()).unwrap();
        assert_eq!(store.current(), Some(identity()));
    }

    #[test]
    fn test_clear_removes_both_layers() {
        let backend = MemoryBackend::new();
        let store = SessionStore::new(Box::new(backend));
        store.set(&identity()).unwrap();
        store.clear().unwrap();
        assert!(store.current().is_none());
    }

    #[test]
    fn test_fresh_store_reconstructs_from_backend() {
        // Simulates a reload: a new store over the same persisted slot.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::new(Box::new(JsonFileBackend::new(&path)));
        store.set(&identity()).unwrap();
        drop(store);

        let reloaded = SessionStore::new(Box::new(JsonFileBackend::new(&path)));
        assert_eq!(reloaded.current(), Some(identity()));
    }

    #[test]
    fn test_malformed_slot_degrades_to_no_session() {
        let backend = MemoryBackend::new();
        backend.save("{not json").unwrap();

        let store = SessionStore::new(Box::new(backend));
        assert!(store.current().is_none());
    }

    #[test]
    fn test_malformed_slot_does_not_poison_later_sign_in() {
        let backend = MemoryBackend::new();
        backend.save("[]").unwrap();

        let store = SessionStore::new(Box::new(backend));
        assert!(store.current().is_none());

        store.set(&identity()).unwrap();
        assert_eq!(store.current(), Some(identity()));
    }
}
