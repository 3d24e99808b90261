//! Authentication service.
//!
//! The facade every other component uses for identity: sign-up, sign-in,
//! sign-out, and the synchronous current-user accessor. Wraps the shared
//! [`Directory`] and the persisted [`SessionStore`].

mod error;

pub use error::AuthError;

use std::sync::Arc;
use std::time::Duration;

use supplylink_core::{Email, IdentityId};

use crate::config::MarketplaceConfig;
use crate::directory::Directory;
use crate::models::{Identity, NewIdentity};
use crate::session::{SessionError, SessionStore};

/// Authentication facade over the directory and session store.
///
/// Sign-up and sign-in are async because they model the upstream request
/// latency (configurable, zero by default); the current-user accessor is
/// synchronous.
pub struct AuthService {
    directory: Arc<Directory>,
    session: SessionStore,
    simulated_latency: Duration,
}

impl AuthService {
    /// Create a service over an existing directory and session store.
    #[must_use]
    pub fn new(directory: Arc<Directory>, session: SessionStore) -> Self {
        Self {
            directory,
            session,
            simulated_latency: Duration::ZERO,
        }
    }

    /// Build a service from configuration: sample-seeded directory,
    /// session backend per the config, configured latency.
    #[must_use]
    pub fn from_config(config: &MarketplaceConfig) -> Self {
        Self::new(
            Arc::new(Directory::with_sample_identities()),
            SessionStore::new(config.session_backend()),
        )
        .with_simulated_latency(config.simulated_latency)
    }

    /// Set the artificial delay applied to sign-up and sign-in.
    #[must_use]
    pub const fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    /// Register a new identity.
    ///
    /// Assigns a fresh unique ID, appends the record to the directory,
    /// and signs the new identity in (sets and persists the session).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AlreadyRegistered` if the email already exists;
    /// the directory and session are left untouched in that case.
    /// Returns `AuthError::Session` if the session cannot be persisted.
    pub async fn sign_up(&self, new_identity: NewIdentity) -> Result<Identity, AuthError> {
        self.simulate_latency().await;

        let identity = new_identity.into_identity(IdentityId::generate());
        let email = identity.email.clone();

        if !self.directory.insert_unique(identity.clone()) {
            tracing::debug!(email = %email, "sign-up rejected, email already registered");
            return Err(AuthError::AlreadyRegistered);
        }

        self.session.set(&identity)?;
        tracing::info!(id = %identity.id, email = %email, role = %identity.role, "signed up");

        Ok(identity)
    }

    /// Sign in with email and password.
    ///
    /// Looks up the directory by exact email match. The password must be
    /// non-empty but is not verified against anything; no credential
    /// store exists behind this facade.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email does not parse.
    /// Returns `AuthError::EmptyPassword` if the password is empty.
    /// Returns `AuthError::InvalidCredentials` if the email is unknown;
    /// the session is left unchanged.
    /// Returns `AuthError::Session` if the session cannot be persisted.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        self.simulate_latency().await;

        let email = Email::parse(email)?;

        if password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }

        let identity = self
            .directory
            .find_by_email(&email)
            .ok_or(AuthError::InvalidCredentials)?;

        self.session.set(&identity)?;
        tracing::info!(id = %identity.id, email = %email, "signed in");

        Ok(identity)
    }

    /// Clear the in-memory and persisted session.
    ///
    /// Signing out while already signed out is not an error.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the persisted slot cannot be cleared.
    pub fn sign_out(&self) -> Result<(), SessionError> {
        self.session.clear()?;
        tracing::info!("signed out");
        Ok(())
    }

    /// The currently signed-in identity, if any.
    ///
    /// Falls back to the persisted session when nothing is cached;
    /// absent or malformed persisted state reads as signed out.
    #[must_use]
    pub fn current_user(&self) -> Option<Identity> {
        self.session.current()
    }

    /// Whether anyone is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// The shared directory behind this facade.
    #[must_use]
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    async fn simulate_latency(&self) {
        if !self.simulated_latency.is_zero() {
            tokio::time::sleep(self.simulated_latency).await;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use supplylink_core::Role;

    use super::*;

    fn service() -> AuthService {
        AuthService::new(
            Arc::new(Directory::with_sample_identities()),
            SessionStore::in_memory(),
        )
    }

    fn new_identity(email: &str) -> NewIdentity {
        NewIdentity {
            email: Email::parse(email).unwrap(),
            full_name: "Asha Rao".to_owned(),
            business_name: "Asha's Chaat Corner".to_owned(),
            role: Role::Buyer,
            phone: "+91 90000 00000".to_owned(),
            address: "MG Road, Bengaluru".to_owned(),
            avatar: None,
        }
    }

    #[tokio::test]
    async fn test_from_config_builds_seeded_signed_out_service() {
        let auth = AuthService::from_config(&MarketplaceConfig::default());
        assert!(!auth.directory().is_empty());
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_up_assigns_fresh_id_and_signs_in() {
        let auth = service();
        let before = auth.directory().len();

        let created = auth.sign_up(new_identity("asha@example.com")).await.unwrap();

        assert_eq!(created.email.as_str(), "asha@example.com");
        assert!(!created.id.as_str().is_empty());
        assert_eq!(auth.directory().len(), before + 1);
        assert_eq!(auth.current_user(), Some(created));
    }

    #[tokio::test]
    async fn test_sign_up_duplicate_email_fails_cleanly() {
        let auth = service();
        let before = auth.directory().len();

        let result = auth.sign_up(new_identity("buyer@example.com")).await;

        assert!(matches!(result, Err(AuthError::AlreadyRegistered)));
        assert_eq!(auth.directory().len(), before);
        assert!(auth.current_user().is_none());
    }

    #[tokio::test]
    async fn test_sign_in_any_nonempty_password_succeeds() {
        let auth = service();

        let identity = auth.sign_in("buyer@example.com", "whatever").await.unwrap();

        assert_eq!(identity.email.as_str(), "buyer@example.com");
        assert_eq!(auth.current_user(), Some(identity));
        assert!(auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_in_empty_password_rejected() {
        let auth = service();
        let result = auth.sign_in("buyer@example.com", "").await;
        assert!(matches!(result, Err(AuthError::EmptyPassword)));
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_in_unknown_email_leaves_session_unset() {
        let auth = service();

        let result = auth.sign_in("nobody@example.com", "pw").await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert!(auth.current_user().is_none());
    }

    #[tokio::test]
    async fn test_sign_out_clears_session() {
        let auth = service();
        auth.sign_in("supplier@example.com", "pw").await.unwrap();

        auth.sign_out().unwrap();

        assert!(auth.current_user().is_none());
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_out_when_signed_out_is_ok() {
        let auth = service();
        auth.sign_out().unwrap();
    }
}
