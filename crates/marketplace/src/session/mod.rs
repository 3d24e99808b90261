//! Session persistence.
//!
//! The signed-in identity is mirrored into a single key-value slot so it
//! survives across "reloads" (a fresh [`SessionStore`] over the same
//! backend). The backend is injectable so tests can substitute an
//! in-memory fake for the durable file slot.

mod backend;
mod store;

pub use backend::{JsonFileBackend, MemoryBackend, SessionBackend};
pub use store::SessionStore;

use thiserror::Error;

/// Errors that can occur while persisting the session.
///
/// Absent or malformed persisted content is deliberately *not* an error;
/// reads degrade to "no session" instead.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing the backing slot failed.
    #[error("session storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the identity for storage failed.
    #[error("session serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
