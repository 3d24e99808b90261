//! Session slot backends.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use parking_lot::RwLock;

use super::SessionError;

/// A single persistent key-value slot holding the serialized session.
///
/// Implementations store one opaque string; the [`super::SessionStore`]
/// owns the serialization format.
pub trait SessionBackend: Send + Sync {
    /// Read the slot. Absent content is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if the slot exists but cannot be read.
    fn load(&self) -> Result<Option<String>, SessionError>;

    /// Overwrite the slot.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if the slot cannot be written.
    fn save(&self, value: &str) -> Result<(), SessionError>;

    /// Empty the slot. Clearing an already-empty slot succeeds.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if the slot cannot be removed.
    fn clear(&self) -> Result<(), SessionError>;
}

/// In-process slot, scoped to the backend's lifetime.
///
/// The test substitute for real storage; also the default when no session
/// file is configured.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slot: RwLock<Option<String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBackend for MemoryBackend {
    fn load(&self) -> Result<Option<String>, SessionError> {
        Ok(self.slot.read().clone())
    }

    fn save(&self, value: &str) -> Result<(), SessionError> {
        *self.slot.write() = Some(value.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.slot.write() = None;
        Ok(())
    }
}

/// File-backed slot, durable across process restarts.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend over the given file path.
    ///
    /// The file is created on first save; a missing file reads as an
    /// empty slot.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionBackend for JsonFileBackend {
    fn load(&self) -> Result<Option<String>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, value: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, value)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
