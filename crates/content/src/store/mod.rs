//! Key-value storage for content.
//!
//! # Layers
//!
//! - [`KeyValueStore`] - raw string-keyed backend (file directory or memory)
//! - [`JsonStore`] - typed adapter that (de)serializes whole values as JSON
//!
//! Every value is read and written as a unit; there are no partial updates.
//!
//! # Backends
//!
//! - [`FileStore`] - one `<key>.json` file per key, survives restarts
//! - [`MemoryStore`] - process-local map for tests and throwaway runs

mod file;
mod memory;

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage directory could not be created or opened.
    #[error("failed to open store at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing a key failed.
    #[error("storage I/O error for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A stored value is not valid JSON for the requested type.
    #[error("serialization error for key {key}: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Keys are limited to ASCII letters, digits, `-` and `_`.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// A durable string-keyed store.
///
/// Implementations must make `set` atomic from the caller's point of view:
/// a concurrent `get` sees either the old value or the new one, never a mix.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value at `key`, `None` if never written or deleted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    /// Overwrite the value at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be written.
    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Delete `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be written.
    fn delete(&self, key: &str) -> impl Future<Output = Result<(), StoreError>> + Send;
}

impl<S: KeyValueStore> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>> + Send {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<(), StoreError>> + Send {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> impl Future<Output = Result<(), StoreError>> + Send {
        (**self).delete(key)
    }
}

/// Reject keys that cannot be used as a file stem.
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

/// Typed JSON adapter over a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct JsonStore<S> {
    backend: S,
}

impl<S: KeyValueStore> JsonStore<S> {
    /// Wrap a raw backend.
    #[must_use]
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Get a reference to the raw backend.
    #[must_use]
    pub const fn backend(&self) -> &S {
        &self.backend
    }

    /// Load the value at `key`.
    ///
    /// Never fails: a backend error or undecodable value is logged and
    /// reported as absent.
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_load(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Stored value unreadable, treating as absent");
                None
            }
        }
    }

    /// Load the value at `key`, surfacing backend and decode failures.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails or the value does not
    /// decode as `T`.
    pub async fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.backend.get(key).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Serialization {
                key: key.to_string(),
                source,
            })
    }

    /// Overwrite the whole value at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the backend write fails.
    pub async fn save<T: Serialize + Sync + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialization {
            key: key.to_string(),
            source,
        })?;
        let bytes = raw.len();
        self.backend.set(key, raw).await?;
        debug!(key, bytes, "Saved value");
        Ok(())
    }

    /// Delete the value at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend write fails.
    pub async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.backend.delete(key).await?;
        debug!(key, "Removed value");
        Ok(())
    }

    /// Whether `key` holds a readable, non-null value.
    pub async fn contains(&self, key: &str) -> bool {
        self.load::<serde_json::Value>(key)
            .await
            .is_some_and(|value| !value.is_null())
    }
}
