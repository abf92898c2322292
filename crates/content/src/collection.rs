//! Generic CRUD over one collection key.
//!
//! A collection is a JSON array of [`Record`]s stored under a single key.
//! Every mutation reads the whole array, changes it in memory and writes the
//! whole array back; the array is the unit of persistence.

use std::marker::PhantomData;

use landing_core::Record;
use tracing::{debug, info};

use crate::error::{ContentError, Result};
use crate::store::{JsonStore, KeyValueStore};

/// CRUD view over the collection stored at `key`.
pub struct CollectionStore<'a, S, T> {
    store: &'a JsonStore<S>,
    key: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<'a, S, T> CollectionStore<'a, S, T>
where
    S: KeyValueStore,
    T: Record,
{
    /// Create a view over `key` in `store`.
    #[must_use]
    pub const fn new(store: &'a JsonStore<S>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _record: PhantomData,
        }
    }

    /// The storage key of this collection.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// All records in insertion order; empty if the key is absent.
    pub async fn query(&self) -> Vec<T> {
        self.store.load(self.key).await.unwrap_or_default()
    }

    /// The record with `id`, if present.
    pub async fn get(&self, id: &T::Id) -> Option<T> {
        self.query().await.into_iter().find(|r| r.id() == id)
    }

    /// Append `record` to the end of the collection.
    ///
    /// Does not inspect the id; callers assign ids before posting.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Store` if the collection cannot be read or written.
    pub async fn post(&self, record: T) -> Result<T> {
        let mut records = self.load_for_write().await?;
        records.push(record.clone());
        self.store.save(self.key, &records).await?;
        debug!(key = self.key, id = %record.id(), "Posted record");
        Ok(record)
    }

    /// Replace the first record whose id equals `record.id()`.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` if no record has that id (the
    /// collection is left untouched), or `ContentError::Store` on storage
    /// failure.
    pub async fn put(&self, record: T) -> Result<T> {
        let mut records = self.load_for_write().await?;
        let Some(slot) = records.iter_mut().find(|r| r.id() == record.id()) else {
            return Err(ContentError::NotFound {
                kind: T::KIND,
                id: record.id().to_string(),
            });
        };
        *slot = record.clone();
        self.store.save(self.key, &records).await?;
        debug!(key = self.key, id = %record.id(), "Replaced record");
        Ok(record)
    }

    /// Delete the first record with `id`.
    ///
    /// Returns the removed record, or `None` when no record had that id.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Store` if the collection cannot be read or written.
    pub async fn remove(&self, id: &T::Id) -> Result<Option<T>> {
        let mut records = self.load_for_write().await?;
        let Some(position) = records.iter().position(|r| r.id() == id) else {
            info!(key = self.key, %id, "Remove skipped, id not present");
            return Ok(None);
        };
        let removed = records.remove(position);
        self.store.save(self.key, &records).await?;
        debug!(key = self.key, %id, "Removed record");
        Ok(Some(removed))
    }

    /// Strict read used by mutations so an unreadable array is never overwritten.
    async fn load_for_write(&self) -> Result<Vec<T>> {
        Ok(self
            .store
            .try_load::<Vec<T>>(self.key)
            .await?
            .unwrap_or_default())
    }
}
