//! Seed documents used to populate an empty store.
//!
//! A seed document is the bundled `data.json`:
//!
//! ```json
//! { "user": { ... }, "products": [ ... ], "testimonials": [ ... ] }
//! ```
//!
//! Any [`SeedError`] means the seed is unavailable; the repository recovers
//! by writing the hardcoded defaults instead.

mod file;
mod http;

use std::collections::HashSet;
use std::future::Future;
use std::hash::Hash;

use landing_core::{OwnerProfile, Product, Record, Testimonial};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use file::FileSeed;
pub use http::HttpSeed;

/// Reasons a seed document could not be obtained.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP request failed.
    #[error("seed request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("seed request returned status {0}")]
    Status(u16),

    /// The document is not valid JSON of the expected shape.
    #[error("failed to parse seed document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but breaks a collection invariant.
    #[error("invalid seed document: {0}")]
    Invalid(String),

    /// No seed source is configured.
    #[error("no seed source configured")]
    Unconfigured,
}

/// The full content of a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedDocument {
    pub user: OwnerProfile,
    pub products: Vec<Product>,
    pub testimonials: Vec<Testimonial>,
}

impl SeedDocument {
    /// Parse and check a seed document.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Parse` for malformed JSON and `SeedError::Invalid`
    /// for blank or duplicate ids.
    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        let doc: Self = serde_json::from_str(raw)?;
        doc.check()?;
        Ok(doc)
    }

    /// Enforce the same profile rules as `update_user_data`, and unique,
    /// non-blank ids within each collection.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Invalid` describing the first violation.
    pub fn check(&self) -> Result<(), SeedError> {
        self.user
            .validate()
            .map_err(|e| SeedError::Invalid(e.to_string()))?;
        check_ids(&self.products)?;
        check_ids(&self.testimonials)
    }
}

fn check_ids<T>(records: &[T]) -> Result<(), SeedError>
where
    T: Record,
    T::Id: Hash,
{
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        let id = record.id();
        if id.to_string().trim().is_empty() {
            return Err(SeedError::Invalid(format!("{} with blank id", T::KIND)));
        }
        if !seen.insert(id) {
            return Err(SeedError::Invalid(format!("duplicate {} id {id}", T::KIND)));
        }
    }
    Ok(())
}

/// Somewhere a seed document can be fetched from.
pub trait SeedSource: Send + Sync {
    /// Fetch and parse the seed document.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the document is unreachable or malformed.
    fn fetch(&self) -> impl Future<Output = Result<SeedDocument, SeedError>> + Send;
}

/// A seed source that is never available; init always falls back to defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSeed;

impl SeedSource for NoSeed {
    async fn fetch(&self) -> Result<SeedDocument, SeedError> {
        Err(SeedError::Unconfigured)
    }
}

/// Seed source chosen at runtime from configuration.
#[derive(Debug, Clone)]
pub enum AnySeed {
    File(FileSeed),
    Http(HttpSeed),
    Disabled(NoSeed),
}

impl SeedSource for AnySeed {
    async fn fetch(&self) -> Result<SeedDocument, SeedError> {
        match self {
            Self::File(seed) => seed.fetch().await,
            Self::Http(seed) => seed.fetch().await,
            Self::Disabled(seed) => seed.fetch().await,
        }
    }
}
