//! Integration tests for the landing page content store.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p landing-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `content_seeding` - `init_data` / `reset_data` against seed outcomes
//! - `content_crud` - Product and testimonial lifecycles, profile updates
//! - `content_durability` - File-backed store across reopen, HTTP seed source
//!
//! This crate also provides the shared fixtures those tests use.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use landing_content::{FileStore, SeedDocument, SeedError, SeedSource};
use landing_core::{OwnerProfile, Product, ProductId};
use tempfile::TempDir;

/// Seed source returning a fixed document and counting fetches.
#[derive(Debug, Clone)]
pub struct StaticSeed {
    doc: SeedDocument,
    fetches: Arc<AtomicUsize>,
}

impl StaticSeed {
    /// Serve `doc` on every fetch.
    #[must_use]
    pub fn new(doc: SeedDocument) -> Self {
        Self {
            doc,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of fetches so far.
    #[must_use]
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl SeedSource for StaticSeed {
    async fn fetch(&self) -> Result<SeedDocument, SeedError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.doc.clone())
    }
}

/// Seed source that always fails as if the server were unreachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrokenSeed;

impl SeedSource for BrokenSeed {
    async fn fetch(&self) -> Result<SeedDocument, SeedError> {
        Err(SeedError::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "seed server unreachable",
        )))
    }
}

/// The scenario document: one product `p1`, no testimonials.
#[must_use]
pub fn single_product_seed() -> SeedDocument {
    SeedDocument {
        user: OwnerProfile {
            brand_name: "Seed Studio".to_string(),
            name: "Seed Owner".to_string(),
            title: "Designer".to_string(),
            description: "Seeded profile".to_string(),
            image: "https://example.com/me.png".to_string(),
            phone: "054-000-1234".to_string(),
        },
        products: vec![Product {
            id: ProductId::new("p1"),
            name: "Seeded".to_string(),
            description: "From the seed".to_string(),
            price: "₪100".to_string(),
            features: vec!["one".to_string()],
            created_at: None,
            updated_at: None,
        }],
        testimonials: vec![],
    }
}

/// A file store in a fresh temporary directory.
///
/// Keep the returned `TempDir` alive for as long as the store is used.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
#[allow(clippy::expect_used)]
pub async fn temp_store() -> (TempDir, FileStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = FileStore::open(dir.path())
        .await
        .expect("Failed to open file store");
    (dir, store)
}
