//! Landing Content - Client-side persistence for the landing page.
//!
//! Seeds, reads, mutates and resets the site content (owner profile,
//! products, testimonials) held in a durable key-value store, falling back
//! to built-in defaults when no seed document can be fetched.
//!
//! # Architecture
//!
//! Leaf first:
//!
//! - [`store`] - Raw [`KeyValueStore`] backends and the typed [`JsonStore`] adapter
//! - [`ids`] - Record id generation
//! - [`collection`] - Generic CRUD over one JSON array key
//! - [`seed`] - Seed document sources (file, HTTP, none)
//! - [`defaults`] - Hardcoded fallback content
//! - [`repository`] - The [`ContentRepository`] facade and seed/fallback policy
//! - [`config`] - Environment configuration
//!
//! # Example
//!
//! ```rust,no_run
//! use landing_content::{ContentRepository, FileSeed, FileStore};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let store = FileStore::open(".landing").await?;
//! let repo = ContentRepository::new(store, FileSeed::new("data.json"));
//! repo.init_data().await?;
//! for product in repo.get_products().await {
//!     println!("{} {}", product.name, product.price);
//! }
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod collection;
pub mod config;
pub mod defaults;
pub mod error;
pub mod ids;
pub mod repository;
pub mod seed;
pub mod store;

pub use collection::CollectionStore;
pub use config::{ConfigError, ContentConfig, SeedLocation};
pub use error::ContentError;
pub use ids::{IdGenerator, RandomIds};
pub use repository::{
    ContentRepository, InitOutcome, PRODUCTS_KEY, TESTIMONIALS_KEY, USER_KEY,
};
pub use seed::{AnySeed, FileSeed, HttpSeed, NoSeed, SeedDocument, SeedError, SeedSource};
pub use store::{FileStore, JsonStore, KeyValueStore, MemoryStore, StoreError};
