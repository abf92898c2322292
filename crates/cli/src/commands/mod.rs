//! CLI command implementations.

pub mod content;
pub mod order_link;
pub mod products;
pub mod profile;
pub mod testimonials;

use landing_content::{AnySeed, ContentConfig, ContentRepository, FileStore};
use serde::Serialize;
use tracing::debug;

/// Repository type used by every command.
pub type Repo = ContentRepository<FileStore, AnySeed>;

/// Open the file-backed store named by `config`.
///
/// # Errors
///
/// Returns an error if the store directory cannot be created.
pub async fn open(config: &ContentConfig) -> Result<Repo, Box<dyn std::error::Error>> {
    let store = FileStore::open(&config.data_dir).await?;
    debug!(data_dir = %config.data_dir.display(), seed = ?config.seed, "Opened content store");
    Ok(ContentRepository::new(store, config.seed.clone().into_source()))
}

/// Print `value` as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if `value` cannot be serialized.
#[allow(clippy::print_stdout)]
pub fn emit<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
