//! Seed document read from a bundled JSON file.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{SeedDocument, SeedError, SeedSource};

/// Reads the seed document from a local `data.json`.
#[derive(Debug, Clone)]
pub struct FileSeed {
    path: PathBuf,
}

impl FileSeed {
    /// Create a seed source for `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the seed file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SeedSource for FileSeed {
    async fn fetch(&self) -> Result<SeedDocument, SeedError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        debug!(path = %self.path.display(), bytes = raw.len(), "Read seed file");
        SeedDocument::from_json(&raw)
    }
}
