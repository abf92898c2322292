//! Seeding, reset and export commands.
//!
//! # Usage
//!
//! ```bash
//! # Fill missing keys from the seed document
//! landing init
//!
//! # Seed from a remote document instead of the bundled file
//! landing --seed https://example.com/data.json init
//!
//! # Drop all edits and start over
//! landing reset
//!
//! # Back up the current content in seed format
//! landing export -o backup.json
//! ```

use std::path::Path;

use landing_content::InitOutcome;
use tracing::info;

use super::{Repo, emit};

fn log_outcome(outcome: &InitOutcome) {
    match outcome {
        InitOutcome::AlreadyPopulated => info!("Content already present, nothing written"),
        InitOutcome::Seeded { keys } => info!(?keys, "Seeded content"),
        InitOutcome::Defaulted => info!("Seed unavailable, wrote default content"),
    }
}

/// Populate missing content.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub async fn init(repo: &Repo) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = repo.init_data().await?;
    log_outcome(&outcome);
    Ok(())
}

/// Delete all content and seed again.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub async fn reset(repo: &Repo) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = repo.reset_data().await?;
    log_outcome(&outcome);
    Ok(())
}

/// Write the current content as a seed document to `output` or stdout.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
pub async fn export(repo: &Repo, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = repo.snapshot().await;
    match output {
        Some(path) => {
            let raw = serde_json::to_string_pretty(&snapshot)?;
            tokio::fs::write(path, raw).await?;
            info!(
                path = %path.display(),
                products = snapshot.products.len(),
                testimonials = snapshot.testimonials.len(),
                "Exported content"
            );
        }
        None => emit(&snapshot)?,
    }
    Ok(())
}
