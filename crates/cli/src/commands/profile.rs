//! Owner profile commands.

use landing_core::OwnerProfile;
use tracing::info;

use super::{Repo, emit};
use crate::ProfileFields;

/// Print the stored (or default) profile.
///
/// # Errors
///
/// Returns an error if the profile cannot be serialized.
pub async fn show(repo: &Repo) -> Result<(), Box<dyn std::error::Error>> {
    emit(&repo.get_user_data().await)
}

/// Apply `fields` on top of the current profile and store the result.
///
/// # Errors
///
/// Returns an error if the edited profile is invalid or cannot be stored.
pub async fn set(repo: &Repo, fields: ProfileFields) -> Result<(), Box<dyn std::error::Error>> {
    let profile = apply(repo.get_user_data().await, fields);
    let saved = repo.update_user_data(profile).await?;
    info!(brand = %saved.brand_name, "Profile saved");
    emit(&saved)
}

fn apply(mut profile: OwnerProfile, fields: ProfileFields) -> OwnerProfile {
    if let Some(v) = fields.brand_name {
        profile.brand_name = v;
    }
    if let Some(v) = fields.name {
        profile.name = v;
    }
    if let Some(v) = fields.title {
        profile.title = v;
    }
    if let Some(v) = fields.description {
        profile.description = v;
    }
    if let Some(v) = fields.image {
        profile.image = v;
    }
    if let Some(v) = fields.phone {
        profile.phone = v;
    }
    profile
}
