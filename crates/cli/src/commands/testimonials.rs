//! Testimonial commands.

use landing_core::{NewTestimonial, Testimonial, TestimonialId};
use tracing::{info, warn};

use super::{Repo, emit};
use crate::TestimonialFields;

/// Print all testimonials.
///
/// # Errors
///
/// Returns an error if the testimonials cannot be serialized.
pub async fn list(repo: &Repo) -> Result<(), Box<dyn std::error::Error>> {
    emit(&repo.get_testimonials().await)
}

/// Print one testimonial.
///
/// # Errors
///
/// Returns an error if no testimonial has this id.
pub async fn show(repo: &Repo, id: String) -> Result<(), Box<dyn std::error::Error>> {
    let id = TestimonialId::new(id);
    let testimonial = repo
        .get_testimonial_by_id(&id)
        .await
        .ok_or_else(|| format!("Testimonial not found: {id}"))?;
    emit(&testimonial)
}

/// Add a testimonial and print it with its generated id.
///
/// # Errors
///
/// Returns an error if the draft is invalid or cannot be stored.
pub async fn add(
    repo: &Repo,
    name: String,
    text: String,
    image: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let testimonial = repo
        .add_testimonial(NewTestimonial { name, text, image })
        .await?;
    info!(id = %testimonial.id, "Testimonial added");
    emit(&testimonial)
}

/// Change the given fields of an existing testimonial.
///
/// # Errors
///
/// Returns an error if the testimonial does not exist or the result is invalid.
pub async fn update(
    repo: &Repo,
    id: String,
    fields: TestimonialFields,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = TestimonialId::new(id);
    let mut testimonial: Testimonial = repo
        .get_testimonial_by_id(&id)
        .await
        .ok_or_else(|| format!("Testimonial not found: {id}"))?;
    if let Some(v) = fields.name {
        testimonial.name = v;
    }
    if let Some(v) = fields.text {
        testimonial.text = v;
    }
    if let Some(v) = fields.image {
        testimonial.image = v;
    }
    let testimonial = repo.update_testimonial(testimonial).await?;
    info!(id = %testimonial.id, "Testimonial updated");
    emit(&testimonial)
}

/// Remove a testimonial. A missing id is reported, not treated as failure.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub async fn remove(repo: &Repo, id: String) -> Result<(), Box<dyn std::error::Error>> {
    let id = TestimonialId::new(id);
    match repo.remove_testimonial(&id).await? {
        Some(t) => info!(id = %t.id, "Testimonial removed"),
        None => warn!(%id, "No testimonial with this id, nothing removed"),
    }
    Ok(())
}
