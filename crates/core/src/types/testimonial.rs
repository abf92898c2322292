//! Customer testimonial records.

use serde::{Deserialize, Serialize};

use super::validation::require;
use super::{Record, RecordError, TestimonialId, Timestamp};

/// A customer quote shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: TestimonialId,
    pub name: String,
    pub text: String,
    /// Avatar URI.
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Caller-supplied fields for a testimonial that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub name: String,
    pub text: String,
    #[serde(default)]
    pub image: String,
}

impl NewTestimonial {
    /// Check required fields.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::EmptyField`] if `name` or `text` is blank.
    pub fn validate(&self) -> Result<(), RecordError> {
        require(Testimonial::KIND, "name", &self.name)?;
        require(Testimonial::KIND, "text", &self.text)
    }

    /// Turn the draft into a stored testimonial.
    #[must_use]
    pub fn into_testimonial(self, id: TestimonialId, created_at: Timestamp) -> Testimonial {
        Testimonial {
            id,
            name: self.name,
            text: self.text,
            image: self.image,
            created_at: Some(created_at),
            updated_at: None,
        }
    }
}

impl Record for Testimonial {
    type Id = TestimonialId;

    const KIND: &'static str = "testimonial";

    fn id(&self) -> &TestimonialId {
        &self.id
    }

    fn mark_updated(&mut self, at: Timestamp) {
        self.updated_at = Some(at);
    }

    fn validate(&self) -> Result<(), RecordError> {
        require(Self::KIND, "id", self.id.as_str())?;
        require(Self::KIND, "name", &self.name)?;
        require(Self::KIND, "text", &self.text)
    }
}
