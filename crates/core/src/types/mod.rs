//! Core types for the landing page content store.
//!
//! This module provides type-safe wrappers for the stored records.

pub mod id;
pub mod product;
pub mod profile;
pub mod record;
pub mod testimonial;
pub mod timestamp;
pub mod validation;

pub use id::*;
pub use product::{NewProduct, Product};
pub use profile::OwnerProfile;
pub use record::Record;
pub use testimonial::{NewTestimonial, Testimonial};
pub use timestamp::Timestamp;
pub use validation::RecordError;
