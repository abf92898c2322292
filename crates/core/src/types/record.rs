//! The [`Record`] trait implemented by every collection member.

use core::fmt::{Debug, Display};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{RecordError, Timestamp};

/// A uniquely identified member of a stored collection.
///
/// Collections are persisted as JSON arrays, so records must round-trip
/// through `serde`. The id type is a [`define_id!`](crate::define_id)
/// newtype, which keeps product and testimonial ids apart.
pub trait Record: Clone + Debug + Serialize + DeserializeOwned + Send + Sync {
    /// The record's typed id.
    type Id: Clone + Debug + Display + Eq + From<String> + Send + Sync;

    /// Short name used in logs and errors (e.g. `product`).
    const KIND: &'static str;

    /// The record's id.
    fn id(&self) -> &Self::Id;

    /// Stamp `updatedAt`.
    fn mark_updated(&mut self, at: Timestamp);

    /// Check required fields before the record is written.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] naming the first invalid field.
    fn validate(&self) -> Result<(), RecordError>;
}
