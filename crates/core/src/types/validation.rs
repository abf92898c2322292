//! Field validation shared by all record types.

/// Errors that can occur when validating a record before it is stored.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A required display field is empty or only whitespace.
    #[error("{record}.{field} cannot be empty")]
    EmptyField {
        /// Record type name (e.g. `product`).
        record: &'static str,
        /// Field name as stored (e.g. `price`).
        field: &'static str,
    },
}

/// Fail with [`RecordError::EmptyField`] when `value` is blank.
pub(crate) fn require(
    record: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), RecordError> {
    if value.trim().is_empty() {
        return Err(RecordError::EmptyField { record, field });
    }
    Ok(())
}
