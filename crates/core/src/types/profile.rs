//! Site owner profile.

use serde::{Deserialize, Serialize};

use super::RecordError;
use super::validation::require;

/// The site owner's profile.
///
/// A singleton: it has no id and is identified solely by its storage key.
/// It is replaced wholesale on update and never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProfile {
    pub brand_name: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Portrait URI.
    #[serde(default)]
    pub image: String,
    /// Raw phone number as entered, separators included.
    #[serde(default)]
    pub phone: String,
}

impl OwnerProfile {
    const KIND: &'static str = "profile";

    /// Check required fields.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::EmptyField`] if `brandName` or `name` is blank.
    pub fn validate(&self) -> Result<(), RecordError> {
        require(Self::KIND, "brandName", &self.brand_name)?;
        require(Self::KIND, "name", &self.name)
    }

    /// The phone number reduced to its ASCII digits.
    ///
    /// Returns `None` when the phone contains no digits at all.
    ///
    /// ```
    /// # use landing_core::OwnerProfile;
    /// let mut profile = OwnerProfile {
    ///     brand_name: "Brand".into(),
    ///     name: "Name".into(),
    ///     title: String::new(),
    ///     description: String::new(),
    ///     image: String::new(),
    ///     phone: "050-123 4567".into(),
    /// };
    /// assert_eq!(profile.phone_digits().as_deref(), Some("0501234567"));
    ///
    /// profile.phone = "n/a".into();
    /// assert_eq!(profile.phone_digits(), None);
    /// ```
    #[must_use]
    pub fn phone_digits(&self) -> Option<String> {
        let digits: String = self.phone.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() { None } else { Some(digits) }
    }
}
