//! Product catalog records.

use serde::{Deserialize, Serialize};

use super::validation::require;
use super::{ProductId, Record, RecordError, Timestamp};

/// A product offered on the landing page.
///
/// `price` is a display string (e.g. `"₪299"`), never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: String,
    #[serde(default)]
    pub features: Vec<String>,
    /// Set on insert. Seeded records may not carry it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Set on every update; absent until the first one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Caller-supplied fields for a product that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl NewProduct {
    /// Check required fields.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::EmptyField`] if `name` or `price` is blank.
    pub fn validate(&self) -> Result<(), RecordError> {
        require(Product::KIND, "name", &self.name)?;
        require(Product::KIND, "price", &self.price)
    }

    /// Turn the draft into a stored product.
    #[must_use]
    pub fn into_product(self, id: ProductId, created_at: Timestamp) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            features: self.features,
            created_at: Some(created_at),
            updated_at: None,
        }
    }
}

impl Record for Product {
    type Id = ProductId;

    const KIND: &'static str = "product";

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn mark_updated(&mut self, at: Timestamp) {
        self.updated_at = Some(at);
    }

    fn validate(&self) -> Result<(), RecordError> {
        require(Self::KIND, "id", self.id.as_str())?;
        require(Self::KIND, "name", &self.name)?;
        require(Self::KIND, "price", &self.price)
    }
}
