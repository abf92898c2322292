//! Product catalog commands.

use landing_core::{NewProduct, Product, ProductId};
use tracing::{info, warn};

use super::{Repo, emit};
use crate::ProductFields;

/// Print all products.
///
/// # Errors
///
/// Returns an error if the products cannot be serialized.
pub async fn list(repo: &Repo) -> Result<(), Box<dyn std::error::Error>> {
    emit(&repo.get_products().await)
}

/// Print one product.
///
/// # Errors
///
/// Returns an error if no product has this id.
pub async fn show(repo: &Repo, id: String) -> Result<(), Box<dyn std::error::Error>> {
    let id = ProductId::new(id);
    let product = repo
        .get_product_by_id(&id)
        .await
        .ok_or_else(|| format!("Product not found: {id}"))?;
    emit(&product)
}

/// Add a product and print it with its generated id.
///
/// # Errors
///
/// Returns an error if the draft is invalid or cannot be stored.
pub async fn add(
    repo: &Repo,
    name: String,
    price: String,
    description: String,
    features: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let product = repo
        .add_product(NewProduct {
            name,
            description,
            price,
            features,
        })
        .await?;
    info!(id = %product.id, "Product added");
    emit(&product)
}

/// Change the given fields of an existing product.
///
/// # Errors
///
/// Returns an error if the product does not exist or the result is invalid.
pub async fn update(
    repo: &Repo,
    id: String,
    fields: ProductFields,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = ProductId::new(id);
    let current = repo
        .get_product_by_id(&id)
        .await
        .ok_or_else(|| format!("Product not found: {id}"))?;
    let product = repo.update_product(apply(current, fields)).await?;
    info!(id = %product.id, "Product updated");
    emit(&product)
}

/// Remove a product. A missing id is reported, not treated as failure.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub async fn remove(repo: &Repo, id: String) -> Result<(), Box<dyn std::error::Error>> {
    let id = ProductId::new(id);
    match repo.remove_product(&id).await? {
        Some(product) => info!(id = %product.id, name = %product.name, "Product removed"),
        None => warn!(%id, "No product with this id, nothing removed"),
    }
    Ok(())
}

fn apply(mut product: Product, fields: ProductFields) -> Product {
    if let Some(v) = fields.name {
        product.name = v;
    }
    if let Some(v) = fields.price {
        product.price = v;
    }
    if let Some(v) = fields.description {
        product.description = v;
    }
    if fields.clear_features {
        product.features.clear();
    } else if !fields.features.is_empty() {
        product.features = fields.features;
    }
    product
}
