//! Chat deep link for ordering a product.
//!
//! Builds `https://wa.me/<digits>?text=<message>` from the product's name
//! and price and the owner's phone number reduced to digits.

use landing_core::{OwnerProfile, Product, ProductId};
use thiserror::Error;
use url::Url;

use super::Repo;

const CHAT_BASE_URL: &str = "https://wa.me/";

/// Errors that can occur while building an order link.
#[derive(Debug, Error)]
pub enum OrderLinkError {
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Owner profile has no phone number")]
    MissingPhone,

    #[error("Invalid link: {0}")]
    Url(#[from] url::ParseError),
}

/// The pre-filled chat message for `product`.
#[must_use]
pub fn message(product: &Product) -> String {
    format!("שלום, אני מעוניין/ת ב{} ({})", product.name, product.price)
}

/// Build the order link for `product`.
///
/// # Errors
///
/// Returns `OrderLinkError::MissingPhone` if the profile phone has no digits.
pub fn build(profile: &OwnerProfile, product: &Product) -> Result<Url, OrderLinkError> {
    let phone = profile.phone_digits().ok_or(OrderLinkError::MissingPhone)?;
    let body = message(product);
    let text = urlencoding::encode(&body);
    Ok(Url::parse(&format!("{CHAT_BASE_URL}{phone}?text={text}"))?)
}

/// Print the order link for the product with `id`.
///
/// # Errors
///
/// Returns an error if the product is missing or the profile has no phone.
#[allow(clippy::print_stdout)]
pub async fn print(repo: &Repo, id: String) -> Result<(), Box<dyn std::error::Error>> {
    let id = ProductId::new(id);
    let found = repo.get_product_by_id(&id).await;
    let product = found.ok_or(OrderLinkError::ProductNotFound(id))?;
    let link = build(&repo.get_user_data().await, &product)?;
    println!("{link}");
    Ok(())
}
