//! Hardcoded content written when no seed document is available.

use landing_core::{OwnerProfile, Product, ProductId, Testimonial, TestimonialId};

const PLACEHOLDER_PORTRAIT: &str = "https://via.placeholder.com/300";
const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/80";

/// Placeholder owner profile.
#[must_use]
pub fn user() -> OwnerProfile {
    OwnerProfile {
        brand_name: "המותג שלך".to_string(),
        name: "השם שלך".to_string(),
        title: "התפקיד המקצועי שלך".to_string(),
        description: "תיאור מקצועי שלך. הסבר מי אתה ומה אתה עושה.".to_string(),
        image: PLACEHOLDER_PORTRAIT.to_string(),
        phone: "050-123-4567".to_string(),
    }
}

fn product(id: &str, name: &str, description: &str, price: &str, features: &[&str]) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        features: features.iter().map(ToString::to_string).collect(),
        created_at: None,
        updated_at: None,
    }
}

/// Three placeholder packages, `p1` to `p3`.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        product(
            "p1",
            "חבילה בסיסית",
            "מושלם למתחילים",
            "₪299",
            &["תכונה 1", "תכונה 2", "תכונה 3"],
        ),
        product(
            "p2",
            "חבילת פרימיום",
            "הבחירה הפופולרית ביותר",
            "₪599",
            &["כל תכונות הבסיס", "תכונה 4", "תכונה 5", "תכונה 6"],
        ),
        product(
            "p3",
            "חבילת Pro",
            "למקצוענים",
            "₪999",
            &["כל תכונות הפרימיום", "תכונה 7", "תכונה 8", "תכונה 9"],
        ),
    ]
}

fn testimonial(id: &str, name: &str, text: &str) -> Testimonial {
    Testimonial {
        id: TestimonialId::new(id),
        name: name.to_string(),
        text: text.to_string(),
        image: PLACEHOLDER_AVATAR.to_string(),
        created_at: None,
        updated_at: None,
    }
}

/// Three placeholder testimonials, `t1` to `t3`.
#[must_use]
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        testimonial("t1", "שם הלקוח 1", "שירות מעולה! ממליץ בחום."),
        testimonial("t2", "שם הלקוח 2", "חוויה נהדרת, מאוד מקצועי."),
        testimonial("t3", "שם הלקוח 3", "שווה כל שקל!"),
    ]
}
