//! Integration tests for content seeding and reset.
//!
//! These tests run against a file-backed store in a temporary directory
//! and cover the seed / default fallback policy of `init_data`.

#![allow(clippy::unwrap_used)]

use landing_content::{
    ContentRepository, FileSeed, InitOutcome, JsonStore, PRODUCTS_KEY, TESTIMONIALS_KEY, USER_KEY,
    defaults,
};
use landing_core::{NewProduct, Product, ProductId, Testimonial};
use landing_integration_tests::{BrokenSeed, StaticSeed, single_product_seed, temp_store};

/// Raw contents of every key, for before/after comparisons.
async fn dump(store: &JsonStore<landing_content::FileStore>) -> Vec<Option<serde_json::Value>> {
    let mut values = Vec::new();
    for key in [USER_KEY, PRODUCTS_KEY, TESTIMONIALS_KEY] {
        values.push(store.load::<serde_json::Value>(key).await);
    }
    values
}

// =============================================================================
// Seeded path
// =============================================================================

#[tokio::test]
async fn test_empty_store_is_seeded_from_document() {
    let (_dir, store) = temp_store().await;
    let repo = ContentRepository::new(store, StaticSeed::new(single_product_seed()));

    let outcome = repo.init_data().await.unwrap();
    assert_eq!(
        outcome,
        InitOutcome::Seeded {
            keys: vec![USER_KEY, PRODUCTS_KEY, TESTIMONIALS_KEY]
        }
    );

    let products = repo.get_products().await;
    assert_eq!(products.len(), 1);
    assert_eq!(products.first().unwrap().id.as_str(), "p1");
    assert!(repo.get_testimonials().await.is_empty());
    assert_eq!(repo.get_user_data().await.brand_name, "Seed Studio");
}

#[tokio::test]
async fn test_init_is_idempotent() {
    let (_dir, store) = temp_store().await;
    let seed = StaticSeed::new(single_product_seed());
    let repo = ContentRepository::new(store, seed.clone());

    repo.init_data().await.unwrap();
    let after_first = dump(repo.store()).await;

    let outcome = repo.init_data().await.unwrap();
    assert_eq!(outcome, InitOutcome::AlreadyPopulated);
    assert_eq!(dump(repo.store()).await, after_first);
    assert_eq!(seed.fetches(), 1);
}

#[tokio::test]
async fn test_present_keys_are_not_overwritten_by_seed() {
    let (_dir, store) = temp_store().await;
    let repo = ContentRepository::new(store, StaticSeed::new(single_product_seed()));
    repo.init_data().await.unwrap();

    // Operator edit, then the testimonial key goes missing
    repo.add_product(NewProduct {
        name: "Edited".to_string(),
        description: String::new(),
        price: "₪5".to_string(),
        features: vec![],
    })
    .await
    .unwrap();
    repo.store().remove(TESTIMONIALS_KEY).await.unwrap();

    let outcome = repo.init_data().await.unwrap();
    assert_eq!(
        outcome,
        InitOutcome::Seeded {
            keys: vec![TESTIMONIALS_KEY]
        }
    );
    assert_eq!(repo.get_products().await.len(), 2);
}

#[tokio::test]
async fn test_bundled_seed_file() {
    let (_dir, store) = temp_store().await;
    let seed = FileSeed::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../content/seed/data.json"
    ));
    let repo = ContentRepository::new(store, seed);

    assert!(matches!(
        repo.init_data().await.unwrap(),
        InitOutcome::Seeded { .. }
    ));
    assert!(!repo.get_products().await.is_empty());
    assert_ne!(repo.get_user_data().await, defaults::user());
}

// =============================================================================
// Defaulted path
// =============================================================================

#[tokio::test]
async fn test_unreachable_seed_writes_defaults_to_all_keys() {
    let (_dir, store) = temp_store().await;
    let repo = ContentRepository::new(store, BrokenSeed);

    let outcome = repo.init_data().await.unwrap();
    assert_eq!(outcome, InitOutcome::Defaulted);

    assert_eq!(repo.get_user_data().await, defaults::user());
    assert_eq!(repo.get_products().await, defaults::products());
    assert_eq!(repo.get_testimonials().await, defaults::testimonials());
    assert!(repo.store().contains(USER_KEY).await);
    assert!(repo.store().contains(PRODUCTS_KEY).await);
    assert!(repo.store().contains(TESTIMONIALS_KEY).await);
}

#[tokio::test]
async fn test_fallback_replaces_partial_state() {
    let (_dir, store) = temp_store().await;
    let json = JsonStore::new(store.clone());
    let stale = vec![Product {
        id: ProductId::new("stale"),
        name: "Stale".to_string(),
        description: String::new(),
        price: "₪0".to_string(),
        features: vec![],
        created_at: None,
        updated_at: None,
    }];
    json.save(PRODUCTS_KEY, &stale).await.unwrap();

    let repo = ContentRepository::new(store, BrokenSeed);
    assert_eq!(repo.init_data().await.unwrap(), InitOutcome::Defaulted);

    let products = repo.get_products().await;
    assert_eq!(products, defaults::products());
    assert!(products.iter().all(|p| p.id.as_str() != "stale"));
}

#[tokio::test]
async fn test_malformed_seed_file_falls_back_to_defaults() {
    let (dir, store) = temp_store().await;
    let seed_path = dir.path().join("data.json");
    tokio::fs::write(&seed_path, "{ this is not json").await.unwrap();

    let repo = ContentRepository::new(store, FileSeed::new(&seed_path));
    assert_eq!(repo.init_data().await.unwrap(), InitOutcome::Defaulted);
    assert_eq!(repo.get_testimonials().await, defaults::testimonials());
}

#[tokio::test]
async fn test_seed_with_blank_profile_falls_back_to_defaults() {
    let (dir, store) = temp_store().await;
    let mut doc = single_product_seed();
    doc.user.brand_name = " ".to_string();
    let seed_path = dir.path().join("data.json");
    tokio::fs::write(&seed_path, serde_json::to_string(&doc).unwrap())
        .await
        .unwrap();

    let repo = ContentRepository::new(store, FileSeed::new(&seed_path));
    assert_eq!(repo.init_data().await.unwrap(), InitOutcome::Defaulted);
    assert_eq!(repo.get_user_data().await, defaults::user());
    assert_eq!(repo.get_products().await, defaults::products());
}

// =============================================================================
// Reset
// =============================================================================

#[tokio::test]
async fn test_reset_discards_edits_and_reseeds() {
    let (_dir, store) = temp_store().await;
    let repo = ContentRepository::new(store, StaticSeed::new(single_product_seed()));
    repo.init_data().await.unwrap();

    repo.add_product(NewProduct {
        name: "Temporary".to_string(),
        description: String::new(),
        price: "₪1".to_string(),
        features: vec![],
    })
    .await
    .unwrap();
    let mut profile = repo.get_user_data().await;
    profile.brand_name = "Renamed".to_string();
    repo.update_user_data(profile).await.unwrap();

    let outcome = repo.reset_data().await.unwrap();
    assert!(matches!(outcome, InitOutcome::Seeded { ref keys } if keys.len() == 3));

    assert_eq!(repo.get_products().await, single_product_seed().products);
    assert_eq!(repo.get_user_data().await.brand_name, "Seed Studio");
}

#[tokio::test]
async fn test_reset_without_seed_yields_defaults_only() {
    let (_dir, store) = temp_store().await;
    let repo = ContentRepository::new(store, BrokenSeed);
    repo.init_data().await.unwrap();

    let mut edited: Testimonial = repo.get_testimonials().await.remove(0);
    edited.text = "Changed".to_string();
    repo.update_testimonial(edited).await.unwrap();

    assert_eq!(repo.reset_data().await.unwrap(), InitOutcome::Defaulted);
    assert_eq!(repo.get_testimonials().await, defaults::testimonials());
}
