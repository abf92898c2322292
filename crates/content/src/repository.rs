//! Content repository: the landing page's profile, products and testimonials.
//!
//! # Storage keys
//!
//! - `userData` - the [`OwnerProfile`] singleton
//! - `productsData` - array of [`Product`]
//! - `testimonialsData` - array of [`Testimonial`]
//!
//! The keys are independent; reading one never depends on another.
//!
//! # Seeding
//!
//! [`ContentRepository::init_data`] fills missing keys from the seed
//! document. If the seed cannot be fetched or parsed, all three keys are
//! overwritten with the hardcoded [`defaults`](crate::defaults), so the
//! store always ends fully populated.

use landing_core::{
    NewProduct, NewTestimonial, OwnerProfile, Product, ProductId, Record, Testimonial,
    TestimonialId, Timestamp,
};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::collection::CollectionStore;
use crate::defaults;
use crate::error::{ContentError, Result};
use crate::ids::{IdGenerator, RandomIds};
use crate::seed::{SeedDocument, SeedError, SeedSource};
use crate::store::{JsonStore, KeyValueStore, StoreError};

/// Storage key of the owner profile.
pub const USER_KEY: &str = "userData";
/// Storage key of the product collection.
pub const PRODUCTS_KEY: &str = "productsData";
/// Storage key of the testimonial collection.
pub const TESTIMONIALS_KEY: &str = "testimonialsData";

const CONTENT_KEYS: [&str; 3] = [USER_KEY, PRODUCTS_KEY, TESTIMONIALS_KEY];

/// Attempts at drawing an unused id before giving up.
const MAX_ID_ATTEMPTS: usize = 32;

/// What [`ContentRepository::init_data`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// Every key was present; nothing was written.
    AlreadyPopulated,
    /// The listed missing keys were filled from the seed document.
    Seeded { keys: Vec<&'static str> },
    /// The seed was unavailable; all keys now hold the hardcoded defaults.
    Defaulted,
}

/// Domain facade over the content store.
///
/// Holds an explicit store handle; callers get values back directly rather
/// than through shared state.
pub struct ContentRepository<S, F, G = RandomIds> {
    store: JsonStore<S>,
    seed: F,
    ids: G,
    seed_document: OnceCell<SeedDocument>,
}

impl<S, F> ContentRepository<S, F, RandomIds>
where
    S: KeyValueStore,
    F: SeedSource,
{
    /// Create a repository over `store`, seeding from `seed`.
    #[must_use]
    pub fn new(store: S, seed: F) -> Self {
        Self {
            store: JsonStore::new(store),
            seed,
            ids: RandomIds,
            seed_document: OnceCell::new(),
        }
    }
}

impl<S, F, G> ContentRepository<S, F, G>
where
    S: KeyValueStore,
    F: SeedSource,
    G: IdGenerator,
{
    /// Replace the id generator.
    #[must_use]
    pub fn with_id_generator<H: IdGenerator>(self, ids: H) -> ContentRepository<S, F, H> {
        ContentRepository {
            store: self.store,
            seed: self.seed,
            ids,
            seed_document: self.seed_document,
        }
    }

    /// Get a reference to the typed store.
    #[must_use]
    pub const fn store(&self) -> &JsonStore<S> {
        &self.store
    }

    const fn products(&self) -> CollectionStore<'_, S, Product> {
        CollectionStore::new(&self.store, PRODUCTS_KEY)
    }

    const fn testimonials(&self) -> CollectionStore<'_, S, Testimonial> {
        CollectionStore::new(&self.store, TESTIMONIALS_KEY)
    }

    // =========================================================================
    // Seeding
    // =========================================================================

    /// Make sure all three keys hold content.
    ///
    /// Missing keys are filled from the seed document, fetched at most once
    /// per repository. A seed failure is logged and answered by writing the
    /// defaults to every key, replacing whatever partial state existed.
    /// When every key is already present nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only if writing to the store fails.
    pub async fn init_data(&self) -> std::result::Result<InitOutcome, StoreError> {
        let mut missing = Vec::new();
        for key in CONTENT_KEYS {
            if !self.store.contains(key).await {
                missing.push(key);
            }
        }

        if missing.is_empty() {
            debug!("Content already initialized");
            return Ok(InitOutcome::AlreadyPopulated);
        }

        match self.fetch_seed().await {
            Ok(doc) => {
                if missing.contains(&USER_KEY) {
                    self.store.save(USER_KEY, &doc.user).await?;
                }
                if missing.contains(&PRODUCTS_KEY) {
                    self.store.save(PRODUCTS_KEY, &doc.products).await?;
                }
                if missing.contains(&TESTIMONIALS_KEY) {
                    self.store.save(TESTIMONIALS_KEY, &doc.testimonials).await?;
                }
                info!(keys = ?missing, "Seeded content from seed document");
                Ok(InitOutcome::Seeded { keys: missing })
            }
            Err(e) => {
                warn!(error = %e, "Seed document unavailable, writing default content");
                self.write_defaults().await?;
                Ok(InitOutcome::Defaulted)
            }
        }
    }

    /// Delete all content and initialize again.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if deleting or rewriting a key fails.
    pub async fn reset_data(&self) -> std::result::Result<InitOutcome, StoreError> {
        for key in CONTENT_KEYS {
            self.store.remove(key).await?;
        }
        info!("Content cleared");
        self.init_data().await
    }

    /// The current content in seed-document form.
    pub async fn snapshot(&self) -> SeedDocument {
        SeedDocument {
            user: self.get_user_data().await,
            products: self.get_products().await,
            testimonials: self.get_testimonials().await,
        }
    }

    async fn fetch_seed(&self) -> std::result::Result<SeedDocument, SeedError> {
        self.seed_document
            .get_or_try_init(|| self.seed.fetch())
            .await
            .cloned()
    }

    async fn write_defaults(&self) -> std::result::Result<(), StoreError> {
        self.store.save(USER_KEY, &defaults::user()).await?;
        self.store.save(PRODUCTS_KEY, &defaults::products()).await?;
        self.store
            .save(TESTIMONIALS_KEY, &defaults::testimonials())
            .await
    }

    // =========================================================================
    // Owner profile
    // =========================================================================

    /// The stored profile, or the default if none was ever stored.
    pub async fn get_user_data(&self) -> OwnerProfile {
        self.store
            .load(USER_KEY)
            .await
            .unwrap_or_else(defaults::user)
    }

    /// Replace the profile wholesale.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Invalid` if a required field is blank, or
    /// `ContentError::Store` if the write fails.
    pub async fn update_user_data(&self, profile: OwnerProfile) -> Result<OwnerProfile> {
        profile.validate()?;
        self.store.save(USER_KEY, &profile).await?;
        info!(brand = %profile.brand_name, "Updated owner profile");
        Ok(profile)
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// All products in insertion order.
    pub async fn get_products(&self) -> Vec<Product> {
        self.products().query().await
    }

    /// The product with `id`, if present.
    pub async fn get_product_by_id(&self, id: &ProductId) -> Option<Product> {
        self.products().get(id).await
    }

    /// Store a new product with a fresh id and `createdAt`.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Invalid` for a blank name or price, or
    /// `ContentError::Store` if the write fails.
    pub async fn add_product(&self, draft: NewProduct) -> Result<Product> {
        draft.validate()?;
        self.insert(self.products(), |id, now| draft.into_product(id, now))
            .await
    }

    /// Replace an existing product, stamping `updatedAt`.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` if no product has this id.
    pub async fn update_product(&self, product: Product) -> Result<Product> {
        self.update(self.products(), product).await
    }

    /// Delete a product. Returns `None` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Store` if the write fails.
    pub async fn remove_product(&self, id: &ProductId) -> Result<Option<Product>> {
        let removed = self.products().remove(id).await?;
        if removed.is_some() {
            info!(%id, "Removed product");
        }
        Ok(removed)
    }

    // =========================================================================
    // Testimonials
    // =========================================================================

    /// All testimonials in insertion order.
    pub async fn get_testimonials(&self) -> Vec<Testimonial> {
        self.testimonials().query().await
    }

    /// The testimonial with `id`, if present.
    pub async fn get_testimonial_by_id(&self, id: &TestimonialId) -> Option<Testimonial> {
        self.testimonials().get(id).await
    }

    /// Store a new testimonial with a fresh id and `createdAt`.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Invalid` for a blank name or text, or
    /// `ContentError::Store` if the write fails.
    pub async fn add_testimonial(&self, draft: NewTestimonial) -> Result<Testimonial> {
        draft.validate()?;
        self.insert(self.testimonials(), |id, now| {
            draft.into_testimonial(id, now)
        })
        .await
    }

    /// Replace an existing testimonial, stamping `updatedAt`.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` if no testimonial has this id.
    pub async fn update_testimonial(&self, testimonial: Testimonial) -> Result<Testimonial> {
        self.update(self.testimonials(), testimonial).await
    }

    /// Delete a testimonial. Returns `None` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Store` if the write fails.
    pub async fn remove_testimonial(&self, id: &TestimonialId) -> Result<Option<Testimonial>> {
        let removed = self.testimonials().remove(id).await?;
        if removed.is_some() {
            info!(%id, "Removed testimonial");
        }
        Ok(removed)
    }

    // =========================================================================
    // Shared insert/update
    // =========================================================================

    async fn insert<T, B>(&self, collection: CollectionStore<'_, S, T>, build: B) -> Result<T>
    where
        T: Record,
        B: FnOnce(T::Id, Timestamp) -> T + Send,
    {
        let existing = collection.query().await;
        let id = self.fresh_id(&existing)?;
        let record = collection.post(build(id, Timestamp::now())).await?;
        info!(kind = T::KIND, id = %record.id(), "Added record");
        Ok(record)
    }

    async fn update<T: Record>(&self, collection: CollectionStore<'_, S, T>, mut record: T) -> Result<T> {
        record.validate()?;
        record.mark_updated(Timestamp::now());
        let record = collection.put(record).await?;
        info!(kind = T::KIND, id = %record.id(), "Updated record");
        Ok(record)
    }

    fn fresh_id<T: Record>(&self, existing: &[T]) -> Result<T::Id> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.make_id();
            if candidate.trim().is_empty() {
                continue;
            }
            let candidate = T::Id::from(candidate);
            if existing.iter().all(|r| r.id() != &candidate) {
                return Ok(candidate);
            }
            debug!(kind = T::KIND, id = %candidate, "Generated id already taken, drawing again");
        }
        Err(ContentError::IdsExhausted {
            kind: T::KIND,
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::seed::NoSeed;
    use crate::store::MemoryStore;

    /// Seed source that counts fetches and always returns the same document.
    struct CountingSeed {
        doc: SeedDocument,
        fetches: Arc<AtomicUsize>,
    }

    impl SeedSource for CountingSeed {
        async fn fetch(&self) -> std::result::Result<SeedDocument, SeedError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self.doc.clone())
        }
    }

    fn seed_doc() -> SeedDocument {
        SeedDocument {
            user: OwnerProfile {
                brand_name: "Seeded".to_string(),
                name: "Owner".to_string(),
                title: String::new(),
                description: String::new(),
                image: String::new(),
                phone: "03-555-0000".to_string(),
            },
            products: vec![Product {
                id: ProductId::new("p1"),
                name: "Seed product".to_string(),
                description: String::new(),
                price: "₪1".to_string(),
                features: vec![],
                created_at: None,
                updated_at: None,
            }],
            testimonials: vec![],
        }
    }

    fn draft(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: String::new(),
            price: "₪10".to_string(),
            features: vec![],
        }
    }

    #[tokio::test]
    async fn test_seed_is_fetched_once_per_repository() {
        let fetches = Arc::new(AtomicUsize::new(0));
        let repo = ContentRepository::new(
            MemoryStore::new(),
            CountingSeed {
                doc: seed_doc(),
                fetches: Arc::clone(&fetches),
            },
        );

        repo.init_data().await.unwrap();
        repo.reset_data().await.unwrap();
        repo.init_data().await.unwrap();

        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    /// Seed source that is unreachable on the first fetch only.
    struct FlakySeed {
        doc: SeedDocument,
        fetches: Arc<AtomicUsize>,
    }

    impl SeedSource for FlakySeed {
        async fn fetch(&self) -> std::result::Result<SeedDocument, SeedError> {
            if self.fetches.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err(SeedError::Io(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "seed server unreachable",
                )));
            }
            Ok(self.doc.clone())
        }
    }

    #[tokio::test]
    async fn test_failed_fetch_is_retried_on_next_init() {
        let fetches = Arc::new(AtomicUsize::new(0));
        let repo = ContentRepository::new(
            MemoryStore::new(),
            FlakySeed {
                doc: seed_doc(),
                fetches: Arc::clone(&fetches),
            },
        );

        assert_eq!(repo.init_data().await.unwrap(), InitOutcome::Defaulted);
        assert_eq!(repo.get_user_data().await, defaults::user());

        let outcome = repo.reset_data().await.unwrap();
        assert_eq!(
            outcome,
            InitOutcome::Seeded {
                keys: CONTENT_KEYS.to_vec()
            }
        );
        assert_eq!(repo.get_user_data().await.brand_name, "Seeded");
        assert_eq!(fetches.load(Ordering::SeqCst), 2);

        // The successful fetch is kept from here on
        repo.reset_data().await.unwrap();
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_only_missing_keys_are_seeded() {
        let store = Arc::new(MemoryStore::new());
        let json = JsonStore::new(Arc::clone(&store));
        json.save(PRODUCTS_KEY, &Vec::<Product>::new()).await.unwrap();

        let repo = ContentRepository::new(
            store,
            CountingSeed {
                doc: seed_doc(),
                fetches: Arc::new(AtomicUsize::new(0)),
            },
        );
        let outcome = repo.init_data().await.unwrap();

        assert_eq!(
            outcome,
            InitOutcome::Seeded {
                keys: vec![USER_KEY, TESTIMONIALS_KEY]
            }
        );
        assert!(repo.get_products().await.is_empty());
        assert_eq!(repo.get_user_data().await.brand_name, "Seeded");
    }

    #[tokio::test]
    async fn test_default_profile_without_init() {
        let repo = ContentRepository::new(MemoryStore::new(), NoSeed);
        assert_eq!(repo.get_user_data().await, defaults::user());
        assert!(repo.get_products().await.is_empty());
    }

    #[tokio::test]
    async fn test_update_user_data_rejects_blank_name() {
        let repo = ContentRepository::new(MemoryStore::new(), NoSeed);
        let mut profile = defaults::user();
        profile.name = String::new();

        let err = repo.update_user_data(profile).await.unwrap_err();
        assert!(matches!(err, ContentError::Invalid(_)));
        assert!(!repo.store().contains(USER_KEY).await);
    }

    #[tokio::test]
    async fn test_add_product_rejects_blank_price() {
        let repo = ContentRepository::new(MemoryStore::new(), NoSeed);
        let mut bad = draft("X");
        bad.price = String::new();

        assert!(matches!(
            repo.add_product(bad).await,
            Err(ContentError::Invalid(_))
        ));
        assert!(repo.get_products().await.is_empty());
    }

    #[tokio::test]
    async fn test_colliding_generator_draws_again() {
        let calls = AtomicUsize::new(0);
        let ids = move || {
            // First two draws collide with the seeded "p1"
            if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                "p1".to_string()
            } else {
                "fresh1".to_string()
            }
        };
        let repo = ContentRepository::new(MemoryStore::new(), NoSeed).with_id_generator(ids);
        repo.init_data().await.unwrap();

        let product = repo.add_product(draft("X")).await.unwrap();
        assert_eq!(product.id.as_str(), "fresh1");
    }

    #[tokio::test]
    async fn test_exhausted_generator_fails_without_writing() {
        let repo = ContentRepository::new(MemoryStore::new(), NoSeed)
            .with_id_generator(|| "p1".to_string());
        repo.init_data().await.unwrap();
        let before = repo.get_products().await;

        let err = repo.add_product(draft("X")).await.unwrap_err();
        assert!(matches!(
            err,
            ContentError::IdsExhausted {
                kind: "product",
                ..
            }
        ));
        assert_eq!(repo.get_products().await, before);
    }

    #[tokio::test]
    async fn test_update_stamps_updated_at() {
        let repo = ContentRepository::new(MemoryStore::new(), NoSeed);
        let added = repo.add_product(draft("X")).await.unwrap();
        assert!(added.updated_at.is_none());

        let mut edited = added.clone();
        edited.name = "Y".to_string();
        let updated = repo.update_product(edited).await.unwrap();

        assert!(updated.updated_at.is_some());
        assert_eq!(updated.created_at, added.created_at);
        assert_eq!(repo.get_product_by_id(&added.id).await.unwrap().name, "Y");
    }
}
