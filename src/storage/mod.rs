//! Entity persistence behind one trait with two interchangeable backends.
//!
//! * [`MemStorage`] keeps everything in process memory and is what tests and
//!   local demos run against.
//! * [`PgStorage`] maps every entity onto a Postgres table.
//!
//! Handlers only ever see `Arc<dyn Storage>`; the backend is chosen once at
//! startup by [`connect`].

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::{AppConfig, StorageBackend},
    db,
    error::AppResult,
    models::{
        Contact, Media, NewContact, NewMedia, NewOffer, NewProduct, NewUser, Offer, Product, User,
    },
};

pub mod memory;
pub mod postgres;
pub mod seed;
pub mod session;

pub use memory::MemStorage;
pub use postgres::PgStorage;
pub use session::{
    MemorySessionStore, PgSessionStore, SessionData, SessionStore, spawn_session_pruner,
};

/// Lookups return `Ok(None)` for unknown ids and deletes return `Ok(false)`;
/// `Err` is reserved for infrastructure failures.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_user(&self, id: i32) -> AppResult<Option<User>>;
    /// Case-insensitive match on the username.
    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>>;
    /// Rejects a username already taken under case-insensitive comparison.
    async fn create_user(&self, user: NewUser) -> AppResult<User>;
    async fn set_user_admin(&self, id: i32, is_admin: bool) -> AppResult<Option<User>>;

    async fn get_all_products(&self) -> AppResult<Vec<Product>>;
    async fn get_product(&self, id: i32) -> AppResult<Option<Product>>;
    /// Case-insensitive exact match on the category.
    async fn get_products_by_category(&self, category: &str) -> AppResult<Vec<Product>>;
    async fn get_featured_products(&self) -> AppResult<Vec<Product>>;
    async fn create_product(&self, product: NewProduct) -> AppResult<Product>;
    async fn update_product(&self, id: i32, product: NewProduct) -> AppResult<Option<Product>>;
    async fn delete_product(&self, id: i32) -> AppResult<bool>;

    async fn get_all_offers(&self) -> AppResult<Vec<Offer>>;
    async fn get_offer(&self, id: i32) -> AppResult<Option<Offer>>;
    async fn create_offer(&self, offer: NewOffer) -> AppResult<Offer>;
    async fn update_offer(&self, id: i32, offer: NewOffer) -> AppResult<Option<Offer>>;
    async fn delete_offer(&self, id: i32) -> AppResult<bool>;

    async fn get_all_media(&self) -> AppResult<Vec<Media>>;
    async fn get_media(&self, id: i32) -> AppResult<Option<Media>>;
    async fn create_media(&self, media: NewMedia) -> AppResult<Media>;
    async fn delete_media(&self, id: i32) -> AppResult<bool>;

    async fn get_all_contacts(&self) -> AppResult<Vec<Contact>>;
    async fn get_contact(&self, id: i32) -> AppResult<Option<Contact>>;
    async fn create_contact(&self, contact: NewContact) -> AppResult<Contact>;

    /// Distinct categories of the current products, ascending. Never cached.
    async fn get_categories(&self) -> AppResult<Vec<String>>;

    /// Session store paired with this backend.
    fn session_store(&self) -> Arc<dyn SessionStore>;
}

/// Build the backend selected by `config`.
pub async fn connect(config: &AppConfig) -> anyhow::Result<Arc<dyn Storage>> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; data is lost on restart");
            let storage =
                MemStorage::with_sample_data(&config.admin_username, &config.admin_password)?;
            Ok(Arc::new(storage))
        }
        StorageBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is not set"))?;
            let pool = db::create_pool(url).await?;
            db::run_migrations(&pool).await?;
            let storage = PgStorage::connect(pool).await?;
            tracing::info!("connected to postgres storage");
            Ok(Arc::new(storage))
        }
    }
}
