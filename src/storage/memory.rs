use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::{
    error::{AppError, AppResult},
    models::{
        Contact, Media, NewContact, NewMedia, NewOffer, NewProduct, NewUser, Offer, Product, User,
    },
    password::hash_password,
    storage::{
        MemorySessionStore, SessionStore, Storage,
        seed::{sample_offers, sample_products},
    },
};

/// Rows of one entity type plus its id counter.
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    /// Newest first; ids are allocated in creation order.
    fn all(&self) -> Vec<T> {
        self.rows.values().rev().cloned().collect()
    }

    fn filtered(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().rev().filter(|row| keep(row)).cloned().collect()
    }

    fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn remove(&mut self, id: i32) -> bool {
        self.rows.remove(&id).is_some()
    }
}

/// Process-local store. Each table sits behind its own mutex, so single
/// operations are atomic but a read-then-write sequence spanning two calls
/// is not.
pub struct MemStorage {
    users: Mutex<Table<User>>,
    products: Mutex<Table<Product>>,
    offers: Mutex<Table<Offer>>,
    media: Mutex<Table<Media>>,
    contacts: Mutex<Table<Contact>>,
    sessions: Arc<MemorySessionStore>,
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStorage {
    /// Empty store.
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Table::new()),
            products: Mutex::new(Table::new()),
            offers: Mutex::new(Table::new()),
            media: Mutex::new(Table::new()),
            contacts: Mutex::new(Table::new()),
            sessions: Arc::new(MemorySessionStore::new()),
        }
    }

    /// Store pre-filled with the sample catalogue and one admin account.
    pub fn with_sample_data(admin_username: &str, admin_password: &str) -> AppResult<Self> {
        let mut storage = Self::new();
        let password = hash_password(admin_password)?;

        storage.users.get_mut().insert_with(|id| User {
            id,
            username: admin_username.to_string(),
            password,
            is_admin: true,
        });

        let now = Utc::now();
        let products = storage.products.get_mut();
        for product in sample_products() {
            products.insert_with(|id| product.into_product(id, now));
        }
        let offers = storage.offers.get_mut();
        for offer in sample_offers() {
            offers.insert_with(|id| offer.into_offer(id, now));
        }

        Ok(storage)
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.users.lock().await.get(id))
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().await;
        Ok(users
            .rows
            .values()
            .find(|user| user.username.to_lowercase() == username.to_lowercase())
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        let mut users = self.users.lock().await;
        let wanted = user.username.to_lowercase();
        if users
            .rows
            .values()
            .any(|existing| existing.username.to_lowercase() == wanted)
        {
            return Err(AppError::BadRequest("Username is already taken".into()));
        }

        Ok(users.insert_with(|id| User {
            id,
            username: user.username,
            password: user.password,
            is_admin: false,
        }))
    }

    async fn set_user_admin(&self, id: i32, is_admin: bool) -> AppResult<Option<User>> {
        let mut users = self.users.lock().await;
        Ok(users.rows.get_mut(&id).map(|user| {
            user.is_admin = is_admin;
            user.clone()
        }))
    }

    async fn get_all_products(&self) -> AppResult<Vec<Product>> {
        Ok(self.products.lock().await.all())
    }

    async fn get_product(&self, id: i32) -> AppResult<Option<Product>> {
        Ok(self.products.lock().await.get(id))
    }

    async fn get_products_by_category(&self, category: &str) -> AppResult<Vec<Product>> {
        let wanted = category.to_lowercase();
        Ok(self
            .products
            .lock()
            .await
            .filtered(|product| product.category.to_lowercase() == wanted))
    }

    async fn get_featured_products(&self) -> AppResult<Vec<Product>> {
        Ok(self.products.lock().await.filtered(|product| product.is_featured))
    }

    async fn create_product(&self, product: NewProduct) -> AppResult<Product> {
        let now = Utc::now();
        Ok(self
            .products
            .lock()
            .await
            .insert_with(|id| product.into_product(id, now)))
    }

    async fn update_product(&self, id: i32, product: NewProduct) -> AppResult<Option<Product>> {
        let mut products = self.products.lock().await;
        Ok(products.rows.get_mut(&id).map(|existing| {
            *existing = existing.merged_with(product);
            existing.clone()
        }))
    }

    async fn delete_product(&self, id: i32) -> AppResult<bool> {
        Ok(self.products.lock().await.remove(id))
    }

    async fn get_all_offers(&self) -> AppResult<Vec<Offer>> {
        Ok(self.offers.lock().await.all())
    }

    async fn get_offer(&self, id: i32) -> AppResult<Option<Offer>> {
        Ok(self.offers.lock().await.get(id))
    }

    async fn create_offer(&self, offer: NewOffer) -> AppResult<Offer> {
        let now = Utc::now();
        Ok(self
            .offers
            .lock()
            .await
            .insert_with(|id| offer.into_offer(id, now)))
    }

    async fn update_offer(&self, id: i32, offer: NewOffer) -> AppResult<Option<Offer>> {
        let mut offers = self.offers.lock().await;
        Ok(offers.rows.get_mut(&id).map(|existing| {
            *existing = existing.merged_with(offer);
            existing.clone()
        }))
    }

    async fn delete_offer(&self, id: i32) -> AppResult<bool> {
        Ok(self.offers.lock().await.remove(id))
    }

    async fn get_all_media(&self) -> AppResult<Vec<Media>> {
        Ok(self.media.lock().await.all())
    }

    async fn get_media(&self, id: i32) -> AppResult<Option<Media>> {
        Ok(self.media.lock().await.get(id))
    }

    async fn create_media(&self, media: NewMedia) -> AppResult<Media> {
        let now = Utc::now();
        Ok(self
            .media
            .lock()
            .await
            .insert_with(|id| media.into_media(id, now)))
    }

    async fn delete_media(&self, id: i32) -> AppResult<bool> {
        Ok(self.media.lock().await.remove(id))
    }

    async fn get_all_contacts(&self) -> AppResult<Vec<Contact>> {
        Ok(self.contacts.lock().await.all())
    }

    async fn get_contact(&self, id: i32) -> AppResult<Option<Contact>> {
        Ok(self.contacts.lock().await.get(id))
    }

    async fn create_contact(&self, contact: NewContact) -> AppResult<Contact> {
        let now = Utc::now();
        Ok(self
            .contacts
            .lock()
            .await
            .insert_with(|id| contact.into_contact(id, now)))
    }

    async fn get_categories(&self) -> AppResult<Vec<String>> {
        let products = self.products.lock().await;
        let categories: BTreeSet<String> = products
            .rows
            .values()
            .map(|product| product.category.clone())
            .collect();
        Ok(categories.into_iter().collect())
    }

    fn session_store(&self) -> Arc<dyn SessionStore> {
        self.sessions.clone()
    }
}
