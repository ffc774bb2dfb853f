use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    SqlErr,
    ActiveValue::{NotSet, Set},
    sea_query::{Expr, Func},
};

use crate::{
    db::{DbPool, OrmConn, orm_from_pool},
    entity::{
        contacts::{self, Entity as Contacts},
        media::{self, Entity as MediaFiles},
        offers::{self, Entity as Offers},
        products::{self, Entity as Products},
        users::{self, Entity as Users},
    },
    error::{AppError, AppResult},
    models::{
        Contact, Media, NewContact, NewMedia, NewOffer, NewProduct, NewUser, Offer, Product, User,
    },
    storage::{PgSessionStore, SessionStore, Storage},
};

/// Table-backed store. Row-level safety under concurrent requests is left to
/// Postgres.
pub struct PgStorage {
    orm: OrmConn,
    sessions: Arc<PgSessionStore>,
}

impl PgStorage {
    /// Wrap a migrated pool; creates the session table if it is missing.
    pub async fn connect(pool: DbPool) -> AppResult<Self> {
        let sessions = Arc::new(PgSessionStore::new(pool.clone()).await?);
        Ok(Self {
            orm: orm_from_pool(pool),
            sessions,
        })
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn get_user(&self, id: i32) -> AppResult<Option<User>> {
        Ok(Users::find_by_id(id)
            .one(&self.orm)
            .await?
            .map(user_from_entity))
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(Users::find()
            .filter(Expr::expr(Func::lower(Expr::col(users::Column::Username))).eq(username.to_lowercase()))
            .one(&self.orm)
            .await?
            .map(user_from_entity))
    }

    // The unique index on lower(username) decides, so concurrent sign-ups
    // cannot both win.
    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        let active = users::ActiveModel {
            id: NotSet,
            username: Set(user.username),
            password: Set(user.password),
            is_admin: Set(false),
        };
        match active.insert(&self.orm).await {
            Ok(model) => Ok(user_from_entity(model)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::BadRequest("Username is already taken".into()))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn set_user_admin(&self, id: i32, is_admin: bool) -> AppResult<Option<User>> {
        let Some(existing) = Users::find_by_id(id).one(&self.orm).await? else {
            return Ok(None);
        };
        let mut active: users::ActiveModel = existing.into();
        active.is_admin = Set(is_admin);
        updated_or_none(active.update(&self.orm).await).map(|model| model.map(user_from_entity))
    }

    async fn get_all_products(&self) -> AppResult<Vec<Product>> {
        let rows = Products::find()
            .order_by_desc(products::Column::CreatedAt)
            .order_by_desc(products::Column::Id)
            .all(&self.orm)
            .await?;
        Ok(rows.into_iter().map(product_from_entity).collect())
    }

    async fn get_product(&self, id: i32) -> AppResult<Option<Product>> {
        Ok(Products::find_by_id(id)
            .one(&self.orm)
            .await?
            .map(product_from_entity))
    }

    async fn get_products_by_category(&self, category: &str) -> AppResult<Vec<Product>> {
        let rows = Products::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(products::Column::Category)))
                    .eq(category.to_lowercase()),
            )
            .order_by_desc(products::Column::CreatedAt)
            .order_by_desc(products::Column::Id)
            .all(&self.orm)
            .await?;
        Ok(rows.into_iter().map(product_from_entity).collect())
    }

    async fn get_featured_products(&self) -> AppResult<Vec<Product>> {
        let rows = Products::find()
            .filter(products::Column::IsFeatured.eq(true))
            .order_by_desc(products::Column::CreatedAt)
            .order_by_desc(products::Column::Id)
            .all(&self.orm)
            .await?;
        Ok(rows.into_iter().map(product_from_entity).collect())
    }

    async fn create_product(&self, product: NewProduct) -> AppResult<Product> {
        // Apply insert defaults in one place; created_at comes from the column default.
        let draft = product.into_product(0, Utc::now());
        let active = products::ActiveModel {
            id: NotSet,
            name: Set(draft.name),
            description: Set(draft.description),
            image_url: Set(draft.image_url),
            category: Set(draft.category),
            price: Set(draft.price),
            discounted_price: Set(draft.discounted_price),
            is_new: Set(draft.is_new),
            is_featured: Set(draft.is_featured),
            status: Set(draft.status.as_str().to_string()),
            created_at: NotSet,
        };
        Ok(product_from_entity(active.insert(&self.orm).await?))
    }

    async fn update_product(&self, id: i32, product: NewProduct) -> AppResult<Option<Product>> {
        let Some(existing) = Products::find_by_id(id).one(&self.orm).await? else {
            return Ok(None);
        };
        let merged = product_from_entity(existing.clone()).merged_with(product);

        let mut active: products::ActiveModel = existing.into();
        active.name = Set(merged.name);
        active.description = Set(merged.description);
        active.image_url = Set(merged.image_url);
        active.category = Set(merged.category);
        active.price = Set(merged.price);
        active.discounted_price = Set(merged.discounted_price);
        active.is_new = Set(merged.is_new);
        active.is_featured = Set(merged.is_featured);
        active.status = Set(merged.status.as_str().to_string());

        updated_or_none(active.update(&self.orm).await).map(|model| model.map(product_from_entity))
    }

    async fn delete_product(&self, id: i32) -> AppResult<bool> {
        let result = Products::delete_by_id(id).exec(&self.orm).await?;
        Ok(result.rows_affected > 0)
    }

    async fn get_all_offers(&self) -> AppResult<Vec<Offer>> {
        let rows = Offers::find()
            .order_by_desc(offers::Column::CreatedAt)
            .order_by_desc(offers::Column::Id)
            .all(&self.orm)
            .await?;
        Ok(rows.into_iter().map(offer_from_entity).collect())
    }

    async fn get_offer(&self, id: i32) -> AppResult<Option<Offer>> {
        Ok(Offers::find_by_id(id)
            .one(&self.orm)
            .await?
            .map(offer_from_entity))
    }

    async fn create_offer(&self, offer: NewOffer) -> AppResult<Offer> {
        let draft = offer.into_offer(0, Utc::now());
        let active = offers::ActiveModel {
            id: NotSet,
            title: Set(draft.title),
            description: Set(draft.description),
            image_url: Set(draft.image_url),
            expiry_date: Set(draft.expiry_date.map(|d| d.fixed_offset())),
            is_active: Set(draft.is_active),
            is_home_header: Set(draft.is_home_header),
            created_at: NotSet,
        };
        Ok(offer_from_entity(active.insert(&self.orm).await?))
    }

    async fn update_offer(&self, id: i32, offer: NewOffer) -> AppResult<Option<Offer>> {
        let Some(existing) = Offers::find_by_id(id).one(&self.orm).await? else {
            return Ok(None);
        };
        let merged = offer_from_entity(existing.clone()).merged_with(offer);

        let mut active: offers::ActiveModel = existing.into();
        active.title = Set(merged.title);
        active.description = Set(merged.description);
        active.image_url = Set(merged.image_url);
        active.expiry_date = Set(merged.expiry_date.map(|d| d.fixed_offset()));
        active.is_active = Set(merged.is_active);
        active.is_home_header = Set(merged.is_home_header);

        updated_or_none(active.update(&self.orm).await).map(|model| model.map(offer_from_entity))
    }

    async fn delete_offer(&self, id: i32) -> AppResult<bool> {
        let result = Offers::delete_by_id(id).exec(&self.orm).await?;
        Ok(result.rows_affected > 0)
    }

    async fn get_all_media(&self) -> AppResult<Vec<Media>> {
        let rows = MediaFiles::find()
            .order_by_desc(media::Column::CreatedAt)
            .order_by_desc(media::Column::Id)
            .all(&self.orm)
            .await?;
        Ok(rows.into_iter().map(media_from_entity).collect())
    }

    async fn get_media(&self, id: i32) -> AppResult<Option<Media>> {
        Ok(MediaFiles::find_by_id(id)
            .one(&self.orm)
            .await?
            .map(media_from_entity))
    }

    async fn create_media(&self, file: NewMedia) -> AppResult<Media> {
        let active = media::ActiveModel {
            id: NotSet,
            name: Set(file.name),
            filename: Set(file.filename),
            original_name: Set(file.original_name),
            mime_type: Set(file.mime_type),
            size: Set(file.size),
            url: Set(file.url),
            created_at: NotSet,
        };
        Ok(media_from_entity(active.insert(&self.orm).await?))
    }

    async fn delete_media(&self, id: i32) -> AppResult<bool> {
        let result = MediaFiles::delete_by_id(id).exec(&self.orm).await?;
        Ok(result.rows_affected > 0)
    }

    async fn get_all_contacts(&self) -> AppResult<Vec<Contact>> {
        let rows = Contacts::find()
            .order_by_desc(contacts::Column::CreatedAt)
            .order_by_desc(contacts::Column::Id)
            .all(&self.orm)
            .await?;
        Ok(rows.into_iter().map(contact_from_entity).collect())
    }

    async fn get_contact(&self, id: i32) -> AppResult<Option<Contact>> {
        Ok(Contacts::find_by_id(id)
            .one(&self.orm)
            .await?
            .map(contact_from_entity))
    }

    async fn create_contact(&self, contact: NewContact) -> AppResult<Contact> {
        let active = contacts::ActiveModel {
            id: NotSet,
            name: Set(contact.name),
            email: Set(contact.email),
            phone: Set(contact.phone),
            subject: Set(contact.subject),
            message: Set(contact.message),
            created_at: NotSet,
        };
        Ok(contact_from_entity(active.insert(&self.orm).await?))
    }

    async fn get_categories(&self) -> AppResult<Vec<String>> {
        let categories = Products::find()
            .select_only()
            .column(products::Column::Category)
            .distinct()
            .order_by_asc(products::Column::Category)
            .into_tuple::<String>()
            .all(&self.orm)
            .await?;
        Ok(categories)
    }

    fn session_store(&self) -> Arc<dyn SessionStore> {
        self.sessions.clone()
    }
}

/// A row deleted between our read and the update surfaces as `RecordNotUpdated`.
fn updated_or_none<M>(result: Result<M, DbErr>) -> AppResult<Option<M>> {
    match result {
        Ok(model) => Ok(Some(model)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn user_from_entity(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        password: model.password,
        is_admin: model.is_admin,
    }
}

fn product_from_entity(model: products::Model) -> Product {
    Product {
        id: model.id,
        name: model.name,
        description: model.description,
        image_url: model.image_url,
        category: model.category,
        price: model.price,
        discounted_price: model.discounted_price,
        is_new: model.is_new,
        is_featured: model.is_featured,
        status: model.status.parse().unwrap_or_default(),
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn offer_from_entity(model: offers::Model) -> Offer {
    Offer {
        id: model.id,
        title: model.title,
        description: model.description,
        image_url: model.image_url,
        expiry_date: model.expiry_date.map(|d| d.with_timezone(&Utc)),
        is_active: model.is_active,
        is_home_header: model.is_home_header,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn media_from_entity(model: media::Model) -> Media {
    Media {
        id: model.id,
        name: model.name,
        filename: model.filename,
        original_name: model.original_name,
        mime_type: model.mime_type,
        size: model.size,
        url: model.url,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn contact_from_entity(model: contacts::Model) -> Contact {
    Contact {
        id: model.id,
        name: model.name,
        email: model.email,
        phone: model.phone,
        subject: model.subject,
        message: model.message,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
