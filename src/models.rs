use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Argon2 PHC string, never the plain password.
    pub password: String,
    pub is_admin: bool,
}

/// Public insert shape for users. Admin rights are granted only through
/// `Storage::set_user_admin`.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProductStatus::Active),
            "inactive" => Ok(ProductStatus::Inactive),
            other => Err(format!("unknown product status `{other}`")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    /// Smallest currency unit. `None` marks an "enquire for price" product.
    pub price: Option<i64>,
    pub discounted_price: Option<i64>,
    pub is_new: bool,
    pub is_featured: bool,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProduct {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "is required"))]
    pub image_url: String,
    #[validate(length(min = 1, message = "is required"))]
    pub category: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub price: Option<i64>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub discounted_price: Option<i64>,
    pub is_new: Option<bool>,
    pub is_featured: Option<bool>,
    pub status: Option<ProductStatus>,
}

impl NewProduct {
    pub fn into_product(self, id: i32, created_at: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            category: self.category,
            price: self.price,
            discounted_price: self.discounted_price,
            is_new: self.is_new.unwrap_or(false),
            is_featured: self.is_featured.unwrap_or(false),
            status: self.status.unwrap_or_default(),
            created_at,
        }
    }
}

impl Product {
    /// Overlay `patch` on this record. Absent options and empty strings keep
    /// the stored value; `id` and `created_at` never change.
    pub fn merged_with(&self, patch: NewProduct) -> Product {
        Product {
            id: self.id,
            name: keep_if_empty(patch.name, &self.name),
            description: keep_if_empty(patch.description, &self.description),
            image_url: keep_if_empty(patch.image_url, &self.image_url),
            category: keep_if_empty(patch.category, &self.category),
            price: patch.price.or(self.price),
            discounted_price: patch.discounted_price.or(self.discounted_price),
            is_new: patch.is_new.unwrap_or(self.is_new),
            is_featured: patch.is_featured.unwrap_or(self.is_featured),
            status: patch.status.unwrap_or(self.status),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Informational only; an expired offer stays active until `is_active` is cleared.
    pub expiry_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub is_home_header: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NewOffer {
    #[validate(length(min = 1, message = "is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "is required"))]
    pub image_url: String,
    pub expiry_date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
    pub is_home_header: Option<bool>,
}

impl NewOffer {
    pub fn into_offer(self, id: i32, created_at: DateTime<Utc>) -> Offer {
        Offer {
            id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            expiry_date: self.expiry_date,
            is_active: self.is_active.unwrap_or(true),
            is_home_header: self.is_home_header.unwrap_or(false),
            created_at,
        }
    }
}

impl Offer {
    pub fn merged_with(&self, patch: NewOffer) -> Offer {
        Offer {
            id: self.id,
            title: keep_if_empty(patch.title, &self.title),
            description: keep_if_empty(patch.description, &self.description),
            image_url: keep_if_empty(patch.image_url, &self.image_url),
            expiry_date: patch.expiry_date.or(self.expiry_date),
            is_active: patch.is_active.unwrap_or(self.is_active),
            is_home_header: patch.is_home_header.unwrap_or(self.is_home_header),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: i32,
    pub name: String,
    /// Generated on upload; unique within the uploads directory.
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMedia {
    pub name: String,
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub url: String,
}

impl NewMedia {
    pub fn into_media(self, id: i32, created_at: DateTime<Utc>) -> Media {
        Media {
            id,
            name: self.name,
            filename: self.filename,
            original_name: self.original_name,
            mime_type: self.mime_type,
            size: self.size,
            url: self.url,
            created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NewContact {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "is required"))]
    pub message: String,
}

impl NewContact {
    pub fn into_contact(self, id: i32, created_at: DateTime<Utc>) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            subject: self.subject,
            message: self.message,
            created_at,
        }
    }
}

fn keep_if_empty(candidate: String, current: &str) -> String {
    if candidate.is_empty() {
        current.to_string()
    } else {
        candidate
    }
}
