use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        admin::AdminStats,
        auth::{CurrentUser, LoginRequest},
    },
    models::{Contact, Media, NewContact, NewOffer, NewProduct, Offer, Product, ProductStatus},
    response::{MessageBody, SuccessBody},
    routes::{admin, auth, contacts, health, media, offers, products, seo},
};

struct SessionCookieAddon;

impl Modify for SessionCookieAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("sid"))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        seo::sitemap,
        seo::robots,
        auth::login,
        auth::logout,
        auth::current_user,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        products::list_categories,
        offers::list_offers,
        offers::get_offer,
        offers::create_offer,
        offers::update_offer,
        offers::delete_offer,
        media::list_media,
        media::upload_media,
        media::delete_media,
        media::list_media_admin,
        contacts::submit_contact,
        contacts::list_contacts,
        admin::stats
    ),
    components(
        schemas(
            Product,
            NewProduct,
            ProductStatus,
            Offer,
            NewOffer,
            Media,
            Contact,
            NewContact,
            AdminStats,
            LoginRequest,
            CurrentUser,
            MessageBody,
            SuccessBody,
            health::HealthData
        )
    ),
    modifiers(&SessionCookieAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "SEO", description = "Sitemap and crawler rules"),
        (name = "Auth", description = "Session login and logout"),
        (name = "Products", description = "Product catalogue"),
        (name = "Offers", description = "Promotional offers"),
        (name = "Media", description = "Uploaded media files"),
        (name = "Contact", description = "Contact form messages"),
        (name = "Admin", description = "Admin dashboard endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
