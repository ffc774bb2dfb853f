pub mod admin_service;
pub mod auth_service;
pub mod contact_service;
pub mod media_service;
pub mod offer_service;
pub mod product_service;
