pub mod contacts;
pub mod media;
pub mod offers;
pub mod products;
pub mod users;
