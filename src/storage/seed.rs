//! Sample catalogue used to bootstrap a fresh store.

use chrono::{Duration, Utc};

use crate::models::{NewOffer, NewProduct, ProductStatus};

fn product(
    name: &str,
    description: &str,
    image_url: &str,
    category: &str,
    price: i64,
    is_new: bool,
    is_featured: bool,
) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        category: category.to_string(),
        price: Some(price),
        discounted_price: None,
        is_new: Some(is_new),
        is_featured: Some(is_featured),
        status: Some(ProductStatus::Active),
    }
}

pub fn sample_products() -> Vec<NewProduct> {
    let mut dining_table = product(
        "Wooden Dining Table",
        "Sturdy wooden dining table that comfortably seats 6 people.",
        "https://images.unsplash.com/photo-1615066390971-03e4e1c36ddf?auto=format&fit=crop&q=80&w=900",
        "Dining",
        36999,
        false,
        true,
    );
    dining_table.discounted_price = Some(45999);

    vec![
        product(
            "Modern Velvet Sofa",
            "Elegant and comfortable velvet sofa perfect for your living room.",
            "https://images.unsplash.com/photo-1550581190-9c1c48d21d6c?auto=format&fit=crop&q=80&w=900",
            "Living Room",
            42999,
            true,
            true,
        ),
        dining_table,
        product(
            "King Size Bed Frame",
            "Elegant king size bed frame with built-in storage.",
            "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85?auto=format&fit=crop&q=80&w=800",
            "Bedroom",
            58999,
            false,
            true,
        ),
        product(
            "Ergonomic Office Desk",
            "Height-adjustable office desk for maximum comfort.",
            "https://images.unsplash.com/photo-1518455027359-f3f8164ba6bd?auto=format&fit=crop&q=80&w=900",
            "Office",
            24999,
            false,
            true,
        ),
        product(
            "L-Shaped Sectional Sofa",
            "Versatile L-shaped sectional sofa with chaise lounge.",
            "https://images.unsplash.com/photo-1493663284031-b7e3aefcae8e?auto=format&fit=crop&q=80&w=700",
            "Living Room",
            65999,
            false,
            false,
        ),
        product(
            "Round Coffee Table",
            "Modern round coffee table with marble top.",
            "https://images.unsplash.com/photo-1544457070-4cd773b4d71e?auto=format&fit=crop&q=80&w=800",
            "Living Room",
            18999,
            false,
            false,
        ),
        product(
            "Elegant Wall Art",
            "Contemporary wall art piece to enhance your interior design.",
            "https://images.unsplash.com/photo-1513519245088-0e12902e5a38?auto=format&fit=crop&q=80&w=900",
            "Decor & Interior",
            12499,
            false,
            true,
        ),
        product(
            "Luxury Hotel Bed Set",
            "Complete bed set with premium linens designed for hotel standards.",
            "https://images.unsplash.com/photo-1540518614846-7eded433c457?auto=format&fit=crop&q=80&w=900",
            "Hotel Furniture",
            89999,
            false,
            true,
        ),
        product(
            "Hotel Reception Desk",
            "Modern reception counter with built-in storage and cable management.",
            "https://images.unsplash.com/photo-1566073771259-6a8506099945?auto=format&fit=crop&q=80&w=900",
            "Hotel Furniture",
            124999,
            false,
            false,
        ),
        product(
            "Hotel Lobby Sofa",
            "Elegant and durable lobby seating solution for hospitality spaces.",
            "https://images.unsplash.com/photo-1584132967334-10e028bd69f7?auto=format&fit=crop&q=80&w=900",
            "Hotel Furniture",
            78500,
            false,
            false,
        ),
    ]
}

pub fn sample_offers() -> Vec<NewOffer> {
    let now = Utc::now();
    vec![
        NewOffer {
            title: "Summer Sale".to_string(),
            description: "25% off on selected items".to_string(),
            image_url: "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?auto=format&fit=crop&q=80&w=900".to_string(),
            expiry_date: Some(now + Duration::days(30)),
            is_active: Some(true),
            is_home_header: Some(true),
        },
        NewOffer {
            title: "Diwali Special".to_string(),
            description: "Free delivery on orders above ₹25,000".to_string(),
            image_url: "https://images.unsplash.com/photo-1513519245088-0e12902e5a38?auto=format&fit=crop&q=80&w=900".to_string(),
            expiry_date: Some(now + Duration::days(45)),
            is_active: Some(true),
            is_home_header: Some(false),
        },
    ]
}
