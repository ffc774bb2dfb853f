use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use async_trait::async_trait;
use serde_json::{Value, json};
use showroom_api::{
    config::AppConfig,
    error::AppResult,
    models::{
        Contact, Media, NewContact, NewMedia, NewOffer, NewProduct, NewUser, Offer, Product, User,
    },
    password::hash_password,
    routes::create_app,
    state::AppState,
    storage::{MemStorage, SessionStore, Storage},
};
use tempfile::TempDir;
use tower::ServiceExt;

const ADMIN: (&str, &str) = ("admin", "s3cret-pass");
const STAFF: (&str, &str) = ("staff", "staff-pass");

struct TestApp {
    router: Router,
    storage: Arc<MemStorage>,
    uploads: TempDir,
}

async fn setup() -> anyhow::Result<TestApp> {
    setup_with(|storage| storage as Arc<dyn Storage>, |_| {}).await
}

/// Build the app over a seeded `MemStorage`, optionally wrapped by `wrap`, with
/// `configure` applied to the local config.
async fn setup_with(
    wrap: impl FnOnce(Arc<MemStorage>) -> Arc<dyn Storage>,
    configure: impl FnOnce(&mut AppConfig),
) -> anyhow::Result<TestApp> {
    let uploads = tempfile::tempdir()?;
    let storage = Arc::new(MemStorage::new());

    let admin = storage
        .create_user(NewUser {
            username: ADMIN.0.into(),
            password: hash_password(ADMIN.1)?,
        })
        .await?;
    storage.set_user_admin(admin.id, true).await?;
    storage
        .create_user(NewUser {
            username: STAFF.0.into(),
            password: hash_password(STAFF.1)?,
        })
        .await?;

    let mut config = AppConfig::local(uploads.path());
    configure(&mut config);
    let state = AppState::new(wrap(storage.clone()), config);
    Ok(TestApp {
        router: create_app(state),
        storage,
        uploads,
    })
}

/// Reports every delete as a no-op while the rows stay readable.
struct DeletesNothing(Arc<MemStorage>);

#[async_trait]
impl Storage for DeletesNothing {
    async fn get_user(&self, id: i32) -> AppResult<Option<User>> {
        self.0.get_user(id).await
    }
    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.0.get_user_by_username(username).await
    }
    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        self.0.create_user(user).await
    }
    async fn set_user_admin(&self, id: i32, is_admin: bool) -> AppResult<Option<User>> {
        self.0.set_user_admin(id, is_admin).await
    }

    async fn get_all_products(&self) -> AppResult<Vec<Product>> {
        self.0.get_all_products().await
    }
    async fn get_product(&self, id: i32) -> AppResult<Option<Product>> {
        self.0.get_product(id).await
    }
    async fn get_products_by_category(&self, category: &str) -> AppResult<Vec<Product>> {
        self.0.get_products_by_category(category).await
    }
    async fn get_featured_products(&self) -> AppResult<Vec<Product>> {
        self.0.get_featured_products().await
    }
    async fn create_product(&self, product: NewProduct) -> AppResult<Product> {
        self.0.create_product(product).await
    }
    async fn update_product(&self, id: i32, product: NewProduct) -> AppResult<Option<Product>> {
        self.0.update_product(id, product).await
    }
    async fn delete_product(&self, _id: i32) -> AppResult<bool> {
        Ok(false)
    }

    async fn get_all_offers(&self) -> AppResult<Vec<Offer>> {
        self.0.get_all_offers().await
    }
    async fn get_offer(&self, id: i32) -> AppResult<Option<Offer>> {
        self.0.get_offer(id).await
    }
    async fn create_offer(&self, offer: NewOffer) -> AppResult<Offer> {
        self.0.create_offer(offer).await
    }
    async fn update_offer(&self, id: i32, offer: NewOffer) -> AppResult<Option<Offer>> {
        self.0.update_offer(id, offer).await
    }
    async fn delete_offer(&self, _id: i32) -> AppResult<bool> {
        Ok(false)
    }

    async fn get_all_media(&self) -> AppResult<Vec<Media>> {
        self.0.get_all_media().await
    }
    async fn get_media(&self, id: i32) -> AppResult<Option<Media>> {
        self.0.get_media(id).await
    }
    async fn create_media(&self, media: NewMedia) -> AppResult<Media> {
        self.0.create_media(media).await
    }
    async fn delete_media(&self, _id: i32) -> AppResult<bool> {
        Ok(false)
    }

    async fn get_all_contacts(&self) -> AppResult<Vec<Contact>> {
        self.0.get_all_contacts().await
    }
    async fn get_contact(&self, id: i32) -> AppResult<Option<Contact>> {
        self.0.get_contact(id).await
    }
    async fn create_contact(&self, contact: NewContact) -> AppResult<Contact> {
        self.0.create_contact(contact).await
    }

    async fn get_categories(&self) -> AppResult<Vec<String>> {
        self.0.get_categories().await
    }

    fn session_store(&self) -> Arc<dyn SessionStore> {
        self.0.session_store()
    }
}

impl TestApp {
    async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    async fn json(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let body = match body {
            Some(body) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(body.to_string())
            }
            None => Body::empty(),
        };
        let response = self.send(builder.body(body).unwrap()).await;
        let status = response.status();
        (status, body_json(response).await)
    }

    async fn login(&self, (username, password): (&str, &str)) -> String {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "username": username, "password": password }).to_string(),
            ))
            .unwrap();
        let response = self.send(request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .expect("login sets a cookie")
            .to_string();
        set_cookie
            .split(';')
            .next()
            .expect("cookie pair")
            .to_string()
    }
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    }
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn chair_payload(price: i64) -> Value {
    json!({
        "name": "Oak Chair",
        "description": "Solid oak dining chair",
        "imageUrl": "/uploads/oak-chair.jpg",
        "category": "Dining",
        "price": price
    })
}

fn product(name: &str, category: &str, featured: bool) -> NewProduct {
    NewProduct {
        name: name.into(),
        description: format!("{name} description"),
        image_url: format!("/uploads/{}.jpg", name.to_lowercase()),
        category: category.into(),
        price: Some(1000),
        is_featured: Some(featured),
        ..Default::default()
    }
}

#[tokio::test]
async fn mutations_require_admin_session() -> anyhow::Result<()> {
    let app = setup().await?;

    let gated = [
        (Method::POST, "/api/products"),
        (Method::PUT, "/api/products/1"),
        (Method::DELETE, "/api/products/1"),
        (Method::POST, "/api/offers"),
        (Method::PUT, "/api/offers/1"),
        (Method::DELETE, "/api/offers/1"),
        (Method::POST, "/api/media"),
        (Method::DELETE, "/api/media/1"),
        (Method::GET, "/api/contacts"),
        (Method::GET, "/api/admin/stats"),
        (Method::GET, "/api/admin/media"),
    ];
    for (method, uri) in gated {
        let (status, body) = app.json(method.clone(), uri, None, Some(chair_payload(1))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert!(body["message"].is_string());
    }
    Ok(())
}

#[tokio::test]
async fn public_reads_need_no_session() -> anyhow::Result<()> {
    let app = setup().await?;

    for uri in ["/api/products", "/api/offers", "/api/media", "/api/categories"] {
        let (status, body) = app.json(Method::GET, uri, None, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.is_array(), "{uri}");
    }

    let (status, body) = app
        .json(
            Method::POST,
            "/api/contact",
            None,
            Some(json!({
                "name": "Asha",
                "email": "asha@example.com",
                "phone": "+91 98765 43210",
                "subject": "Delivery",
                "message": "Do you deliver to Pune?"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["subject"], "Delivery");
    assert_eq!(app.storage.get_all_contacts().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn non_admin_session_is_rejected() -> anyhow::Result<()> {
    let app = setup().await?;
    let cookie = app.login(STAFF).await;

    let (status, _) = app.json(Method::GET, "/api/user", Some(&cookie), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .json(Method::POST, "/api/products", Some(&cookie), Some(chair_payload(10)))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(app.storage.get_all_products().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn login_user_and_logout_cycle() -> anyhow::Result<()> {
    let app = setup().await?;

    let (status, body) = app
        .json(
            Method::POST,
            "/api/login",
            None,
            Some(json!({ "username": "admin", "password": "wrong" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid username or password");

    let cookie = app.login(ADMIN).await;
    let (status, body) = app.json(Method::GET, "/api/user", Some(&cookie), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "admin");
    assert_eq!(body["isAdmin"], true);
    assert!(body.get("password").is_none());

    let (status, body) = app.json(Method::POST, "/api/logout", Some(&cookie), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = app.json(Method::GET, "/api/user", Some(&cookie), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn missing_name_is_rejected_without_side_effects() -> anyhow::Result<()> {
    let app = setup().await?;
    let cookie = app.login(ADMIN).await;

    let mut payload = chair_payload(5000);
    payload.as_object_mut().unwrap().remove("name");

    let (status, body) = app
        .json(Method::POST, "/api/products", Some(&cookie), Some(payload))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("name"));
    assert!(app.storage.get_all_products().await?.is_empty());

    let (status, body) = app
        .json(Method::POST, "/api/products", Some(&cookie), Some(chair_payload(-5)))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("price"));
    assert!(app.storage.get_all_products().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn featured_filter_returns_only_featured() -> anyhow::Result<()> {
    let app = setup().await?;
    let featured = app.storage.create_product(product("Sofa", "Living", true)).await?;
    app.storage.create_product(product("Stool", "Living", false)).await?;

    let (status, body) = app
        .json(Method::GET, "/api/products?featured=true", None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], featured.id);

    let (_, body) = app
        .json(Method::GET, "/api/products?category=living", None, None)
        .await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn stats_match_list_lengths() -> anyhow::Result<()> {
    let app = setup().await?;
    let seeded = [
        ("Sofa", "Living"),
        ("Armchair", "Living"),
        ("Bed", "Bedroom"),
        ("Table", "Dining"),
    ];
    for (name, category) in seeded {
        app.storage.create_product(product(name, category, false)).await?;
    }
    let cookie = app.login(ADMIN).await;

    let (status, body) = app
        .json(Method::GET, "/api/admin/stats", Some(&cookie), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["productCount"], 4);
    assert_eq!(body["categoryCount"], 3);
    assert_eq!(body["offerCount"], 0);
    assert_eq!(body["messageCount"], 0);
    assert_eq!(body["mediaCount"], 0);

    let (_, categories) = app.json(Method::GET, "/api/categories", None, None).await;
    assert_eq!(categories, json!(["Bedroom", "Dining", "Living"]));
    Ok(())
}

#[tokio::test]
async fn oak_chair_lifecycle() -> anyhow::Result<()> {
    let app = setup().await?;
    let chair = app
        .storage
        .create_product(NewProduct {
            name: "Oak Chair".into(),
            description: "Solid oak dining chair".into(),
            image_url: "/uploads/oak-chair.jpg".into(),
            category: "Dining".into(),
            price: Some(5000),
            ..Default::default()
        })
        .await?;
    let uri = format!("/api/products/{}", chair.id);
    let cookie = app.login(ADMIN).await;

    let (status, body) = app.json(Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Oak Chair");
    assert_eq!(body["price"], 5000);

    let (status, body) = app
        .json(Method::PUT, &uri, Some(&cookie), Some(chair_payload(4500)))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"], 4500);
    assert_eq!(body["id"], chair.id);

    let (status, body) = app.json(Method::DELETE, &uri, Some(&cookie), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product deleted successfully");

    let (status, _) = app.json(Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.json(Method::DELETE, &uri, Some(&cookie), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() -> anyhow::Result<()> {
    let app = setup().await?;

    let (status, body) = app.json(Method::GET, "/api/products/abc", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid product ID");

    let (status, body) = app.json(Method::GET, "/api/offers/0", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid offer ID");

    let (status, _) = app.json(Method::GET, "/api/products/999", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn offer_update_keeps_omitted_flags() -> anyhow::Result<()> {
    let app = setup().await?;
    let cookie = app.login(ADMIN).await;

    let (status, created) = app
        .json(
            Method::POST,
            "/api/offers",
            Some(&cookie),
            Some(json!({
                "title": "Monsoon Sale",
                "description": "Up to 40% off",
                "imageUrl": "/uploads/monsoon.jpg",
                "isHomeHeader": true
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["isActive"], true);

    let uri = format!("/api/offers/{}", created["id"]);
    let (status, updated) = app
        .json(
            Method::PUT,
            &uri,
            Some(&cookie),
            Some(json!({
                "title": "Monsoon Mega Sale",
                "description": "Up to 50% off",
                "imageUrl": "/uploads/monsoon.jpg"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Monsoon Mega Sale");
    assert_eq!(updated["isHomeHeader"], true);
    assert_eq!(updated["isActive"], true);
    Ok(())
}

#[tokio::test]
async fn media_upload_and_delete_manage_files() -> anyhow::Result<()> {
    let app = setup().await?;
    let cookie = app.login(ADMIN).await;

    let boundary = "X-SHOWROOM-BOUNDARY";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"name\"\r\n\r\n\
         Hero banner\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"Hero.PNG\"\r\n\
         Content-Type: image/png\r\n\r\n\
         not-really-a-png\r\n\
         --{boundary}--\r\n"
    );
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/media")
        .header(header::COOKIE, &cookie)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let media = body_json(response).await;
    assert_eq!(media["name"], "Hero banner");
    assert_eq!(media["originalName"], "Hero.PNG");
    assert_eq!(media["mimeType"], "image/png");
    assert_eq!(media["size"], 16);

    let filename = media["filename"].as_str().unwrap().to_string();
    assert!(filename.ends_with(".png"));
    assert_eq!(media["url"], format!("/uploads/{filename}"));
    let on_disk = app.uploads.path().join(&filename);
    assert!(on_disk.exists());

    let served = app
        .send(Request::get(format!("/uploads/{filename}")).body(Body::empty()).unwrap())
        .await;
    assert_eq!(served.status(), StatusCode::OK);
    assert_eq!(body_text(served).await, "not-really-a-png");

    let uri = format!("/api/media/{}", media["id"]);
    let (status, body) = app.json(Method::DELETE, &uri, Some(&cookie), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Media deleted successfully");
    assert!(!on_disk.exists());
    assert!(app.storage.get_all_media().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn upload_without_file_is_bad_request() -> anyhow::Result<()> {
    let app = setup().await?;
    let cookie = app.login(ADMIN).await;

    let boundary = "B";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nlonely\r\n--{boundary}--\r\n"
    );
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/media")
        .header(header::COOKIE, &cookie)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "No file uploaded");
    Ok(())
}

#[tokio::test]
async fn sitemap_and_robots_are_served() -> anyhow::Result<()> {
    let app = setup().await?;
    let sofa = app.storage.create_product(product("Sofa", "Living", false)).await?;

    let response = app
        .send(Request::get("/sitemap.xml").body(Body::empty()).unwrap())
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/xml"
    );
    let xml = body_text(response).await;
    assert!(xml.contains("<loc>http://127.0.0.1:3000/products</loc>"));
    assert!(xml.contains(&format!("<loc>http://127.0.0.1:3000/products/{}</loc>", sofa.id)));

    let response = app
        .send(Request::get("/robots.txt").body(Body::empty()).unwrap())
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let robots = body_text(response).await;
    assert!(robots.contains("Disallow: /admin"));
    assert!(robots.contains("Sitemap: http://127.0.0.1:3000/sitemap.xml"));
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_json_404() -> anyhow::Result<()> {
    let app = setup().await?;
    let (status, body) = app.json(Method::GET, "/api/nope", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("/api/nope"));
    Ok(())
}

#[tokio::test]
async fn delete_that_removes_nothing_is_server_error() -> anyhow::Result<()> {
    let app = setup_with(
        |storage| Arc::new(DeletesNothing(storage)) as Arc<dyn Storage>,
        |_| {},
    )
    .await?;
    let sofa = app.storage.create_product(product("Sofa", "Living", false)).await?;
    let offer = app
        .storage
        .create_offer(NewOffer {
            title: "Clearance".into(),
            description: "Last pieces".into(),
            image_url: "/uploads/clearance.jpg".into(),
            ..Default::default()
        })
        .await?;
    let media = app
        .storage
        .create_media(NewMedia {
            name: "Banner".into(),
            filename: "banner.jpg".into(),
            original_name: "banner.jpg".into(),
            mime_type: "image/jpeg".into(),
            size: 10,
            url: "/uploads/banner.jpg".into(),
        })
        .await?;
    let cookie = app.login(ADMIN).await;

    let uris = [
        format!("/api/products/{}", sofa.id),
        format!("/api/offers/{}", offer.id),
        format!("/api/media/{}", media.id),
    ];
    for uri in &uris {
        let (status, body) = app.json(Method::DELETE, uri, Some(&cookie), None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body, json!({ "message": "Internal Server Error" }), "{uri}");
    }

    let (status, _) = app.json(Method::DELETE, "/api/products/999", Some(&cookie), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn oversized_json_body_is_json_413() -> anyhow::Result<()> {
    let app = setup_with(
        |storage| storage as Arc<dyn Storage>,
        |config| config.max_upload_bytes = 64,
    )
    .await?;

    let (status, body) = app
        .json(
            Method::POST,
            "/api/contact",
            None,
            Some(json!({
                "name": "Asha",
                "email": "asha@example.com",
                "phone": "+91 98765 43210",
                "subject": "Delivery",
                "message": "x".repeat(200)
            })),
        )
        .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body, json!({ "message": "Request body is too large" }));
    assert!(app.storage.get_all_contacts().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn oversized_upload_is_json_413() -> anyhow::Result<()> {
    let app = setup_with(
        |storage| storage as Arc<dyn Storage>,
        |config| config.max_upload_bytes = 64,
    )
    .await?;
    let cookie = app.login(ADMIN).await;

    let boundary = "LIMIT";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"big.bin\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\
         {}\r\n\
         --{boundary}--\r\n",
        "0".repeat(512)
    );
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/media")
        .header(header::COOKIE, &cookie)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body_json(response).await["message"].is_string());
    assert!(app.storage.get_all_media().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn upload_without_multipart_body_is_json_400() -> anyhow::Result<()> {
    let app = setup().await?;
    let cookie = app.login(ADMIN).await;

    let (status, body) = app
        .json(Method::POST, "/api/media", Some(&cookie), Some(json!({ "name": "x" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
    Ok(())
}
