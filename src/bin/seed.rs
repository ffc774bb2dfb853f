use showroom_api::{
    config::AppConfig,
    db::{create_pool, run_migrations},
    models::NewUser,
    password::hash_password,
    storage::{PgStorage, Storage, seed},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set to seed the database"))?;

    let pool = create_pool(url).await?;
    run_migrations(&pool).await?;
    let storage = PgStorage::connect(pool).await?;

    let admin_id = ensure_admin(&storage, &config.admin_username, &config.admin_password).await?;
    seed_catalogue(&storage).await?;

    println!("Seed completed. Admin ID: {admin_id}");
    Ok(())
}

async fn ensure_admin(storage: &PgStorage, username: &str, password: &str) -> anyhow::Result<i32> {
    let user = match storage.get_user_by_username(username).await? {
        Some(existing) => existing,
        None => {
            storage
                .create_user(NewUser {
                    username: username.to_string(),
                    password: hash_password(password)?,
                })
                .await?
        }
    };
    if !user.is_admin {
        storage.set_user_admin(user.id, true).await?;
    }
    println!("Ensured admin {username}");
    Ok(user.id)
}

// Only fills empty tables so re-running never duplicates the catalogue.
async fn seed_catalogue(storage: &PgStorage) -> anyhow::Result<()> {
    if storage.get_all_products().await?.is_empty() {
        for product in seed::sample_products() {
            storage.create_product(product).await?;
        }
        println!("Seeded products");
    } else {
        println!("Products already present, skipping");
    }

    if storage.get_all_offers().await?.is_empty() {
        for offer in seed::sample_offers() {
            storage.create_offer(offer).await?;
        }
        println!("Seeded offers");
    } else {
        println!("Offers already present, skipping");
    }
    Ok(())
}
