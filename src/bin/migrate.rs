use showroom_api::db::{create_pool, run_migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set to run migrations"))?;
    let pool = create_pool(&url).await?;
    run_migrations(&pool).await?;
    println!("Migrations applied");
    Ok(())
}
