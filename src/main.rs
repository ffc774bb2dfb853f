use std::{net::SocketAddr, time::Duration};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use showroom_api::{
    config::AppConfig,
    routes::create_app,
    state::AppState,
    storage::{self, spawn_session_pruner},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,showroom_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(backend = ?config.backend, upload_dir = %config.upload_dir.display(), "starting");

    let storage = storage::connect(&config).await?;
    let prune_every = Duration::from_secs(config.session_prune_interval_secs);
    let addr = SocketAddr::from((config.host.parse::<std::net::IpAddr>()?, config.port));

    let state = AppState::new(storage, config);
    let _pruner = spawn_session_pruner(state.sessions.clone(), prune_every);

    let app = create_app(state);

    tracing::info!("listening on {}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
