use bill_tracker_backend::{config::Config, create_router, initialize_backend};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let app_state = initialize_backend(&config).await?;

    if let Some(seed_file) = &config.seed_file {
        info!("Syncing bills from {}", seed_file.display());
        let synced = app_state.bill_service.sync_from_file(seed_file).await?;
        info!("Seeded {} bills", synced);
    }

    let app = create_router(app_state, config.cors_origin.clone());

    info!("Starting server on {}", config.bind_addr);
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
