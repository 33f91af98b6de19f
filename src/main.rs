use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movie_similarity_api::{
    config::Config,
    routes::{create_router, AppState},
    services::providers::{load_catalog, CsvCatalogProvider},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_similarity_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Load the catalog once; every request reads the same snapshot
    let provider = CsvCatalogProvider::new(&config.dataset_path);
    let catalog = load_catalog(&provider).await?;

    let app = create_router(AppState::new(catalog, config.min_vote_count));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
