//! Catalog provider abstraction
//!
//! The dataset is loaded once at startup through a provider and then shared
//! read-only by every request. Providers only need to hand back a sanitized
//! [`Catalog`]; the query services never see raw rows.

use std::time::Instant;

use crate::{error::AppResult, models::Catalog};

pub mod csv_file;

pub use csv_file::CsvCatalogProvider;

/// Trait for movie dataset sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Load the full catalog snapshot
    async fn load(&self) -> AppResult<Catalog>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Loads a catalog through `provider`, logging size and timing
pub async fn load_catalog(provider: &dyn CatalogProvider) -> AppResult<Catalog> {
    let start = Instant::now();
    tracing::info!(provider = provider.name(), "Loading movie catalog");

    let catalog = provider.load().await.map_err(|e| {
        tracing::error!(provider = provider.name(), error = %e, "Catalog load failed");
        e
    })?;

    if catalog.is_empty() {
        tracing::warn!(provider = provider.name(), "Catalog is empty");
    }

    tracing::info!(
        provider = provider.name(),
        movies = catalog.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Movie catalog loaded"
    );

    Ok(catalog)
}
