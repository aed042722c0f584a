//! Dashboard HTTP Server
//!
//! Axum-based server for the dashboard frontend. Serves the compiled WASM
//! app, the pricing catalog and page metadata, and accepts products from
//! the add-product form.

mod config;
mod handlers;
mod router;
mod state;
mod store;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dashboard_core::PricingCatalog;

use crate::config::ServerConfig;
use crate::state::AppState;
use crate::store::MemoryProductStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    // Pricing catalog: file override or built-in
    let catalog = match &config.catalog_path {
        Some(path) => PricingCatalog::load(path)
            .with_context(|| format!("loading pricing catalog {}", path.display()))?,
        None => {
            let catalog = PricingCatalog::default();
            catalog.validate().context("built-in pricing catalog")?;
            tracing::info!("Using built-in pricing catalog");
            catalog
        }
    };

    for tier in &catalog.tiers {
        tracing::info!(
            "  {}: {}/month, {}/year (save {}%)",
            tier.name,
            dashboard_core::format_price(tier.monthly_price),
            dashboard_core::format_price(tier.yearly_price),
            tier.yearly_savings()
        );
    }

    if !config.static_dir.exists() {
        tracing::warn!("Static directory {} not found", config.static_dir.display());
        tracing::warn!("  Build the frontend with: trunk build --release");
    }

    // Build application state
    let state = AppState {
        catalog: Arc::new(catalog),
        site: Arc::new(config.site.clone()),
        products: Arc::new(MemoryProductStore::new()),
    };

    let app = router::build_router(state, &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("Dashboard server running on http://{}", config.bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health             - Health check");
    tracing::info!("  GET  /api/pricing        - Pricing catalog");
    tracing::info!("  GET  /api/pricing/table  - Comparison table (?period=yearly)");
    tracing::info!("  GET  /api/meta           - Page metadata (?path=...)");
    tracing::info!("  POST /api/products       - Create product");
    tracing::info!("  GET  /api/products       - List products");

    axum::serve(listener, app).await?;

    Ok(())
}
