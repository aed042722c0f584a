//! Route table

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{
    create_product, get_page_meta, get_pricing, get_pricing_table, health_check, list_products,
};
use crate::state::AppState;

/// API routes plus the WASM frontend; unknown paths fall back to
/// `index.html` so client-side routes survive a reload
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let frontend = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        // Health & info
        .route("/health", get(health_check))

        // Pricing
        .route("/api/pricing", get(get_pricing))
        .route("/api/pricing/table", get(get_pricing_table))
        .route("/api/meta", get(get_page_meta))

        // Products
        .route("/api/products", post(create_product).get(list_products))

        // Static files (WASM frontend)
        .fallback_service(frontend)

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
