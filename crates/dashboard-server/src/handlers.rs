//! HTTP Handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use dashboard_core::{
    BillingPeriod, ComparisonTable, PageMeta, PricingCatalog, Product, ProductDraft,
};

use crate::state::AppState;
use crate::store::StoreError;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub tiers: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, code: &str, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.into(),
        }),
    )
}

#[derive(Debug, Deserialize)]
pub struct TableQuery {
    #[serde(default)]
    pub period: BillingPeriod,
}

#[derive(Debug, Deserialize)]
pub struct MetaQuery {
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct PageMetaResponse {
    #[serde(flatten)]
    pub meta: PageMeta,
    pub document_title: String,
    pub canonical_url: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        tiers: state.catalog.tiers.len(),
    })
}

/// Full pricing catalog (tiers, benefits, FAQ)
pub async fn get_pricing(State(state): State<AppState>) -> Json<PricingCatalog> {
    Json(state.catalog.as_ref().clone())
}

/// Comparison table as displayed for the requested billing period
pub async fn get_pricing_table(
    State(state): State<AppState>,
    Query(query): Query<TableQuery>,
) -> Json<ComparisonTable> {
    Json(ComparisonTable::build(&state.catalog, query.period))
}

/// Page metadata for a frontend route
pub async fn get_page_meta(
    State(state): State<AppState>,
    Query(query): Query<MetaQuery>,
) -> Result<Json<PageMetaResponse>, ApiError> {
    let meta = PageMeta::for_path(&query.path).map_err(|e| {
        tracing::debug!("Meta lookup failed: {}", e);
        api_error(StatusCode::NOT_FOUND, "UNKNOWN_PAGE", e.user_message())
    })?;

    Ok(Json(PageMetaResponse {
        document_title: meta.document_title(&state.site),
        canonical_url: meta.canonical_url(&state.site),
        meta,
    }))
}

/// Validate and store a product submitted from the form
pub async fn create_product(
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = draft.validate().map_err(|e| {
        tracing::debug!("Rejected product draft: {}", e);
        api_error(StatusCode::UNPROCESSABLE_ENTITY, "INVALID_PRODUCT", e.user_message())
    })?;

    let stored = state.products.insert(product).map_err(|e| match e {
        StoreError::DuplicateSku(_) => {
            api_error(StatusCode::CONFLICT, "DUPLICATE_SKU", e.to_string())
        }
        StoreError::Storage(_) => {
            tracing::error!("Product store error: {}", e);
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
                "An error occurred processing your request.",
            )
        }
    })?;

    tracing::info!("Created product {} ({})", stored.id, stored.details.sku);
    Ok((StatusCode::CREATED, Json(stored)))
}

/// All stored products
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    state.products.list().map(Json).map_err(|e| {
        tracing::error!("Product store error: {}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", e.to_string())
    })
}
