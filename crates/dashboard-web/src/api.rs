//! API Client

use serde::Deserialize;

use dashboard_core::{PricingCatalog, Product, ProductDraft};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Origin of the page, used to build absolute API URLs
pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

fn endpoint(path: &str) -> String {
    format!("{}{}", origin(), path)
}

/// Fetch the pricing catalog served by the backend
pub async fn fetch_pricing() -> Result<PricingCatalog, String> {
    let response = reqwest::Client::new()
        .get(endpoint("/api/pricing"))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        Err(format!("Pricing request failed: {}", response.status()))
    }
}

/// Submit a product draft; the server validates it again
pub async fn create_product(draft: &ProductDraft) -> Result<Product, String> {
    let response = reqwest::Client::new()
        .post(endpoint("/api/products"))
        .json(draft)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        let body: Option<ErrorBody> = response.json().await.ok();
        Err(body.map_or_else(|| "Failed to create product".into(), |b| b.error))
    }
}
