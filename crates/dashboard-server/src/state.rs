//! Application State

use std::sync::Arc;

use dashboard_core::{PricingCatalog, SiteMeta};

use crate::store::ProductStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Validated pricing catalog served to the frontend
    pub catalog: Arc<PricingCatalog>,

    /// Site name and origin for page metadata
    pub site: Arc<SiteMeta>,

    /// Products submitted through the add-product form
    pub products: Arc<dyn ProductStore>,
}
