//! Product Storage

use std::sync::RwLock;

use chrono::Utc;
use thiserror::Error;

use dashboard_core::{NewProduct, Product};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("A product with SKU {0} already exists")]
    DuplicateSku(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Product storage trait
pub trait ProductStore: Send + Sync {
    /// Assign an id and timestamp, then store
    fn insert(&self, product: NewProduct) -> Result<Product, StoreError>;

    /// All products in insertion order
    fn list(&self) -> Result<Vec<Product>, StoreError>;
}

/// In-memory product store (for development)
#[derive(Default)]
pub struct MemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Storage("product store lock poisoned".into())
}

impl ProductStore for MemoryProductStore {
    fn insert(&self, product: NewProduct) -> Result<Product, StoreError> {
        let mut products = self.products.write().map_err(poisoned)?;

        if products.iter().any(|p| p.details.sku == product.sku) {
            return Err(StoreError::DuplicateSku(product.sku));
        }

        let product = product.into_product(uuid::Uuid::new_v4().to_string(), Utc::now());
        products.push(product.clone());
        Ok(product)
    }

    fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.read().map_err(poisoned)?.clone())
    }
}
