use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use elegance_core::{Product, ProductId, ProductStore, ProductStoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogSeedError {
    #[error("Failed to read product seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse product seed file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0}")]
    InvalidProduct(#[from] elegance_core::ProductError),
}

/// Immutable in-memory catalog, seeded at startup.
#[derive(Default, Clone)]
pub struct HashMapProductStore {
    products: Arc<HashMap<ProductId, Product>>,
}

impl HashMapProductStore {
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();
        Self {
            products: Arc::new(products),
        }
    }

    /// Loads a JSON array of products.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogSeedError> {
        let contents = std::fs::read_to_string(path)?;
        let raw: Vec<Product> = serde_json::from_str(&contents)?;
        let products = raw
            .into_iter()
            .map(|p| Product::new(p.id, p.name, p.price, p.metadata))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(count = products.len(), "seeded product catalog");
        Ok(Self::new(products))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait::async_trait]
impl ProductStore for HashMapProductStore {
    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductStoreError> {
        self.products
            .get(id)
            .cloned()
            .ok_or(ProductStoreError::ProductNotFound)
    }
}
