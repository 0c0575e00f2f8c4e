use elegance_core::{Product, ProductId, ProductStore, ProductStoreError};
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};

/// Read-only view of the `products` table.
#[derive(Clone)]
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresProductStore { pool }
    }
}

#[async_trait::async_trait]
impl ProductStore for PostgresProductStore {
    #[tracing::instrument(name = "Retrieving product from PostgreSQL", skip_all)]
    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductStoreError> {
        let unexpected = |e: sqlx::Error| ProductStoreError::UnexpectedError(e.to_string());

        let row = sqlx::query("SELECT id, name, price, metadata FROM products WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?
            .ok_or(ProductStoreError::ProductNotFound)?;

        let id: String = row.try_get("id").map_err(unexpected)?;
        let name: String = row.try_get("name").map_err(unexpected)?;
        let price: Decimal = row.try_get("price").map_err(unexpected)?;
        let metadata: Option<serde_json::Value> = row.try_get("metadata").map_err(unexpected)?;

        Product::new(
            ProductId::from(id.as_str()),
            name,
            price,
            metadata.unwrap_or_default(),
        )
        .map_err(|e| ProductStoreError::UnexpectedError(e.to_string()))
    }
}
