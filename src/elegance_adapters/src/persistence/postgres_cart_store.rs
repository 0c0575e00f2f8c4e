use elegance_core::{Cart, CartItem, CartStore, CartStoreError, Email, ProductId};
use rust_decimal::Decimal;
use sqlx::{PgPool, Row, postgres::PgRow, types::Json};

/// Cart documents in the `carts` table, one row per owner email.
/// Line items live in a JSONB array.
#[derive(Clone)]
pub struct PostgresCartStore {
    pool: PgPool,
}

impl PostgresCartStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresCartStore { pool }
    }
}

#[async_trait::async_trait]
impl CartStore for PostgresCartStore {
    #[tracing::instrument(name = "Retrieving cart from PostgreSQL", skip_all)]
    async fn get_cart(&self, email: &Email) -> Result<Cart, CartStoreError> {
        let row = sqlx::query("SELECT email, items, item_count, total FROM carts WHERE email = $1")
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CartStoreError::UnexpectedError(e.to_string()))?
            .ok_or(CartStoreError::CartNotFound)?;

        cart_from_row(&row)
    }

    #[tracing::instrument(name = "Saving cart to PostgreSQL", skip_all)]
    async fn save_cart(&self, cart: &Cart) -> Result<(), CartStoreError> {
        let item_count = i64::try_from(cart.item_count)
            .map_err(|e| CartStoreError::UnexpectedError(e.to_string()))?;

        sqlx::query(
            r#"
                INSERT INTO carts (email, items, item_count, total)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (email) DO UPDATE
                SET items = EXCLUDED.items,
                    item_count = EXCLUDED.item_count,
                    total = EXCLUDED.total
            "#,
        )
        .bind(cart.email.as_str())
        .bind(Json(&cart.items))
        .bind(item_count)
        .bind(cart.total)
        .execute(&self.pool)
        .await
        .map_err(|e| CartStoreError::UnexpectedError(e.to_string()))?;

        Ok(())
    }

    #[tracing::instrument(name = "Pushing cart line item in PostgreSQL", skip_all)]
    async fn push_line_item(
        &self,
        email: &Email,
        item: CartItem,
        unit_price: Decimal,
    ) -> Result<Cart, CartStoreError> {
        let line_total = elegance_core::line_total(unit_price, item.quantity)?;

        let row = sqlx::query(
            r#"
                INSERT INTO carts (email, items, item_count, total)
                VALUES ($1, jsonb_build_array($2::jsonb), 1, $3)
                ON CONFLICT (email) DO UPDATE
                SET items = carts.items || EXCLUDED.items,
                    item_count = carts.item_count + 1,
                    total = carts.total + EXCLUDED.total
                RETURNING email, items, item_count, total
            "#,
        )
        .bind(email.as_str())
        .bind(Json(&item))
        .bind(line_total)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CartStoreError::UnexpectedError(e.to_string()))?;

        cart_from_row(&row)
    }

    #[tracing::instrument(name = "Pulling cart line items in PostgreSQL", skip_all)]
    async fn pull_line_items(
        &self,
        email: &Email,
        product_id: &ProductId,
        unit_price: Decimal,
    ) -> Result<Cart, CartStoreError> {
        // Expressions on the right-hand side all see the row as it was before the update.
        let row = sqlx::query(
            r#"
                UPDATE carts AS c
                SET items = COALESCE(
                        (SELECT jsonb_agg(line ORDER BY position)
                         FROM jsonb_array_elements(c.items) WITH ORDINALITY AS t(line, position)
                         WHERE line->>'productId' <> $2),
                        '[]'::jsonb),
                    total = c.total - $3 * COALESCE(
                        (SELECT (line->>'quantity')::numeric
                         FROM jsonb_array_elements(c.items) WITH ORDINALITY AS t(line, position)
                         WHERE line->>'productId' = $2
                         ORDER BY position
                         LIMIT 1),
                        0),
                    item_count = GREATEST(c.item_count - 1, 0)
                WHERE c.email = $1
                RETURNING c.email, c.items, c.item_count, c.total
            "#,
        )
        .bind(email.as_str())
        .bind(product_id.as_str())
        .bind(unit_price)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CartStoreError::UnexpectedError(e.to_string()))?
        .ok_or(CartStoreError::CartNotFound)?;

        cart_from_row(&row)
    }
}

fn cart_from_row(row: &PgRow) -> Result<Cart, CartStoreError> {
    let unexpected = |e: sqlx::Error| CartStoreError::UnexpectedError(e.to_string());

    let email: String = row.try_get("email").map_err(unexpected)?;
    let email =
        Email::try_from(email).map_err(|e| CartStoreError::UnexpectedError(e.to_string()))?;
    let Json(items): Json<Vec<CartItem>> = row.try_get("items").map_err(unexpected)?;
    let item_count: i64 = row.try_get("item_count").map_err(unexpected)?;

    Ok(Cart {
        email,
        items,
        item_count: u64::try_from(item_count)
            .map_err(|e| CartStoreError::UnexpectedError(e.to_string()))?,
        total: row.try_get("total").map_err(unexpected)?,
    })
}
