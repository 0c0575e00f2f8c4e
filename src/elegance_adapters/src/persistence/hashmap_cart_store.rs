use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use elegance_core::{Cart, CartItem, CartStore, CartStoreError, Email, ProductId};
use rust_decimal::Decimal;

/// In-memory cart documents. The atomic operations hold the write lock for the
/// whole mutation; `get_cart` followed by `save_cart` does not.
#[derive(Default, Clone)]
pub struct HashMapCartStore {
    carts: Arc<RwLock<HashMap<Email, Cart>>>,
}

impl HashMapCartStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CartStore for HashMapCartStore {
    async fn get_cart(&self, email: &Email) -> Result<Cart, CartStoreError> {
        let carts = self.carts.read().await;
        carts
            .get(email)
            .cloned()
            .ok_or(CartStoreError::CartNotFound)
    }

    async fn save_cart(&self, cart: &Cart) -> Result<(), CartStoreError> {
        let mut carts = self.carts.write().await;
        carts.insert(cart.email.clone(), cart.clone());
        Ok(())
    }

    async fn push_line_item(
        &self,
        email: &Email,
        item: CartItem,
        unit_price: Decimal,
    ) -> Result<Cart, CartStoreError> {
        let mut carts = self.carts.write().await;
        let cart = match carts.get_mut(email) {
            Some(cart) => {
                cart.add_line(item, unit_price)?;
                cart.clone()
            }
            None => {
                let cart = Cart::open(email.clone(), item, unit_price)?;
                carts.insert(email.clone(), cart.clone());
                cart
            }
        };
        Ok(cart)
    }

    async fn pull_line_items(
        &self,
        email: &Email,
        product_id: &ProductId,
        unit_price: Decimal,
    ) -> Result<Cart, CartStoreError> {
        let mut carts = self.carts.write().await;
        let cart = carts.get_mut(email).ok_or(CartStoreError::CartNotFound)?;
        cart.remove_product(product_id, unit_price)?;
        Ok(cart.clone())
    }
}
