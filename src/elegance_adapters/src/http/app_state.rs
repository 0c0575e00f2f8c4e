use std::sync::Arc;

use elegance_application::CartUpdateStrategy;
use elegance_core::{CartStore, PasswordHasher, ProductStore, TokenService, UserStore};

/// Handles shared by every route. Cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub user_store: Arc<dyn UserStore>,
    pub product_store: Arc<dyn ProductStore>,
    pub cart_store: Arc<dyn CartStore>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_service: Arc<dyn TokenService>,
    pub cart_update_strategy: CartUpdateStrategy,
}

impl AppState {
    pub fn new(
        user_store: Arc<dyn UserStore>,
        product_store: Arc<dyn ProductStore>,
        cart_store: Arc<dyn CartStore>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            user_store,
            product_store,
            cart_store,
            password_hasher,
            token_service,
            cart_update_strategy: CartUpdateStrategy::default(),
        }
    }

    pub fn with_cart_update_strategy(mut self, strategy: CartUpdateStrategy) -> Self {
        self.cart_update_strategy = strategy;
        self
    }
}
