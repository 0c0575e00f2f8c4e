use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::{
    cart::{Cart, CartError, CartItem},
    email::Email,
    password::PasswordHash,
    product::{Product, ProductId},
    user::User,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("email already exists")]
    UserAlreadyExists,
    #[error("email not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Access to user documents, keyed by email.
///
/// Every mutation refreshes the document's `updated_at` timestamp.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError>;
    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError>;
    async fn set_address(&self, email: &Email, address: String) -> Result<(), UserStoreError>;
    async fn set_name(&self, email: &Email, name: String) -> Result<(), UserStoreError>;
    async fn set_password_hash(
        &self,
        email: &Email,
        password_hash: PasswordHash,
    ) -> Result<(), UserStoreError>;
    async fn add_favorite(
        &self,
        email: &Email,
        product_id: ProductId,
    ) -> Result<(), UserStoreError>;
    /// Removes every occurrence of `product_id` from the favorites list.
    async fn remove_favorite(
        &self,
        email: &Email,
        product_id: &ProductId,
    ) -> Result<(), UserStoreError>;
}

// ProductStore port trait and errors
#[derive(Debug, Error)]
pub enum ProductStoreError {
    #[error("product not found")]
    ProductNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for ProductStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::ProductNotFound, Self::ProductNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Read-only lookups into the product catalog.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductStoreError>;
}

// CartStore port trait and errors
#[derive(Debug, Error)]
pub enum CartStoreError {
    #[error("cart not found")]
    CartNotFound,
    #[error("{0}")]
    InvalidCart(#[from] CartError),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for CartStoreError {
    fn eq(&self, other: &Self) -> bool {
        if let (Self::InvalidCart(a), Self::InvalidCart(b)) = (self, other) {
            return a == b;
        }
        matches!(
            (self, other),
            (Self::CartNotFound, Self::CartNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Access to cart documents, one per owner email.
///
/// `get_cart` + `save_cart` give the plain read/overwrite path. `push_line_item`
/// and `pull_line_items` perform the same mutations as [`Cart::add_line`] and
/// [`Cart::remove_product`] as a single store operation.
#[async_trait]
pub trait CartStore: Send + Sync {
    async fn get_cart(&self, email: &Email) -> Result<Cart, CartStoreError>;

    /// Inserts the cart, or overwrites the whole document if one exists.
    async fn save_cart(&self, cart: &Cart) -> Result<(), CartStoreError>;

    /// Creates the cart if needed, appends `item` and adds its line total.
    async fn push_line_item(
        &self,
        email: &Email,
        item: CartItem,
        unit_price: Decimal,
    ) -> Result<Cart, CartStoreError>;

    /// Removes all lines for `product_id` from an existing cart.
    async fn pull_line_items(
        &self,
        email: &Email,
        product_id: &ProductId,
        unit_price: Decimal,
    ) -> Result<Cart, CartStoreError>;
}
