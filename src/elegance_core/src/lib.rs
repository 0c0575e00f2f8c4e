//! Domain types and ports for the Elegance storefront backend.

pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    cart::{Cart, CartError, CartItem, Quantity, line_total},
    email::Email,
    password::{Password, PasswordHash},
    product::{Product, ProductError, ProductId},
    user::{NewUser, Role, User, UserError, UserId, non_empty},
};

pub use ports::{
    repositories::{
        CartStore, CartStoreError, ProductStore, ProductStoreError, UserStore, UserStoreError,
    },
    services::{Claims, PasswordHasher, PasswordHasherError, TokenService, TokenServiceError},
};
