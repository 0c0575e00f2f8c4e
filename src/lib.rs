//! # Elegance - storefront account, favorites and cart backend
//!
//! Facade crate re-exporting the public APIs of the Elegance components.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `User`, `Product`, `Cart`, etc.
//! - **Ports**: `UserStore`, `ProductStore`, `CartStore`, `PasswordHasher`, `TokenService`
//! - **Use cases**: `SignupUseCase`, `AddToCartUseCase`, etc.
//! - **Adapters**: in-memory and PostgreSQL stores, Argon2 hashing, JWT tokens, HTTP routes
//! - **Service**: `EleganceService`, the axum application

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use elegance_core::*;
}

pub use elegance_core::{
    Cart, CartError, CartItem, Email, NewUser, Password, PasswordHash, Product, ProductError,
    ProductId, Quantity, Role, User, UserError, UserId,
};

// ============================================================================
// Ports
// ============================================================================

/// Store and service trait definitions
pub mod ports {
    pub use elegance_core::{
        CartStore, CartStoreError, Claims, PasswordHasher, PasswordHasherError, ProductStore,
        ProductStoreError, TokenService, TokenServiceError, UserStore, UserStoreError,
    };
}

pub use ports::{CartStore, PasswordHasher, ProductStore, TokenService, UserStore};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use elegance_application::*;
}

pub use elegance_application::{
    AddFavoriteUseCase, AddToCartUseCase, CartUpdateStrategy, ChangePasswordUseCase,
    ListFavoritesUseCase, LoginUseCase, RemoveFavoriteUseCase, RemoveFromCartUseCase,
    SignupUseCase, UpdateAddressUseCase, UpdateNameUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers, extractors and the response envelope
    pub mod http {
        pub use elegance_adapters::http::*;
    }

    /// Store implementations
    pub mod persistence {
        pub use elegance_adapters::persistence::*;
    }

    /// Password hashing and bearer tokens
    pub mod credentials {
        pub use elegance_adapters::credentials::*;
    }

    /// Configuration
    pub mod config {
        pub use elegance_adapters::config::*;
    }
}

pub use elegance_adapters::{
    config::ServiceSettings,
    credentials::{Argon2PasswordHasher, JwtTokenService},
    http::{ApiError, AppState},
    persistence::{
        HashMapCartStore, HashMapProductStore, HashMapUserStore, PostgresCartStore,
        PostgresProductStore, PostgresUserStore,
    },
};

// ============================================================================
// Service (Main Entry Point)
// ============================================================================

pub use elegance_service::{
    EleganceService,
    helpers::{StartupError, build_app_state, configure_postgresql, get_postgres_pool},
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the store traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
