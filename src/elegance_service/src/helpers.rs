use std::sync::Arc;

use elegance_adapters::{
    config::{ServiceSettings, StorageBackend},
    credentials::{Argon2PasswordHasher, JwtTokenService},
    http::AppState,
    persistence::{
        CatalogSeedError, HashMapCartStore, HashMapProductStore, HashMapUserStore,
        PostgresCartStore, PostgresProductStore, PostgresUserStore,
    },
};
use elegance_core::{CartStore, PasswordHasherError, ProductStore, UserStore};
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database.url must be set for the postgres storage backend")]
    MissingDatabaseUrl,
    #[error("Failed to connect to PostgreSQL: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("{0}")]
    Catalog(#[from] CatalogSeedError),
    #[error("Invalid password hashing parameters: {0}")]
    PasswordHashing(#[from] PasswordHasherError),
}

/// Builds the shared router state for the configured storage backend.
pub async fn build_app_state(settings: &ServiceSettings) -> Result<AppState, StartupError> {
    let hashing = &settings.auth.password_hashing;
    let password_hasher =
        Argon2PasswordHasher::new(hashing.memory_kib, hashing.iterations, hashing.parallelism)?;
    let token_service = JwtTokenService::new(
        settings.auth.jwt.secret.clone(),
        settings.auth.jwt.time_to_live_seconds,
    );

    let (user_store, product_store, cart_store) = match settings.storage.backend {
        StorageBackend::Memory => {
            let catalog = match &settings.storage.product_seed {
                Some(path) => HashMapProductStore::from_json_file(path)?,
                None => {
                    ::tracing::warn!("No product seed configured; the catalog is empty");
                    HashMapProductStore::default()
                }
            };
            let user_store: Arc<dyn UserStore> = Arc::new(HashMapUserStore::new());
            let product_store: Arc<dyn ProductStore> = Arc::new(catalog);
            let cart_store: Arc<dyn CartStore> = Arc::new(HashMapCartStore::new());
            (user_store, product_store, cart_store)
        }
        StorageBackend::Postgres => {
            let pg_pool = configure_postgresql(settings).await?;
            let user_store: Arc<dyn UserStore> = Arc::new(PostgresUserStore::new(pg_pool.clone()));
            let product_store: Arc<dyn ProductStore> =
                Arc::new(PostgresProductStore::new(pg_pool.clone()));
            let cart_store: Arc<dyn CartStore> = Arc::new(PostgresCartStore::new(pg_pool));
            (user_store, product_store, cart_store)
        }
    };

    Ok(AppState::new(
        user_store,
        product_store,
        cart_store,
        Arc::new(password_hasher),
        Arc::new(token_service),
    )
    .with_cart_update_strategy(settings.cart.update_strategy))
}

/// Connects to PostgreSQL and runs all pending migrations.
pub async fn configure_postgresql(settings: &ServiceSettings) -> Result<PgPool, StartupError> {
    let url = settings
        .database
        .url
        .as_ref()
        .ok_or(StartupError::MissingDatabaseUrl)?;

    let pg_pool = get_postgres_pool(url.expose_secret(), settings.database.max_connections).await?;
    run_migrations(&pg_pool).await?;

    Ok(pg_pool)
}

pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}

pub async fn run_migrations(pg_pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pg_pool).await
}
