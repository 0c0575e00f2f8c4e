pub mod hashmap_cart_store;
pub mod hashmap_product_store;
pub mod hashmap_user_store;
pub mod postgres_cart_store;
pub mod postgres_product_store;
pub mod postgres_user_store;

pub use hashmap_cart_store::HashMapCartStore;
pub use hashmap_product_store::{CatalogSeedError, HashMapProductStore};
pub use hashmap_user_store::HashMapUserStore;
pub use postgres_cart_store::PostgresCartStore;
pub use postgres_product_store::PostgresProductStore;
pub use postgres_user_store::PostgresUserStore;
