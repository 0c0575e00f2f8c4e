pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AllowedOrigins, AuthSettings, CartSettings, DatabaseSettings, JwtSettings,
    PasswordHashingSettings, ServerSettings, ServiceSettings, StorageBackend, StorageSettings,
};
