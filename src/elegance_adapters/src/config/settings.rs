use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment, File};
use elegance_application::CartUpdateStrategy;
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{SERVICE_PATH, defaults, env};

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    pub cart: CartSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub api_version: String,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// `{api_version}/ecommerce`, tolerating a missing leading or a trailing slash.
    pub fn base_path(&self) -> String {
        let version = self.api_version.trim_matches('/');
        if version.is_empty() {
            SERVICE_PATH.to_owned()
        } else {
            format!("/{version}{SERVICE_PATH}")
        }
    }

    /// `None` when no origins are configured, which leaves CORS permissive.
    pub fn allowed_origins(&self) -> Option<AllowedOrigins> {
        AllowedOrigins::parse(&self.allowed_origins)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Postgres,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,
    /// JSON array of products loaded into the in-memory catalog.
    #[serde(default)]
    pub product_seed: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default)]
    pub url: Option<Secret<String>>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt: JwtSettings,
    pub password_hashing: PasswordHashingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: Secret<String>,
    pub time_to_live_seconds: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordHashingSettings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartSettings {
    #[serde(default)]
    pub update_strategy: CartUpdateStrategy,
}

impl ServiceSettings {
    /// Loads settings from defaults, `config/default.json`, `config/local.json`
    /// and the environment, in increasing order of precedence.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::builder::ConfigBuilder<config::builder::DefaultState>, ConfigError>
    {
        let hashing = "auth.password_hashing";

        Config::builder()
            .set_default("server.host", defaults::HOST)?
            .set_default("server.port", i64::from(defaults::PORT))?
            .set_default("server.api_version", defaults::API_VERSION)?
            .set_default("server.allowed_origins", Vec::<String>::new())?
            .set_default("storage.backend", "memory")?
            .set_default(
                "database.max_connections",
                i64::from(defaults::DATABASE_MAX_CONNECTIONS),
            )?
            .set_default("auth.jwt.time_to_live_seconds", defaults::TOKEN_TTL_SECONDS)?
            .set_default(
                format!("{hashing}.memory_kib"),
                i64::from(defaults::password_hashing::MEMORY_KIB),
            )?
            .set_default(
                format!("{hashing}.iterations"),
                i64::from(defaults::password_hashing::ITERATIONS),
            )?
            .set_default(
                format!("{hashing}.parallelism"),
                i64::from(defaults::password_hashing::PARALLELISM),
            )?
            .set_default("cart.update_strategy", "read_modify_write")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator(env::ENV_SEPARATOR)
                    .separator(env::ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            )
            .set_override_option("auth.jwt.secret", std::env::var(env::JWT_SECRET_ENV_VAR).ok())?
            .set_override_option("database.url", std::env::var(env::DATABASE_URL_ENV_VAR).ok())?
            .set_override_option(
                "server.api_version",
                std::env::var(env::API_VERSION_ENV_VAR).ok(),
            )?
            .set_override_option("server.port", std::env::var(env::PORT_ENV_VAR).ok())
    }
}

/// Origins accepted by the CORS layer.
#[derive(Debug, Clone)]
pub struct AllowedOrigins(Vec<HeaderValue>);

impl AllowedOrigins {
    /// Skips entries that are not valid header values; `None` if nothing remains.
    pub fn parse<S: AsRef<str>>(origins: &[S]) -> Option<Self> {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .map(|origin| origin.as_ref().trim())
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();

        if origins.is_empty() {
            None
        } else {
            Some(Self(origins))
        }
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.contains(origin)
    }
}
