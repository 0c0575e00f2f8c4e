pub mod env {
    pub const ENV_PREFIX: &str = "ELEGANCE";
    pub const ENV_SEPARATOR: &str = "__";

    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const API_VERSION_ENV_VAR: &str = "API_VERSION";
    pub const PORT_ENV_VAR: &str = "PORT";
}

pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 3000;
    pub const API_VERSION: &str = "/v1";
    pub const DATABASE_MAX_CONNECTIONS: u32 = 5;
    pub const TOKEN_TTL_SECONDS: i64 = 7200;

    pub mod password_hashing {
        pub const MEMORY_KIB: u32 = 19456;
        pub const ITERATIONS: u32 = 2;
        pub const PARALLELISM: u32 = 1;
    }
}

/// Mounted under the API version, e.g. `/v1/ecommerce`.
pub const SERVICE_PATH: &str = "/ecommerce";

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
