use std::sync::Arc;

use elegance_adapters::{
    config::test,
    credentials::{Argon2PasswordHasher, JwtTokenService},
    http::AppState,
    persistence::{HashMapCartStore, HashMapProductStore, HashMapUserStore},
};
use elegance_application::CartUpdateStrategy;
use elegance_core::{Product, ProductId};
use elegance_service::EleganceService;
use fake::{Fake, faker::internet::en::SafeEmail};
use rust_decimal::Decimal;
use secrecy::Secret;
use serde_json::{Value, json};

pub const BASE_PATH: &str = "/v1/ecommerce";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_strategy(CartUpdateStrategy::ReadModifyWrite).await
    }

    pub async fn with_strategy(strategy: CartUpdateStrategy) -> Self {
        let catalog = HashMapProductStore::new([
            product("p", 10),
            product("q", 5),
            Product::new(
                ProductId::from("max"),
                "Priceless",
                Decimal::MAX,
                json!({ "sku": "max" }),
            )
            .expect("valid product"),
        ]);
        let state = AppState::new(
            Arc::new(HashMapUserStore::new()),
            Arc::new(catalog),
            Arc::new(HashMapCartStore::new()),
            Arc::new(Argon2PasswordHasher::new(1024, 1, 1).expect("Failed to build hasher")),
            Arc::new(JwtTokenService::new(
                Secret::new("test-secret".to_owned()),
                600,
            )),
        )
        .with_cart_update_strategy(strategy);

        let router = EleganceService::new(state).as_nested_router(BASE_PATH, None);
        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!(
            "http://{}",
            listener.local_addr().expect("Failed to read local address")
        );

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Failed to run test server");
        });

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.address, BASE_PATH, path)
    }

    pub async fn post(&self, path: &str, body: &Value, token: Option<&str>) -> reqwest::Response {
        let mut request = self.http_client.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.header("Authorization", token);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn signup(&self, body: &Value) -> reqwest::Response {
        self.post("/signup", body, None).await
    }

    /// Registers a fresh user and returns its email and token.
    pub async fn signed_up_user(&self) -> (String, String) {
        let email = get_random_email();
        let response = self.signup(&signup_body(&email, "password123")).await;
        let body: Value = response.json().await.expect("Failed to parse signup body");
        let token = body["token"]
            .as_str()
            .expect("signup response has a token")
            .to_owned();
        (email, token)
    }
}

pub fn product(id: &str, price: i64) -> Product {
    Product::new(
        ProductId::from(id),
        format!("Product {id}"),
        Decimal::from(price),
        json!({ "sku": id }),
    )
    .expect("valid product")
}

pub fn get_random_email() -> String {
    SafeEmail().fake()
}

pub fn signup_body(email: &str, password: &str) -> Value {
    json!({
        "email": email,
        "name": "Test Shopper",
        "phone": "555-0100",
        "password": password,
    })
}
