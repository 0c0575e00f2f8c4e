use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn logout_always_succeeds() {
    let app = TestApp::new().await;

    let response = app.post("/logout", &json!({}), None).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": false, "message": "success" }));
}

#[tokio::test]
async fn health_check_responds() {
    let app = TestApp::new().await;

    let response = app.http_client.get(app.url("/health")).send().await.unwrap();

    assert_eq!(response.status().as_u16(), 200);
}
