use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn favorites_keep_duplicates_and_remove_all_occurrences() {
    let app = TestApp::new().await;
    let (email, token) = app.signed_up_user().await;
    let favorite = json!({ "email": email, "productId": "p" });

    for _ in 0..2 {
        let response = app.post("/favorite", &favorite, Some(&token)).await;
        assert_eq!(response.status().as_u16(), 200);
    }

    let body: Value = app
        .post("/favorite/list", &json!({ "email": email }), Some(&token))
        .await
        .json()
        .await
        .unwrap();
    let products = body["data"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["id"], "p");
    assert_eq!(products[0]["name"], "Product p");
    assert_eq!(products[0]["price"], "10");

    let response = app.post("/favorite/remove", &favorite, Some(&token)).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = app
        .post("/favorite/list", &json!({ "email": email }), Some(&token))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn unknown_favorite_is_listed_as_a_placeholder() {
    let app = TestApp::new().await;
    let (email, token) = app.signed_up_user().await;

    app.post(
        "/favorite",
        &json!({ "email": email, "productId": "discontinued" }),
        Some(&token),
    )
    .await;

    let body: Value = app
        .post("/favorite/list", &json!({ "email": email }), Some(&token))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"][0]["id"], "discontinued");
    assert_eq!(body["data"][0]["name"], "");
}

#[tokio::test]
async fn favorites_require_a_valid_token() {
    let app = TestApp::new().await;
    let (email, _) = app.signed_up_user().await;

    let response = app
        .post(
            "/favorite",
            &json!({ "email": email, "productId": "p" }),
            Some("not-a-token"),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], true);
}
