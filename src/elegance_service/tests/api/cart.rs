use elegance_application::CartUpdateStrategy;
use serde_json::{Value, json};

use crate::helpers::{TestApp, get_random_email};

async fn cart_data(response: reqwest::Response) -> Value {
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    body["data"].clone()
}

#[tokio::test]
async fn add_and_remove_keep_running_totals() {
    for strategy in [CartUpdateStrategy::ReadModifyWrite, CartUpdateStrategy::Atomic] {
        let app = TestApp::with_strategy(strategy).await;
        let email = get_random_email();

        let cart = cart_data(
            app.post(
                "/cart",
                &json!({ "email": email, "productId": "p", "quantity": 3 }),
                None,
            )
            .await,
        )
        .await;
        assert_eq!(cart["itemCount"], 1, "{strategy:?}");
        assert_eq!(cart["total"], "30", "{strategy:?}");

        let cart = cart_data(
            app.post(
                "/cart",
                &json!({ "email": email, "productId": "q", "quantity": 2 }),
                None,
            )
            .await,
        )
        .await;
        assert_eq!(cart["itemCount"], 2, "{strategy:?}");
        assert_eq!(cart["total"], "40", "{strategy:?}");

        let cart = cart_data(
            app.post("/cart/remove", &json!({ "email": email, "productId": "p" }), None)
                .await,
        )
        .await;
        assert_eq!(cart["itemCount"], 1, "{strategy:?}");
        assert_eq!(cart["total"], "10", "{strategy:?}");
        assert_eq!(
            cart["items"],
            json!([{ "productId": "q", "quantity": 2 }]),
            "{strategy:?}"
        );
    }
}

#[tokio::test]
async fn unknown_product_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/cart",
            &json!({ "email": get_random_email(), "productId": "nope", "quantity": 1 }),
            None,
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "product not found");
}

#[tokio::test]
async fn removing_from_a_missing_cart_is_not_found() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/cart/remove",
            &json!({ "email": get_random_email(), "productId": "p" }),
            None,
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "cart not found");
}

#[tokio::test]
async fn zero_quantity_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/cart",
            &json!({ "email": get_random_email(), "productId": "p", "quantity": 0 }),
            None,
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn total_overflow_is_reported_in_the_error_envelope() {
    for strategy in [CartUpdateStrategy::ReadModifyWrite, CartUpdateStrategy::Atomic] {
        let app = TestApp::with_strategy(strategy).await;
        let email = get_random_email();
        let body = json!({ "email": email, "productId": "max", "quantity": 1 });

        cart_data(app.post("/cart", &body, None).await).await;
        let response = app.post("/cart", &body, None).await;

        assert_eq!(response.status().as_u16(), 400, "{strategy:?}");
        let body: Value = response.json().await.unwrap();
        assert_eq!(
            body,
            json!({ "error": true, "message": "cart total is out of range" }),
            "{strategy:?}"
        );
    }
}
