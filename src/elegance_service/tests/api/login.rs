use serde_json::{Value, json};

use crate::helpers::{TestApp, get_random_email, signup_body};

#[tokio::test]
async fn should_return_user_and_token_for_correct_credentials() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.signup(&signup_body(&email, "password123")).await;

    let response = app
        .post(
            "/login",
            &json!({ "email": email, "password": "password123" }),
            None,
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["email"], email.as_str());
    assert!(body["token"].is_string());
}

#[tokio::test]
async fn should_return_400_for_wrong_password() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.signup(&signup_body(&email, "password123")).await;

    let response = app
        .post(
            "/login",
            &json!({ "email": email, "password": "wrong-password" }),
            None,
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "password not matched");
}

#[tokio::test]
async fn should_return_400_for_unknown_email() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/login",
            &json!({ "email": get_random_email(), "password": "password123" }),
            None,
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "email not found");
}
