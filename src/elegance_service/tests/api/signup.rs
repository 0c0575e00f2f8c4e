use serde_json::{Value, json};

use crate::helpers::{TestApp, get_random_email, signup_body};

#[tokio::test]
async fn should_return_user_and_token_for_valid_input() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let response = app.signup(&signup_body(&email, "password123")).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], false);
    assert_eq!(body["message"], "success");
    assert_eq!(body["data"]["email"], email.as_str());
    assert_eq!(body["data"]["userType"], "user");
    assert_eq!(body["data"]["isBlocked"], false);
    assert_eq!(body["token"].as_str().unwrap().split('.').count(), 3);
}

#[tokio::test]
async fn should_never_return_the_password() {
    let app = TestApp::new().await;

    let body: Value = app
        .signup(&signup_body(&get_random_email(), "password123"))
        .await
        .json()
        .await
        .unwrap();

    let serialized = body.to_string();
    assert!(!serialized.contains("password123"));
    assert!(body["data"].get("password").is_none());
}

#[tokio::test]
async fn should_return_400_if_email_already_exists() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.signup(&signup_body(&email, "password123")).await;

    let response = app.signup(&signup_body(&email, "another-password")).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], "email already exists");
}

#[tokio::test]
async fn should_report_the_first_empty_field() {
    let app = TestApp::new().await;

    let test_cases = [
        (json!({ "name": "", "phone": "", "password": "" }), "email can't be empty"),
        (
            json!({ "email": get_random_email(), "phone": "1", "password": "x" }),
            "name can't be empty",
        ),
        (
            json!({ "email": get_random_email(), "name": "N", "password": "x" }),
            "phone can't be empty",
        ),
        (
            json!({ "email": get_random_email(), "name": "N", "phone": "1", "password": "" }),
            "password can't be empty",
        ),
    ];

    for (body, message) in test_cases {
        let response = app.signup(&body).await;
        assert_eq!(response.status().as_u16(), 400, "Failed for input: {body}");

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["message"], message);
    }
}

#[tokio::test]
async fn should_return_400_for_malformed_json() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(app.url("/signup"))
        .header("content-type", "application/json")
        .body("{\"email\":")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], true);
}
