use serde_json::{Value, json};

use crate::helpers::{TestApp, get_random_email};

async fn login_status(app: &TestApp, email: &str, password: &str) -> u16 {
    app.post(
        "/login",
        &json!({ "email": email, "password": password }),
        None,
    )
    .await
    .status()
    .as_u16()
}

#[tokio::test]
async fn profile_routes_require_a_token() {
    let app = TestApp::new().await;
    let (email, _) = app.signed_up_user().await;

    for (path, body) in [
        ("/address", json!({ "email": email, "address": "1 Main St" })),
        ("/name", json!({ "email": email, "name": "New" })),
        (
            "/password",
            json!({ "email": email, "oldPassword": "password123", "newPassword": "x" }),
        ),
    ] {
        let response = app.post(path, &body, None).await;
        assert_eq!(response.status().as_u16(), 400, "Failed for {path}");

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["message"], "Token is required");
    }
}

#[tokio::test]
async fn address_and_name_updates_are_visible_on_login() {
    let app = TestApp::new().await;
    let (email, token) = app.signed_up_user().await;

    let response = app
        .post(
            "/address",
            &json!({ "email": email, "address": "1 Main St" }),
            Some(&token),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app
        .post("/name", &json!({ "email": email, "name": "Renamed" }), Some(&token))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = app
        .post(
            "/login",
            &json!({ "email": email, "password": "password123" }),
            None,
        )
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["address"], "1 Main St");
    assert_eq!(body["data"]["name"], "Renamed");
}

#[tokio::test]
async fn empty_name_is_rejected() {
    let app = TestApp::new().await;
    let (email, token) = app.signed_up_user().await;

    let response = app
        .post("/name", &json!({ "email": email, "name": "" }), Some(&token))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "name can't be empty");
}

#[tokio::test]
async fn address_for_unknown_email_is_not_found() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_up_user().await;

    let response = app
        .post(
            "/address",
            &json!({ "email": get_random_email(), "address": "1 Main St" }),
            Some(&token),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "email not found");
}

#[tokio::test]
async fn password_change_replaces_the_credential() {
    let app = TestApp::new().await;
    let (email, token) = app.signed_up_user().await;

    let response = app
        .post(
            "/password",
            &json!({
                "email": email,
                "oldPassword": "password123",
                "newPassword": "new-password",
            }),
            Some(&token),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);

    assert_eq!(login_status(&app, &email, "password123").await, 400);
    assert_eq!(login_status(&app, &email, "new-password").await, 200);
}

#[tokio::test]
async fn password_change_with_wrong_old_password_is_rejected() {
    let app = TestApp::new().await;
    let (email, token) = app.signed_up_user().await;

    let response = app
        .post(
            "/password",
            &json!({
                "email": email,
                "oldPassword": "not-it",
                "newPassword": "new-password",
            }),
            Some(&token),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "old password not matched");
    assert_eq!(login_status(&app, &email, "password123").await, 200);
}

#[tokio::test]
async fn empty_new_password_is_rejected() {
    let app = TestApp::new().await;
    let (email, token) = app.signed_up_user().await;

    let response = app
        .post(
            "/password",
            &json!({ "email": email, "oldPassword": "password123", "newPassword": "" }),
            Some(&token),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "newPassword can't be empty");
}
