use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use elegance_core::{ProductId, User};
use serde::Serialize;

pub const SUCCESS_MESSAGE: &str = "success";

/// Envelope wrapped around every response body.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize = ()> {
    pub error: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl ApiResponse {
    pub fn success() -> Self {
        Self {
            error: false,
            message: SUCCESS_MESSAGE.to_owned(),
            data: None,
            token: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            data: None,
            token: None,
        }
    }

    pub fn with_data<T: Serialize>(self, data: T) -> ApiResponse<T> {
        ApiResponse {
            error: self.error,
            message: self.message,
            data: Some(data),
            token: self.token,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// The public view of a user document. The password hash is never part of it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub user_type: String,
    pub is_blocked: bool,
    pub address: String,
    pub favourite: Vec<ProductId>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_owned(),
            name: user.name,
            phone: user.phone,
            user_type: user.role.as_str().to_owned(),
            is_blocked: user.is_blocked,
            address: user.address,
            favourite: user.favorites,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
