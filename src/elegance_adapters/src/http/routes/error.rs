use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use elegance_application::{
    CartUseCaseError, ChangePasswordError, LoginError, SignupError,
};
use elegance_core::{
    CartError, CartStoreError, PasswordHasherError, ProductStoreError, TokenServiceError,
    UserError, UserStoreError,
};
use thiserror::Error;

use crate::http::response::ApiResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    Token(String),

    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn missing_token() -> Self {
        ApiError::Auth("Token is required".to_owned())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation(_)
            | ApiError::Conflict(_)
            | ApiError::NotFound(_)
            | ApiError::Auth(_)
            | ApiError::Unexpected(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        match &self {
            ApiError::Token(_) | ApiError::Unexpected(_) => {
                tracing::error!(error = %self, "request failed")
            }
            _ => tracing::info!(error = %self, "request rejected"),
        }

        (status_code, Json(ApiResponse::failure(self.to_string()))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<UserError> for ApiError {
    fn from(error: UserError) -> Self {
        ApiError::Validation(error.to_string())
    }
}

impl From<CartError> for ApiError {
    fn from(error: CartError) -> Self {
        ApiError::Validation(error.to_string())
    }
}

impl From<UserStoreError> for ApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => ApiError::Conflict(error.to_string()),
            UserStoreError::UserNotFound => ApiError::NotFound(error.to_string()),
            UserStoreError::UnexpectedError(e) => ApiError::Unexpected(e),
        }
    }
}

impl From<ProductStoreError> for ApiError {
    fn from(error: ProductStoreError) -> Self {
        match error {
            ProductStoreError::ProductNotFound => ApiError::NotFound(error.to_string()),
            ProductStoreError::UnexpectedError(e) => ApiError::Unexpected(e),
        }
    }
}

impl From<CartStoreError> for ApiError {
    fn from(error: CartStoreError) -> Self {
        match error {
            CartStoreError::CartNotFound => ApiError::NotFound(error.to_string()),
            CartStoreError::InvalidCart(e) => e.into(),
            CartStoreError::UnexpectedError(e) => ApiError::Unexpected(e),
        }
    }
}

impl From<PasswordHasherError> for ApiError {
    fn from(error: PasswordHasherError) -> Self {
        ApiError::Unexpected(error.to_string())
    }
}

impl From<TokenServiceError> for ApiError {
    fn from(error: TokenServiceError) -> Self {
        match error {
            TokenServiceError::SigningFailed(_) => ApiError::Token(error.to_string()),
            TokenServiceError::InvalidToken(_) | TokenServiceError::Expired => {
                ApiError::Auth(error.to_string())
            }
        }
    }
}

impl From<SignupError> for ApiError {
    fn from(error: SignupError) -> Self {
        match error {
            SignupError::UserStoreError(e) => e.into(),
            SignupError::PasswordHasherError(e) => e.into(),
            SignupError::TokenServiceError(e) => e.into(),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::UserStoreError(e) => e.into(),
            LoginError::IncorrectPassword => ApiError::Auth(error.to_string()),
            LoginError::PasswordHasherError(e) => e.into(),
            LoginError::TokenServiceError(e) => e.into(),
        }
    }
}

impl From<ChangePasswordError> for ApiError {
    fn from(error: ChangePasswordError) -> Self {
        match error {
            ChangePasswordError::UserStoreError(e) => e.into(),
            ChangePasswordError::IncorrectPassword => ApiError::Auth(error.to_string()),
            ChangePasswordError::PasswordHasherError(e) => e.into(),
        }
    }
}

impl From<CartUseCaseError> for ApiError {
    fn from(error: CartUseCaseError) -> Self {
        match error {
            CartUseCaseError::ProductStoreError(e) => e.into(),
            CartUseCaseError::CartStoreError(e) => e.into(),
            CartUseCaseError::CartError(e) => e.into(),
        }
    }
}
