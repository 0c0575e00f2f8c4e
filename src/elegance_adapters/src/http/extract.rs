use axum::{
    extract::{FromRequest, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use elegance_core::Claims;

use super::{app_state::AppState, routes::ApiError};

/// `axum::Json` with rejections reported through the response envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Identity from a verified token in the `Authorization` header.
///
/// The header carries the raw token; a `Bearer ` prefix is tolerated.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Claims);

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(ApiError::missing_token)?;
        let token = header
            .to_str()
            .map_err(|_| ApiError::Auth("Invalid token".to_owned()))?
            .trim();
        let token = token.strip_prefix("Bearer ").unwrap_or(token);
        if token.is_empty() {
            return Err(ApiError::missing_token());
        }

        let claims = state.token_service.verify_token(token)?;
        Ok(Self(claims))
    }
}
