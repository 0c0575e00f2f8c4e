use axum::response::IntoResponse;

use crate::http::response::ApiResponse;

/// Tokens are stateless, so there is nothing to revoke.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout() -> impl IntoResponse {
    ApiResponse::success()
}
