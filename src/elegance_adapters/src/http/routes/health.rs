use axum::response::IntoResponse;

use crate::http::response::ApiResponse;

pub async fn health() -> impl IntoResponse {
    ApiResponse::success()
}
