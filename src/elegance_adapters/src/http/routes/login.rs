use axum::{extract::State, response::IntoResponse};
use elegance_application::LoginUseCase;
use elegance_core::{Email, Password};
use secrecy::Secret;
use serde::Deserialize;

use super::error::ApiError;
use crate::http::{
    app_state::AppState,
    extract::ApiJson,
    response::{ApiResponse, UserProfile},
};

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(Secret::new(request.password))?;

    let use_case = LoginUseCase::new(
        state.user_store.as_ref(),
        state.password_hasher.as_ref(),
        state.token_service.as_ref(),
    );
    let session = use_case.execute(email, password).await?;

    Ok(ApiResponse::success()
        .with_data(UserProfile::from(session.user))
        .with_token(session.token))
}
