use axum::{extract::State, response::IntoResponse};
use elegance_application::SignupUseCase;
use elegance_core::NewUser;
use secrecy::Secret;
use serde::Deserialize;

use super::error::ApiError;
use crate::http::{
    app_state::AppState,
    extract::ApiJson,
    response::{ApiResponse, UserProfile},
};

#[derive(Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
}

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new_user = NewUser::parse(
        Secret::new(request.email),
        request.name,
        request.phone,
        Secret::new(request.password),
    )?;

    let use_case = SignupUseCase::new(
        state.user_store.as_ref(),
        state.password_hasher.as_ref(),
        state.token_service.as_ref(),
    );
    let session = use_case.execute(new_user).await?;

    Ok(ApiResponse::success()
        .with_data(UserProfile::from(session.user))
        .with_token(session.token))
}
