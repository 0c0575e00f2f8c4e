use axum::{extract::State, response::IntoResponse};
use elegance_application::{ChangePasswordUseCase, UpdateAddressUseCase, UpdateNameUseCase};
use elegance_core::{Email, Password, non_empty};
use secrecy::Secret;
use serde::Deserialize;

use super::error::ApiError;
use crate::http::{
    app_state::AppState,
    extract::{ApiJson, Authenticated},
    response::ApiResponse,
};

#[derive(Deserialize)]
pub struct AddressRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Deserialize)]
pub struct NameRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub old_password: String,
    #[serde(default)]
    pub new_password: String,
}

#[tracing::instrument(name = "Update address", skip_all)]
pub async fn update_address(
    State(state): State<AppState>,
    _: Authenticated,
    ApiJson(request): ApiJson<AddressRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = Email::try_from(request.email)?;

    UpdateAddressUseCase::new(state.user_store.as_ref())
        .execute(email, request.address)
        .await?;

    Ok(ApiResponse::success())
}

#[tracing::instrument(name = "Update name", skip_all)]
pub async fn update_name(
    State(state): State<AppState>,
    _: Authenticated,
    ApiJson(request): ApiJson<NameRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = Email::try_from(request.email)?;
    let name = non_empty(request.name, "name")?;

    UpdateNameUseCase::new(state.user_store.as_ref())
        .execute(email, name)
        .await?;

    Ok(ApiResponse::success())
}

#[tracing::instrument(name = "Change password", skip_all)]
pub async fn change_password(
    State(state): State<AppState>,
    _: Authenticated,
    ApiJson(request): ApiJson<ChangePasswordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = Email::try_from(request.email)?;
    let old_password = Password::parse_field(Secret::new(request.old_password), "oldPassword")?;
    let new_password = Password::parse_field(Secret::new(request.new_password), "newPassword")?;

    ChangePasswordUseCase::new(state.user_store.as_ref(), state.password_hasher.as_ref())
        .execute(email, old_password, new_password)
        .await?;

    Ok(ApiResponse::success())
}
