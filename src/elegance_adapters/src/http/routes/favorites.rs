use axum::{extract::State, response::IntoResponse};
use elegance_application::{AddFavoriteUseCase, ListFavoritesUseCase, RemoveFavoriteUseCase};
use elegance_core::{Email, ProductId};
use serde::Deserialize;

use super::error::ApiError;
use crate::http::{
    app_state::AppState,
    extract::{ApiJson, Authenticated},
    response::ApiResponse,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub product_id: String,
}

#[derive(Deserialize)]
pub struct ListFavoritesRequest {
    #[serde(default)]
    pub email: String,
}

#[tracing::instrument(name = "Add favorite", skip_all)]
pub async fn add_favorite(
    State(state): State<AppState>,
    _: Authenticated,
    ApiJson(request): ApiJson<FavoriteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = Email::try_from(request.email)?;
    let product_id = ProductId::parse(request.product_id)?;

    AddFavoriteUseCase::new(state.user_store.as_ref())
        .execute(email, product_id)
        .await?;

    Ok(ApiResponse::success())
}

#[tracing::instrument(name = "Remove favorite", skip_all)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    _: Authenticated,
    ApiJson(request): ApiJson<FavoriteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = Email::try_from(request.email)?;
    let product_id = ProductId::parse(request.product_id)?;

    RemoveFavoriteUseCase::new(state.user_store.as_ref())
        .execute(email, product_id)
        .await?;

    Ok(ApiResponse::success())
}

#[tracing::instrument(name = "List favorites", skip_all)]
pub async fn list_favorites(
    State(state): State<AppState>,
    _: Authenticated,
    ApiJson(request): ApiJson<ListFavoritesRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = Email::try_from(request.email)?;

    let products =
        ListFavoritesUseCase::new(state.user_store.as_ref(), state.product_store.as_ref())
            .execute(email)
            .await?;

    Ok(ApiResponse::success().with_data(products))
}
