use axum::{extract::State, response::IntoResponse};
use elegance_application::{AddToCartUseCase, RemoveFromCartUseCase};
use elegance_core::{Email, ProductId, Quantity};
use serde::Deserialize;

use super::error::ApiError;
use crate::http::{app_state::AppState, extract::ApiJson, response::ApiResponse};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub quantity: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub product_id: String,
}

#[tracing::instrument(name = "Add to cart", skip_all)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AddToCartRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = Email::try_from(request.email)?;
    let product_id = ProductId::parse(request.product_id)?;
    let quantity = Quantity::try_from(request.quantity)?;

    let cart = AddToCartUseCase::new(
        state.product_store.as_ref(),
        state.cart_store.as_ref(),
        state.cart_update_strategy,
    )
    .execute(email, product_id, quantity)
    .await?;

    Ok(ApiResponse::success().with_data(cart))
}

#[tracing::instrument(name = "Remove from cart", skip_all)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RemoveFromCartRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = Email::try_from(request.email)?;
    let product_id = ProductId::parse(request.product_id)?;

    let cart = RemoveFromCartUseCase::new(
        state.product_store.as_ref(),
        state.cart_store.as_ref(),
        state.cart_update_strategy,
    )
    .execute(email, product_id)
    .await?;

    Ok(ApiResponse::success().with_data(cart))
}
