use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;
use skybook_core::cart::CartState;
use skybook_shared::CartItem;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub total_price: f64,
    pub count_by_flight: BTreeMap<String, usize>,
}

impl From<&CartState> for CartResponse {
    fn from(cart: &CartState) -> Self {
        Self {
            items: cart.items.clone(),
            total_price: cart.total_price(),
            count_by_flight: cart.picked_count_by_flight(),
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/cart", get(get_cart).delete(clear_cart))
        .route("/v1/cart/{flight_id}/{seat}", delete(remove_item))
}

async fn get_cart(State(state): State<AppState>) -> Json<CartResponse> {
    let session = state.session.read().await;
    Json(CartResponse::from(session.cart()))
}

async fn clear_cart(State(state): State<AppState>) -> Json<CartResponse> {
    let mut session = state.session.write().await;
    session.clear_cart().await;
    Json(CartResponse::from(session.cart()))
}

/// DELETE /v1/cart/{flight_id}/{seat}
/// Removing a seat that is not in the cart leaves it unchanged
async fn remove_item(
    State(state): State<AppState>,
    Path((flight_id, seat)): Path<(String, String)>,
) -> Json<CartResponse> {
    let mut session = state.session.write().await;
    if session.remove_from_cart(&flight_id, &seat).await {
        tracing::info!("Seat {} on flight {} removed from cart", seat, flight_id);
    }
    Json(CartResponse::from(session.cart()))
}
