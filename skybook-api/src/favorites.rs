use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub ids: Vec<String>,
    pub favorite: bool,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/favorites", get(list_favorites))
        .route("/v1/favorites/{id}/toggle", post(toggle_favorite))
}

async fn list_favorites(State(state): State<AppState>) -> Json<FavoritesResponse> {
    let session = state.session.read().await;
    Json(FavoritesResponse {
        ids: session.favorites().ids.clone(),
    })
}

async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ToggleResponse> {
    let mut session = state.session.write().await;
    let favorite = session.toggle_favorite(&id).await;
    Json(ToggleResponse {
        ids: session.favorites().ids.clone(),
        favorite,
    })
}
