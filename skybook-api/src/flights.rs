use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use skybook_core::datefmt::{fmt_date, fmt_duration, fmt_time};
use skybook_core::search::{self, FlightQuery};
use skybook_core::seatmap::SeatGrid;
use skybook_core::CoreError;
use skybook_shared::{CartItem, Flight};

use crate::cart::CartResponse;
use crate::error::{repo_error, AppError};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightCard {
    #[serde(flatten)]
    pub flight: Flight,
    pub departure: String,
    pub arrival: String,
    pub date: String,
    pub duration: String,
    pub favorite: bool,
    pub picked: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_after_picks: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatMapResponse {
    pub flight_id: String,
    pub rows: usize,
    pub cols: usize,
    pub total: usize,
    pub remaining: i64,
    pub all_occupied: bool,
    pub picked: Vec<String>,
    pub grid: SeatGrid,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights", get(list_flights))
        .route("/v1/flights/airlines", get(list_airlines))
        .route("/v1/flights/{id}", get(get_flight))
        .route("/v1/flights/{id}/seats", get(get_seat_map))
        .route("/v1/flights/{id}/seats/{seat}", post(pick_seat))
}

async fn find_flight(state: &AppState, id: &str) -> Result<Flight, AppError> {
    state
        .flight_repo
        .get_flight(id)
        .await
        .map_err(repo_error)?
        .ok_or_else(|| CoreError::NotFound(format!("flight {}", id)).into())
}

async fn card_for(state: &AppState, flight: Flight) -> FlightCard {
    let session = state.session.read().await;
    let picked = session.cart().picked_for(&flight.id);
    let favorite = session.favorites().contains(&flight.id);
    drop(session);

    let dep = flight.departure_time.as_deref();
    let arr = flight.arrival_time.as_deref();
    FlightCard {
        departure: fmt_time(dep),
        arrival: fmt_time(arr),
        date: fmt_date(dep),
        duration: fmt_duration(dep, arr),
        favorite,
        remaining_after_picks: flight
            .tickets
            .filter(|t| t.total.is_some())
            .map(|t| search::remaining_after_picks(&t, picked.len())),
        picked,
        flight,
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/flights?airline=&sort=
async fn list_flights(
    State(state): State<AppState>,
    Query(query): Query<FlightQuery>,
) -> Result<Json<Vec<FlightCard>>, AppError> {
    let flights = state.flight_repo.list_flights().await.map_err(repo_error)?;
    let mut cards = Vec::new();
    for flight in query.apply(&flights) {
        cards.push(card_for(&state, flight).await);
    }
    Ok(Json(cards))
}

/// GET /v1/flights/airlines
async fn list_airlines(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let flights = state.flight_repo.list_flights().await.map_err(repo_error)?;
    Ok(Json(search::airlines(&flights)))
}

/// GET /v1/flights/{id}
async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FlightCard>, AppError> {
    let flight = find_flight(&state, &id).await?;
    Ok(Json(card_for(&state, flight).await))
}

/// GET /v1/flights/{id}/seats
/// Generated occupancy with the seats already in the cart laid on top
async fn get_seat_map(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SeatMapResponse>, AppError> {
    let flight = find_flight(&state, &id).await?;
    let result = state.seat_maps.get_or_generate(&flight, state.seatmap.max_cols).await;
    let picked = state.session.read().await.cart().picked_for(&flight.id);

    let grid = result.overlay(&picked);
    let all_occupied = grid.iter().flatten().next().is_some()
        && grid.iter().flatten().all(|s| s.occupied);
    let remaining = flight
        .tickets
        .map(|t| search::remaining_after_picks(&t, picked.len()))
        .unwrap_or(0);

    Ok(Json(SeatMapResponse {
        flight_id: flight.id,
        rows: result.rows,
        cols: result.cols,
        total: result.total,
        remaining,
        all_occupied,
        picked,
        grid,
    }))
}

/// POST /v1/flights/{id}/seats/{seat}
/// Puts a free seat into the cart at the flight's price
async fn pick_seat(
    State(state): State<AppState>,
    Path((id, seat)): Path<(String, String)>,
) -> Result<(StatusCode, Json<CartResponse>), AppError> {
    let flight = find_flight(&state, &id).await?;
    let result = state.seat_maps.get_or_generate(&flight, state.seatmap.max_cols).await;

    let mut session = state.session.write().await;
    let picked = session.cart().picked_for(&flight.id);
    result.check_pickable(&flight.id, &seat, &picked)?;

    session.add_to_cart(CartItem::new(flight.id.clone(), seat.clone(), flight.price)).await;
    tracing::info!("Seat {} on flight {} added to cart", seat, flight.id);

    Ok((StatusCode::CREATED, Json(CartResponse::from(session.cart()))))
}
