pub mod cart;
pub mod datefmt;
pub mod favorites;
pub mod repository;
pub mod search;
pub mod seatmap;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Seat {seat} does not exist on flight {flight_id}")]
    InvalidSeat { flight_id: String, seat: String },
    #[error("Seat {seat} on flight {flight_id} is already occupied")]
    SeatUnavailable { flight_id: String, seat: String },
}

pub type CoreResult<T> = Result<T, CoreError>;
