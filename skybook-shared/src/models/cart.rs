use serde::{Deserialize, Serialize};

/// A single picked seat waiting in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub flight_id: String,
    pub seat: String,
    pub price: f64,
}

impl CartItem {
    pub fn new(flight_id: impl Into<String>, seat: impl Into<String>, price: f64) -> Self {
        Self {
            flight_id: flight_id.into(),
            seat: seat.into(),
            price,
        }
    }

    pub fn matches(&self, flight_id: &str, seat: &str) -> bool {
        self.flight_id == flight_id && self.seat == seat
    }
}
