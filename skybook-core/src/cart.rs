use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use skybook_shared::CartItem;

/// Seats the user has picked, across all flights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `item` unless the same seat on the same flight is already in the cart.
    /// Returns whether the cart changed.
    pub fn add_item(&mut self, item: CartItem) -> bool {
        if self.contains(&item.flight_id, &item.seat) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn remove_item(&mut self, flight_id: &str, seat: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| !i.matches(flight_id, seat));
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, flight_id: &str, seat: &str) -> bool {
        self.items.iter().any(|i| i.matches(flight_id, seat))
    }

    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|i| i.price).sum()
    }

    pub fn picked_for(&self, flight_id: &str) -> Vec<String> {
        self.items
            .iter()
            .filter(|i| i.flight_id == flight_id)
            .map(|i| i.seat.clone())
            .collect()
    }

    pub fn picked_count_by_flight(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.flight_id.clone()).or_insert(0) += 1;
        }
        counts
    }
}
