use std::collections::HashMap;
use std::sync::Arc;

use skybook_core::seatmap::{self, SeatGridResult};
use skybook_shared::{Flight, TicketSummary};
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SeatMapKey {
    flight_id: String,
    tickets: Option<TicketSummary>,
    max_cols: usize,
}

/// Generated seat maps, shared between requests. A flight whose ticket
/// counts change gets a fresh entry; unrelated requests reuse the old one.
#[derive(Clone, Default)]
pub struct SeatMapCache {
    entries: Arc<RwLock<HashMap<SeatMapKey, Arc<SeatGridResult>>>>,
}

impl SeatMapCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_or_generate(&self, flight: &Flight, max_cols: usize) -> Arc<SeatGridResult> {
        let key = SeatMapKey {
            flight_id: flight.id.clone(),
            tickets: flight.tickets,
            max_cols,
        };

        if let Some(hit) = self.entries.read().await.get(&key) {
            return hit.clone();
        }

        let mut entries = self.entries.write().await;
        entries
            .entry(key)
            .or_insert_with(|| {
                tracing::debug!("Generating seat map for flight {}", flight.id);
                Arc::new(seatmap::generate(flight.tickets.as_ref(), max_cols, &flight.id))
            })
            .clone()
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
