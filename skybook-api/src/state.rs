use std::sync::Arc;

use skybook_core::repository::FlightRepository;
use skybook_store::Session;
use tokio::sync::RwLock;

use crate::seat_cache::SeatMapCache;

#[derive(Clone)]
pub struct SeatMapSettings {
    pub max_cols: usize,
}

/// Everything a request handler may touch. Built once at startup; the
/// session is flushed by [`AppState::shutdown`].
#[derive(Clone)]
pub struct AppState {
    pub flight_repo: Arc<dyn FlightRepository>,
    pub session: Arc<RwLock<Session>>,
    pub seat_maps: SeatMapCache,
    pub seatmap: SeatMapSettings,
}

impl AppState {
    pub fn new(flight_repo: Arc<dyn FlightRepository>, session: Session, max_cols: usize) -> Self {
        Self {
            flight_repo,
            session: Arc::new(RwLock::new(session)),
            seat_maps: SeatMapCache::new(),
            seatmap: SeatMapSettings { max_cols },
        }
    }

    pub async fn shutdown(&self) {
        tracing::info!("Flushing session before exit");
        self.session.read().await.persist().await;
    }
}
