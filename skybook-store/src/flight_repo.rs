use async_trait::async_trait;
use skybook_core::repository::FlightRepository;
use skybook_shared::Flight;
use std::error::Error;
use std::path::Path;

/// Flight catalog backed by a JSON array of flights, loaded once.
pub struct JsonFlightRepository {
    flights: Vec<Flight>,
}

impl JsonFlightRepository {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, crate::StoreError> {
        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        let flights: Vec<Flight> = serde_json::from_str(&raw)?;
        tracing::info!("Loaded {} flights from {}", flights.len(), path.as_ref().display());
        Ok(Self { flights })
    }

    pub fn from_flights(flights: Vec<Flight>) -> Self {
        Self { flights }
    }
}

#[async_trait]
impl FlightRepository for JsonFlightRepository {
    async fn list_flights(&self) -> Result<Vec<Flight>, Box<dyn Error + Send + Sync>> {
        Ok(self.flights.clone())
    }

    async fn get_flight(&self, id: &str) -> Result<Option<Flight>, Box<dyn Error + Send + Sync>> {
        Ok(self.flights.iter().find(|f| f.id == id).cloned())
    }
}
