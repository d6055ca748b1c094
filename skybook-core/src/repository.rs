use async_trait::async_trait;
use skybook_shared::Flight;

/// Repository trait for flight catalog access
#[async_trait]
pub trait FlightRepository: Send + Sync {
    async fn list_flights(&self) -> Result<Vec<Flight>, Box<dyn std::error::Error + Send + Sync>>;

    async fn get_flight(
        &self,
        id: &str,
    ) -> Result<Option<Flight>, Box<dyn std::error::Error + Send + Sync>>;
}
