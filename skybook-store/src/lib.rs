pub mod app_config;
pub mod flight_repo;
pub mod persist;
pub mod session;

pub use flight_repo::JsonFlightRepository;
pub use persist::{JsonStorage, StoreError};
pub use session::Session;
