pub mod models;

pub use models::cart::CartItem;
pub use models::flight::{Flight, TicketSummary};
