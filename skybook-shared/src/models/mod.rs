pub mod cart;
pub mod flight;
