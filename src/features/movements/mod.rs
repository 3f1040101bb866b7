//! Inventory movement history.

pub mod client;
pub mod types;

pub use types::Movement;
