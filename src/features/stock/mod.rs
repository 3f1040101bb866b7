//! Stock levels per product.

pub mod client;
pub mod types;

pub use types::{Stock, StockRequest};
