//! Reference data used by product forms: categories and providers.

pub mod client;
pub mod types;

pub use types::{Category, NewProvider, Provider};
