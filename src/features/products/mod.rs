//! Product catalogue: listing, detail, create, edit and delete.

pub mod client;
pub mod types;

pub use types::{ImageFile, Product, ProductForm};
