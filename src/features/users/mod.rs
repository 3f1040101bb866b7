//! Employee administration and the signed-in user's own settings.

pub mod client;
pub mod types;

pub use types::{Employee, EmployeeStatus, ProfilePicture, ProfileSettings};
