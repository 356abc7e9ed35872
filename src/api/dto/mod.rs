//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization; external field names follow
//! the API contract (camelCase).

pub mod clicks;
pub mod health;
pub mod shorten;
pub mod stats;
