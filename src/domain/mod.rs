//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`expiry`] - Link lifetime policy
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; repository traits define contracts implemented by the
//! infrastructure layer, and orchestration lives in
//! [`crate::application::services`].

pub mod entities;
pub mod expiry;
pub mod repositories;
