//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls, validation, and business rules on top of the repository trait.
//!
//! # Available Services
//!
//! - [`services::LinkService`] - Link creation flow
//! - [`services::RedirectService`] - Shortcode resolution and click recording
//! - [`services::StatsService`] - Per-link analytics reads

pub mod services;
