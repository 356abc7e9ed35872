//! Infrastructure layer for storage and external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - Link repository implementations (PostgreSQL, in-memory)
//! - [`log_sink`] - Fire-and-forget delivery of events to an external log collector

pub mod log_sink;
pub mod persistence;
