//! Link repository implementations.
//!
//! Concrete implementations of the domain repository trait:
//!
//! - [`PgLinkRepository`] - PostgreSQL via SQLx
//! - [`MemoryLinkRepository`] - in-memory, for tests and databaseless runs

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
