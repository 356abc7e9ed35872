//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL mapping with its click counter
//! - [`Click`] - A single recorded visit to a shortened link
//!
//! New records are described by the companion `NewLink` / `NewClick` structs;
//! identifiers and timestamps are assigned by the store.

pub mod click;
pub mod link;

pub use click::{Click, NewClick};
pub use link::{Link, NewLink};
