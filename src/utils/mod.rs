//! Utility functions for code generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`target_url`] - Target URL validation
//! - [`request_meta`] - Visit metadata extraction from HTTP requests

pub mod code_generator;
pub mod request_meta;
pub mod target_url;
