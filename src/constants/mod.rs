//! Application constants module.
//!
//! Centralizes the strings shared between layers: collection names, error
//! messages, status messages and HTTP header names.

pub mod collections;
pub mod errors;
pub mod headers;
pub mod messages;

pub use collections::*;
pub use errors::*;
pub use headers::*;
pub use messages::*;
