//! Infrastructure layer
//!
//! Boundary to the outside world: the granule source contract and
//! user-facing configuration.

pub mod config;
pub mod source;
