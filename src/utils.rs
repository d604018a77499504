//! Common utilities
//!
//! This module contains shared utility functions and helpers:
//! - Logging configuration
//! - Path management

pub mod logging;
pub mod paths;

// Re-export commonly used functions for convenience
pub use logging::initialize_logging;
pub use paths::{get_config_dir, get_data_dir, version};
