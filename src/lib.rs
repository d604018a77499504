//! # Granulist - Incremental Granule Browsing
//!
//! The loading core behind a granule (result item) browser for large
//! search result sets. This library implements an Elm-like architecture
//! for predictable state management: it accumulates pages of results for
//! a selected dataset, turns scroll movement into at-most-one in-flight
//! fetch, restarts the list when the filter set changes, and discards
//! responses that arrive for a superseded session.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (page fetches, logging)
//!
//! Rendering is left entirely to the host: it reads the ordered snapshot
//! and load status through the presentation accessors on [`AppState`].
//!
//! ## Example Usage
//!
//! ```rust
//! use granulist::{core::msg::granules::GranuleMsg, update, AppState, DatasetId, Msg};
//!
//! let state = AppState::new();
//!
//! // Selecting a dataset starts a session and requests its first page
//! let (state, commands) = update(
//!     Msg::Granule(GranuleMsg::SelectDataset(DatasetId::from("C123"))),
//!     state,
//! );
//!
//! assert_eq!(commands.len(), 1);
//! assert!(state.snapshot().is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Messages, state, update functions, commands and their executor
//! - [`domain`] - Datasets, granules, filter sets, page requests/responses
//! - [`infrastructure`] - The [`GranuleSource`] contract and configuration
//! - [`runtime`] - [`BrowserRuntime`] glue for hosts driving the core
//! - [`test_helpers`] - In-memory granule sources for tests

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod runtime;
pub mod test_helpers;
pub mod utils;

// Re-exports for convenience
pub use crate::core::cmd::Cmd;
pub use crate::core::cmd_executor::CmdExecutor;
pub use crate::core::msg::Msg;
pub use crate::core::state::{AppState, SessionId, SessionStatus};
pub use crate::core::update::update;
pub use domain::{DatasetId, FilterSet, Granule, GranuleId, PageCursor, PageRequest, PageResponse};
pub use infrastructure::config::Config;
pub use infrastructure::source::{GranuleSource, SourceError};
pub use runtime::{BrowserRuntime, BrowserRuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
