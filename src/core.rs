//! Core Elm-style architecture
//!
//! This module contains the core of the loading logic:
//! - Messages delivered by the host environment
//! - Application state and its per-domain update functions
//! - The top-level update routing
//! - Commands (side effects) and their executor

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod state;
pub mod update;
