//! OpenTrace Common Utilities
//!
//! Shared infrastructure for all OpenTrace crates:
//! - Error types and result aliases
//! - Frame clock helpers for mapping video time to frame indices
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
