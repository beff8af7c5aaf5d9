//! # SICEI Shared
//!
//! Configuration and error types used across all SICEI packages.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
