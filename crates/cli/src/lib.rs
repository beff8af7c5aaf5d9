//! # SICEI CLI
//!
//! Command-line surface over the use cases. Every command prints JSON;
//! failures print a `{type, message, timestamp}` object instead.

pub mod commands;
pub mod context;
pub mod output;
