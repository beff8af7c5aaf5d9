//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from sicei-domain.

pub mod in_memory;
