//! Identifier candidates for newly created entities

/// Proposes identifier candidates. Randomness lives in the implementation;
/// callers check each candidate against storage before using it.
pub trait IdSource: Send + Sync {
    fn candidate(&self) -> String;
}
