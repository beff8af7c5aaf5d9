//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits say what the use cases need from storage, not how it is
//! done. Any engine (in-memory, relational, document) can implement them.
//!
//! ```text
//! Domain Layer            │  Adapter Layer
//! ────────────────────────┼────────────────────────
//! trait StudentRepository │  InMemoryStudentRepository
//!   fn create()           │  (snapshot-backed store)
//!   fn get_all(query)     │
//! ```
//!
//! Every method takes `&self`: implementations are shared handles and own
//! their locking. Each call is atomic on its own; nothing spans calls.

pub mod grade_repository;
pub mod query;
pub mod student_repository;
pub mod subject_repository;

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A record the operation depends on is missing
    NotFound { id: String },
    /// A record with this id is already stored
    Conflict { id: String },
    /// Failed to read or persist
    PersistenceError { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::NotFound { id } => {
                write!(f, "Record not found: {}", id)
            }
            RepositoryError::Conflict { id } => {
                write!(f, "Record already exists: {}", id)
            }
            RepositoryError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}
