//! # SICEI Adapter Layer
//!
//! Implementations of the domain ports (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `repository/` - Persistence implementations
//! - `snapshot` - JSON file the in-memory store is loaded from and saved to
//! - `mapper` - Serializable records and report views
//! - `id_source` - Random student numbers and uuid subject ids

pub mod id_source;
pub mod mapper;
pub mod repository;
pub mod snapshot;

pub use id_source::{RandomStudentIdSource, UuidSubjectIdSource};
pub use repository::in_memory::{
    InMemoryGradeRepository, InMemoryStore, InMemoryStudentRepository, InMemorySubjectRepository,
    DEFAULT_PASSING_GRADE,
};
pub use snapshot::{Snapshot, SnapshotError};
