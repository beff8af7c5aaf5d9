//! # SICEI Domain Layer
//!
//! School records: students, subjects and the grades that link them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Entities, patches & read projections          ││
//! │  │  repository/- Ports, pagination and sort allow-lists        ││
//! │  │  service/   - Grade averages, student id format             ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This crate has no external dependencies. Storage engines, id randomness
//! and serialization live in the adapter layer.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    grade::{Grade, GradeId, GradePatch, NewGrade, GRADE_MAX, GRADE_MIN},
    report::{GradeToShowStudent, GradeToShowSubject, StudentReportDashboard},
    student::{NewStudent, Student, StudentId, StudentPatch},
    subject::{NewSubject, Subject, SubjectId, SubjectPatch},
    ValidationError,
};

pub use repository::{
    grade_repository::GradeRepository,
    query::{
        GradeSortField, ListQuery, PageRequest, Sort, SortOrder, SortableField,
        StudentSortField, SubjectSortField,
    },
    student_repository::StudentRepository,
    subject_repository::SubjectRepository,
    RepositoryError,
};

pub use service::{
    grade_service::GradeService,
    id_source::IdSource,
    student_id::StudentIdFormat,
};
