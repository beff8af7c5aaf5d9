//! # SICEI Use Case Layer
//!
//! Application-specific business rules.
//! Each use case borrows the repository ports it needs, checks its
//! preconditions in order and stops at the first one that fails.
//!
//! - [`StudentUseCases`] / [`SubjectUseCases`] - CRUD with generated ids
//! - [`GradeUseCases`] - CRUD with referential checks and average refresh
//! - [`ReportUseCases`] - per-student / per-subject reports and the dashboard

pub mod error;
pub mod grade;
pub mod id_allocation;
pub mod report;
pub mod student;
pub mod subject;

pub use sicei_domain;

pub use error::{Result, UseCaseError};
pub use grade::GradeUseCases;
pub use id_allocation::{IdAllocator, IdSource, DEFAULT_MAX_ATTEMPTS};
pub use report::{ReportUseCases, StudentReport, SubjectReport};
pub use student::StudentUseCases;
pub use subject::SubjectUseCases;

use sicei_domain::PageRequest;

/// Reject page requests that cannot address any page
pub(crate) fn check_page(page: &PageRequest) -> Result<()> {
    if !page.is_valid() {
        return Err(UseCaseError::Validation(format!(
            "Invalid page request: page_size must be positive and page starts at 1 (got page_size={}, page={})",
            page.page_size(),
            page.page()
        )));
    }
    Ok(())
}
