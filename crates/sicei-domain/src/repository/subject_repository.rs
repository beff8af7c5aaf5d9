//! Subject Repository - Abstract persistence for Subjects

use crate::model::subject::{Subject, SubjectId};
use crate::repository::query::{ListQuery, SubjectSortField};
use crate::repository::RepositoryError;

/// Subject Repository Trait
///
/// Deleting a subject must also remove the grades given in it.
pub trait SubjectRepository: Send + Sync {
    /// Store a new subject
    fn create(&self, subject: Subject) -> Result<Option<Subject>, RepositoryError>;

    /// Find a subject by ID
    fn get_by_id(&self, id: &SubjectId) -> Result<Option<Subject>, RepositoryError>;

    /// One page of subjects, optionally sorted
    fn get_all(&self, query: &ListQuery<SubjectSortField>) -> Result<Vec<Subject>, RepositoryError>;

    /// Replace the stored subject. `None` if it is not stored.
    fn update(&self, subject: &Subject) -> Result<Option<Subject>, RepositoryError>;

    /// Delete a subject. `false` if nothing was removed.
    fn delete(&self, id: &SubjectId) -> Result<bool, RepositoryError>;

    /// Check if a subject exists
    fn exists(&self, id: &SubjectId) -> Result<bool, RepositoryError> {
        Ok(self.get_by_id(id)?.is_some())
    }
}
