//! Student Repository - Abstract persistence for Students

use crate::model::student::{Student, StudentId};
use crate::repository::query::{ListQuery, StudentSortField};
use crate::repository::RepositoryError;

/// Student Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// Deleting a student must also remove the student's grades.
pub trait StudentRepository: Send + Sync {
    /// Store a new student. `None` means storage accepted the call but
    /// produced nothing.
    fn create(&self, student: Student) -> Result<Option<Student>, RepositoryError>;

    /// Find a student by ID
    fn get_by_id(&self, id: &StudentId) -> Result<Option<Student>, RepositoryError>;

    /// Students enrolled in exactly this semester
    fn get_by_semester(&self, semester: i32) -> Result<Vec<Student>, RepositoryError>;

    /// One page of students, optionally sorted
    fn get_all(&self, query: &ListQuery<StudentSortField>) -> Result<Vec<Student>, RepositoryError>;

    /// Replace the stored student. `None` if it is not stored.
    fn update(&self, student: &Student) -> Result<Option<Student>, RepositoryError>;

    /// Delete a student and their grades. `false` if nothing was removed.
    fn delete(&self, id: &StudentId) -> Result<bool, RepositoryError>;

    /// Check if a student exists
    fn exists(&self, id: &StudentId) -> Result<bool, RepositoryError> {
        Ok(self.get_by_id(id)?.is_some())
    }

    /// The cached average of a student, `None` if the student is unknown
    fn get_average_by_student_id(&self, id: &StudentId) -> Result<Option<f64>, RepositoryError> {
        Ok(self.get_by_id(id)?.map(|s| s.average()))
    }
}
