//! Grade Repository - Abstract persistence for Grades
//!
//! Besides CRUD, the grade collaborator owns the joins used by reports and
//! the "regular student" rule.

use crate::model::grade::{Grade, GradeId, NewGrade};
use crate::model::report::{GradeToShowStudent, GradeToShowSubject};
use crate::model::student::StudentId;
use crate::model::subject::SubjectId;
use crate::repository::query::{GradeSortField, ListQuery};
use crate::repository::RepositoryError;

/// Grade Repository Trait
pub trait GradeRepository: Send + Sync {
    /// Store a grade and assign its id
    fn create(&self, grade: NewGrade) -> Result<Option<Grade>, RepositoryError>;

    /// Find a grade by ID
    fn get_by_id(&self, id: GradeId) -> Result<Option<Grade>, RepositoryError>;

    /// One page of grades, optionally sorted
    fn get_all(&self, query: &ListQuery<GradeSortField>) -> Result<Vec<Grade>, RepositoryError>;

    /// Replace the stored grade. `None` if it is not stored.
    fn update(&self, grade: &Grade) -> Result<Option<Grade>, RepositoryError>;

    /// Delete a grade. `false` if nothing was removed.
    fn delete(&self, id: GradeId) -> Result<bool, RepositoryError>;

    /// Check if a grade exists
    fn exists(&self, id: GradeId) -> Result<bool, RepositoryError> {
        Ok(self.get_by_id(id)?.is_some())
    }

    /// All grades of a student
    fn get_by_student_id(&self, student_id: &StudentId) -> Result<Vec<Grade>, RepositoryError>;

    /// All grades given in a subject
    fn get_by_subject_id(&self, subject_id: &SubjectId) -> Result<Vec<Grade>, RepositoryError>;

    /// A student's grades with the subject names
    fn get_student_grades_to_show(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<GradeToShowStudent>, RepositoryError>;

    /// A subject's grades with the student names
    fn get_subject_grades_to_show(
        &self,
        subject_id: &SubjectId,
    ) -> Result<Vec<GradeToShowSubject>, RepositoryError>;

    /// Academic standing of a student; the rule belongs to the implementation
    fn is_regular_student(&self, student_id: &StudentId) -> Result<bool, RepositoryError>;
}
