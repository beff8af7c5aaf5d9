//! Student use cases

use sicei_domain::{
    ListQuery, NewStudent, Student, StudentId, StudentPatch, StudentRepository, StudentSortField,
};
use tracing::{debug, info};

use crate::error::{Result, UseCaseError};
use crate::id_allocation::IdAllocator;

/// Create, read, patch and delete students
pub struct StudentUseCases<'a> {
    repository: &'a dyn StudentRepository,
}

impl<'a> StudentUseCases<'a> {
    pub fn new(repository: &'a dyn StudentRepository) -> Self {
        Self { repository }
    }

    /// Enrol a student under a freshly allocated id
    pub fn create(&self, draft: NewStudent, ids: &IdAllocator<'_>) -> Result<Student> {
        draft.validate()?;

        let id = ids.allocate(|candidate| self.repository.exists(&StudentId::new(candidate)))?;
        let student = Student::new(StudentId::new(id), draft);

        let created = self
            .repository
            .create(student)?
            .ok_or_else(|| UseCaseError::CannotCreate("Cannot create student".to_string()))?;

        info!(student_id = %created.id(), "student created");
        Ok(created)
    }

    pub fn get_by_id(&self, id: &StudentId) -> Result<Student> {
        self.repository
            .get_by_id(id)?
            .ok_or_else(|| UseCaseError::ResourceNotFound("Student cannot be found by id".to_string()))
    }

    /// Students of one semester; an empty list is a valid answer
    pub fn get_by_semester(&self, semester: i32) -> Result<Vec<Student>> {
        Ok(self.repository.get_by_semester(semester)?)
    }

    /// One page of students; an empty page is a valid answer
    pub fn get_all(&self, query: &ListQuery<StudentSortField>) -> Result<Vec<Student>> {
        crate::check_page(&query.page)?;
        let students = self.repository.get_all(query)?;
        debug!(count = students.len(), page = query.page.page(), "listed students");
        Ok(students)
    }

    /// Overwrite the fields present in `patch`. The cached average is not
    /// touched here.
    pub fn update(&self, id: &StudentId, patch: StudentPatch) -> Result<Student> {
        patch.validate()?;

        let mut student = self.get_by_id(id)?;
        if patch.is_empty() {
            debug!(student_id = %id, "empty student patch, nothing to write");
            return Ok(student);
        }
        student.apply(patch);

        let updated = self
            .repository
            .update(&student)?
            .ok_or_else(|| UseCaseError::CannotUpdateResource("Student cannot be updated".to_string()))?;

        info!(student_id = %id, "student updated");
        Ok(updated)
    }

    /// Remove a student; storage drops the student's grades with it
    pub fn delete(&self, id: &StudentId) -> Result<()> {
        if !self.repository.exists(id)? {
            return Err(UseCaseError::ResourceNotFound(
                "Student cannot be found by id".to_string(),
            ));
        }

        if !self.repository.delete(id)? {
            return Err(UseCaseError::CannotDeleteResource(
                "Cannot delete student successfully".to_string(),
            ));
        }

        info!(student_id = %id, "student deleted");
        Ok(())
    }
}
