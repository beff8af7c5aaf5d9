//! Subject use cases

use std::collections::BTreeSet;

use sicei_domain::{
    GradeRepository, ListQuery, NewSubject, StudentId, StudentRepository, Subject, SubjectId,
    SubjectPatch, SubjectRepository, SubjectSortField,
};
use tracing::{debug, info};

use crate::error::{Result, UseCaseError};
use crate::grade::GradeUseCases;
use crate::id_allocation::IdAllocator;

/// Create, read, patch and delete subjects.
///
/// Deleting a subject drops its grades, so the grade and student ports are
/// needed to refresh the averages of the students who had them.
pub struct SubjectUseCases<'a> {
    repository: &'a dyn SubjectRepository,
    grades: &'a dyn GradeRepository,
    students: &'a dyn StudentRepository,
}

impl<'a> SubjectUseCases<'a> {
    pub fn new(
        repository: &'a dyn SubjectRepository,
        grades: &'a dyn GradeRepository,
        students: &'a dyn StudentRepository,
    ) -> Self {
        Self {
            repository,
            grades,
            students,
        }
    }

    pub fn create(&self, draft: NewSubject, ids: &IdAllocator<'_>) -> Result<Subject> {
        draft.validate()?;

        let id = ids.allocate(|candidate| self.repository.exists(&SubjectId::new(candidate)))?;
        let subject = Subject::new(SubjectId::new(id), draft);

        let created = self.repository.create(subject)?.ok_or_else(|| {
            UseCaseError::CannotCreate("Cannot create subject successfully".to_string())
        })?;

        info!(subject_id = %created.id(), name = created.name(), "subject created");
        Ok(created)
    }

    pub fn get_by_id(&self, id: &SubjectId) -> Result<Subject> {
        self.repository
            .get_by_id(id)?
            .ok_or_else(|| UseCaseError::ResourceNotFound("Subject cannot be found by id".to_string()))
    }

    pub fn get_all(&self, query: &ListQuery<SubjectSortField>) -> Result<Vec<Subject>> {
        crate::check_page(&query.page)?;
        Ok(self.repository.get_all(query)?)
    }

    pub fn update(&self, id: &SubjectId, patch: SubjectPatch) -> Result<Subject> {
        patch.validate()?;

        let mut subject = self
            .repository
            .get_by_id(id)?
            .ok_or_else(|| UseCaseError::ResourceNotFound("Subject cannot be found by id".to_string()))?;
        if patch.is_empty() {
            debug!(subject_id = %id, "empty subject patch, nothing to write");
            return Ok(subject);
        }
        subject.apply(patch);

        let updated = self
            .repository
            .update(&subject)?
            .ok_or_else(|| UseCaseError::CannotUpdateResource("Subject cannot be updated".to_string()))?;

        info!(subject_id = %id, "subject updated");
        Ok(updated)
    }

    /// Remove a subject; storage drops the grades given in it and the
    /// students who had one get their average recomputed
    pub fn delete(&self, id: &SubjectId) -> Result<()> {
        if !self.repository.exists(id)? {
            return Err(UseCaseError::ResourceNotFound(
                "Subject cannot be found by id".to_string(),
            ));
        }

        let affected: BTreeSet<StudentId> = self
            .grades
            .get_by_subject_id(id)?
            .iter()
            .map(|g| g.student_id().clone())
            .collect();

        if !self.repository.delete(id)? {
            return Err(UseCaseError::CannotDeleteResource(
                "Cannot delete subject successfully".to_string(),
            ));
        }

        info!(subject_id = %id, students = affected.len(), "subject deleted");

        let grades = GradeUseCases::new(self.grades, self.students, self.repository);
        for student_id in &affected {
            grades.update_student_average(student_id)?;
        }
        Ok(())
    }
}
