//! Grade use cases
//!
//! Every write that changes a grade value refreshes the cached average of
//! the student it belongs to. The grade write and the average write are two
//! separate storage calls.

use sicei_domain::{
    Grade, GradeId, GradePatch, GradeRepository, GradeService, GradeSortField, GradeToShowStudent,
    GradeToShowSubject, ListQuery, NewGrade, StudentId, StudentRepository, SubjectId,
    SubjectRepository,
};
use tracing::{debug, info};

use crate::error::{Result, UseCaseError};

pub struct GradeUseCases<'a> {
    grades: &'a dyn GradeRepository,
    students: &'a dyn StudentRepository,
    subjects: &'a dyn SubjectRepository,
    service: GradeService,
}

impl<'a> GradeUseCases<'a> {
    pub fn new(
        grades: &'a dyn GradeRepository,
        students: &'a dyn StudentRepository,
        subjects: &'a dyn SubjectRepository,
    ) -> Self {
        Self {
            grades,
            students,
            subjects,
            service: GradeService::new(),
        }
    }

    /// Record a grade, then refresh the student's average.
    ///
    /// Checks run in order: both references present, value in range,
    /// student exists, subject exists.
    pub fn create(&self, draft: NewGrade) -> Result<Grade> {
        if !draft.has_references() {
            return Err(UseCaseError::NotEnoughArguments(
                "Student ID and Subject ID are required.".to_string(),
            ));
        }
        draft.validate()?;

        if !self.students.exists(&draft.student_id)? {
            return Err(UseCaseError::ResourceNotFound(format!(
                "Student with ID {} not found.",
                draft.student_id
            )));
        }
        if !self.subjects.exists(&draft.subject_id)? {
            return Err(UseCaseError::ResourceNotFound(format!(
                "Subject with ID {} not found.",
                draft.subject_id
            )));
        }

        let created = self
            .grades
            .create(draft)?
            .ok_or_else(|| UseCaseError::CannotCreate("Cannot create grade".to_string()))?;

        info!(
            grade_id = %created.id(),
            student_id = %created.student_id(),
            subject_id = %created.subject_id(),
            value = created.value(),
            "grade created"
        );

        self.update_student_average(created.student_id())?;
        Ok(created)
    }

    pub fn get_by_id(&self, id: GradeId) -> Result<Grade> {
        self.grades
            .get_by_id(id)?
            .ok_or_else(|| UseCaseError::ResourceNotFound("Grade cannot be found by id".to_string()))
    }

    pub fn get_all(&self, query: &ListQuery<GradeSortField>) -> Result<Vec<Grade>> {
        crate::check_page(&query.page)?;
        Ok(self.grades.get_all(query)?)
    }

    /// All grades of a student; empty when the student has none
    pub fn get_by_student_id(&self, student_id: &StudentId) -> Result<Vec<Grade>> {
        Ok(self.grades.get_by_student_id(student_id)?)
    }

    /// All grades given in a subject; empty when there are none
    pub fn get_by_subject_id(&self, subject_id: &SubjectId) -> Result<Vec<Grade>> {
        Ok(self.grades.get_by_subject_id(subject_id)?)
    }

    pub fn get_student_grades_to_show(&self, student_id: &StudentId) -> Result<Vec<GradeToShowStudent>> {
        Ok(self.grades.get_student_grades_to_show(student_id)?)
    }

    pub fn get_subject_grades_to_show(&self, subject_id: &SubjectId) -> Result<Vec<GradeToShowSubject>> {
        Ok(self.grades.get_subject_grades_to_show(subject_id)?)
    }

    /// Change a grade value, then refresh the owning student's average
    pub fn update(&self, id: GradeId, patch: GradePatch) -> Result<Grade> {
        patch.validate()?;

        let mut grade = self.get_by_id(id)?;
        grade.apply(patch);

        let updated = self
            .grades
            .update(&grade)?
            .ok_or_else(|| UseCaseError::CannotUpdateResource("Grade cannot be updated".to_string()))?;

        info!(grade_id = %id, value = updated.value(), "grade updated");

        self.update_student_average(updated.student_id())?;
        Ok(updated)
    }

    /// Remove a grade, then refresh the owning student's average
    pub fn delete(&self, id: GradeId) -> Result<()> {
        let grade = self.get_by_id(id)?;

        if !self.grades.delete(id)? {
            return Err(UseCaseError::CannotDeleteResource(
                "Cannot delete grade successfully".to_string(),
            ));
        }

        info!(grade_id = %id, "grade deleted");

        self.update_student_average(grade.student_id())?;
        Ok(())
    }

    /// Recompute a student's average from their current grades and store it
    pub fn update_student_average(&self, student_id: &StudentId) -> Result<f64> {
        let mut student = self.students.get_by_id(student_id)?.ok_or_else(|| {
            UseCaseError::ResourceNotFound(format!("Student with ID {} not found.", student_id))
        })?;

        let grades = self.grades.get_by_student_id(student_id)?;
        let average = self.service.calculate_average(&grades);
        student.set_average(average);

        self.students.update(&student)?.ok_or_else(|| {
            UseCaseError::CannotUpdateResource("Student average cannot be updated".to_string())
        })?;

        debug!(student_id = %student_id, grades = grades.len(), average, "average refreshed");
        Ok(average)
    }
}
