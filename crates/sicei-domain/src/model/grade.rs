//! Grade - The score a student obtained in a subject
//!
//! Grades reference one Student and one Subject. The numeric id is
//! assigned by storage (auto-increment), so a grade that has not been
//! stored yet is a `NewGrade`.

use super::student::StudentId;
use super::subject::SubjectId;
use super::ValidationError;

/// Lowest valid grade value
pub const GRADE_MIN: f64 = 0.0;
/// Highest valid grade value
pub const GRADE_MAX: f64 = 100.0;

/// Storage-assigned grade identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GradeId(i64);

impl GradeId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for GradeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check a grade value against [GRADE_MIN, GRADE_MAX]
pub fn validate_value(value: f64) -> Result<(), ValidationError> {
    if value.is_nan() || !(GRADE_MIN..=GRADE_MAX).contains(&value) {
        return Err(ValidationError::GradeOutOfRange { value });
    }
    Ok(())
}

/// A grade waiting to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewGrade {
    pub student_id: StudentId,
    pub subject_id: SubjectId,
    pub value: f64,
}

impl NewGrade {
    pub fn new(student_id: StudentId, subject_id: SubjectId, value: f64) -> Self {
        Self {
            student_id,
            subject_id,
            value,
        }
    }

    /// Both references must be present
    pub fn has_references(&self) -> bool {
        !self.student_id.as_str().trim().is_empty() && !self.subject_id.as_str().trim().is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_value(self.value)
    }
}

/// Grade entity
#[derive(Debug, Clone, PartialEq)]
pub struct Grade {
    id: GradeId,
    student_id: StudentId,
    subject_id: SubjectId,
    value: f64,
}

impl Grade {
    /// Attach the storage id to a new grade
    pub fn new(id: GradeId, grade: NewGrade) -> Self {
        Self {
            id,
            student_id: grade.student_id,
            subject_id: grade.subject_id,
            value: grade.value,
        }
    }

    pub fn id(&self) -> GradeId {
        self.id
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn subject_id(&self) -> &SubjectId {
        &self.subject_id
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn apply(&mut self, patch: GradePatch) {
        if let Some(value) = patch.value {
            self.value = value;
        }
    }
}

/// Grades only allow their value to change
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GradePatch {
    pub value: Option<f64>,
}

impl GradePatch {
    pub fn value(value: f64) -> Self {
        Self { value: Some(value) }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.value {
            Some(value) => validate_value(value),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_bounds() {
        assert!(validate_value(0.0).is_ok());
        assert!(validate_value(100.0).is_ok());
        assert!(validate_value(72.5).is_ok());
        assert!(validate_value(-0.1).is_err());
        assert!(validate_value(100.01).is_err());
        assert!(validate_value(f64::NAN).is_err());
    }

    #[test]
    fn test_missing_references() {
        let grade = NewGrade::new(StudentId::new(""), SubjectId::new("math"), 90.0);
        assert!(!grade.has_references());

        let grade = NewGrade::new(StudentId::new("A25000001"), SubjectId::new(" "), 90.0);
        assert!(!grade.has_references());
    }

    #[test]
    fn test_patch_keeps_references() {
        let mut grade = Grade::new(
            GradeId::new(7),
            NewGrade::new(StudentId::new("A25000001"), SubjectId::new("math"), 80.0),
        );

        grade.apply(GradePatch::value(60.0));
        assert_eq!(grade.value(), 60.0);
        assert_eq!(grade.id(), GradeId::new(7));
        assert_eq!(grade.student_id().as_str(), "A25000001");

        grade.apply(GradePatch::default());
        assert_eq!(grade.value(), 60.0);
    }
}
