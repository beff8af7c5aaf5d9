//! Read projections used by reports. Never persisted.

use super::grade::GradeId;
use super::student::Student;

/// A student's grade joined with the subject name
#[derive(Debug, Clone, PartialEq)]
pub struct GradeToShowStudent {
    pub id: GradeId,
    pub subject: String,
    pub value: f64,
}

/// A subject's grade joined with the student's full name
#[derive(Debug, Clone, PartialEq)]
pub struct GradeToShowSubject {
    pub id: GradeId,
    pub student: String,
    pub value: f64,
}

/// A dashboard row: the student plus their regular status
#[derive(Debug, Clone, PartialEq)]
pub struct StudentReportDashboard {
    pub student: Student,
    /// Opaque standing flag supplied by the grade repository
    pub status: bool,
}

impl StudentReportDashboard {
    pub fn new(student: Student, status: bool) -> Self {
        Self { student, status }
    }
}
