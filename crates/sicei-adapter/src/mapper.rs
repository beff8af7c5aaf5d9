//! Entity <-> record mapping
//!
//! Records are the serializable shape of the entities, used by the snapshot
//! file and by anything that prints JSON. Views cover the report shapes.

use serde::{Deserialize, Serialize};
use sicei_domain::{
    Grade, GradeId, GradeToShowStudent, GradeToShowSubject, NewGrade, NewSubject, Student,
    StudentId, StudentReportDashboard, Subject, SubjectId,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub semester: i32,
    #[serde(default)]
    pub average: f64,
}

impl From<&Student> for StudentRecord {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id().to_string(),
            name: student.name().to_string(),
            lastname: student.lastname().to_string(),
            email: student.email().to_string(),
            semester: student.semester(),
            average: student.average(),
        }
    }
}

impl From<StudentRecord> for Student {
    fn from(record: StudentRecord) -> Self {
        Student::restore(
            StudentId::new(record.id),
            record.name,
            record.lastname,
            record.email,
            record.semester,
            record.average,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub credits: i32,
    pub semester: i32,
}

impl From<&Subject> for SubjectRecord {
    fn from(subject: &Subject) -> Self {
        Self {
            id: subject.id().to_string(),
            name: subject.name().to_string(),
            description: subject.description().to_string(),
            credits: subject.credits(),
            semester: subject.semester(),
        }
    }
}

impl From<SubjectRecord> for Subject {
    fn from(record: SubjectRecord) -> Self {
        Subject::new(
            SubjectId::new(record.id),
            NewSubject::new(record.name, record.description, record.credits, record.semester),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    pub id: i64,
    pub student_id: String,
    pub subject_id: String,
    pub value: f64,
}

impl From<&Grade> for GradeRecord {
    fn from(grade: &Grade) -> Self {
        Self {
            id: grade.id().value(),
            student_id: grade.student_id().to_string(),
            subject_id: grade.subject_id().to_string(),
            value: grade.value(),
        }
    }
}

impl From<GradeRecord> for Grade {
    fn from(record: GradeRecord) -> Self {
        Grade::new(
            GradeId::new(record.id),
            NewGrade::new(
                StudentId::new(record.student_id),
                SubjectId::new(record.subject_id),
                record.value,
            ),
        )
    }
}

// ========== Report views ==========

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeToShowStudentView {
    pub id: i64,
    pub subject: String,
    pub value: f64,
}

impl From<&GradeToShowStudent> for GradeToShowStudentView {
    fn from(grade: &GradeToShowStudent) -> Self {
        Self {
            id: grade.id.value(),
            subject: grade.subject.clone(),
            value: grade.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeToShowSubjectView {
    pub id: i64,
    pub student: String,
    pub value: f64,
}

impl From<&GradeToShowSubject> for GradeToShowSubjectView {
    fn from(grade: &GradeToShowSubject) -> Self {
        Self {
            id: grade.id.value(),
            student: grade.student.clone(),
            value: grade.value,
        }
    }
}

/// `{"subjects": [...], "average": ..}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentReportView {
    pub subjects: Vec<GradeToShowStudentView>,
    pub average: f64,
}

impl StudentReportView {
    pub fn new(grades: &[GradeToShowStudent], average: f64) -> Self {
        Self {
            subjects: grades.iter().map(Into::into).collect(),
            average,
        }
    }
}

/// `{"students": [...], "average": ..}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectReportView {
    pub students: Vec<GradeToShowSubjectView>,
    pub average: f64,
}

impl SubjectReportView {
    pub fn new(grades: &[GradeToShowSubject], average: f64) -> Self {
        Self {
            students: grades.iter().map(Into::into).collect(),
            average,
        }
    }
}

/// Student fields plus the regular status flag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    #[serde(flatten)]
    pub student: StudentRecord,
    pub status: bool,
}

impl From<&StudentReportDashboard> for DashboardView {
    fn from(entry: &StudentReportDashboard) -> Self {
        Self {
            student: StudentRecord::from(&entry.student),
            status: entry.status,
        }
    }
}
