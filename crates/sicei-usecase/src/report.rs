//! Reports and the student dashboard
//!
//! Report averages are computed from the projected grade values on every
//! call. The stored student average only feeds listing and the dashboard.

use sicei_domain::{
    GradeRepository, GradeService, GradeToShowStudent, GradeToShowSubject, ListQuery, StudentId,
    StudentReportDashboard, StudentRepository, StudentSortField, SubjectId,
};
use tracing::debug;

use crate::error::{Result, UseCaseError};

/// A student's grades with subject names, plus their mean
#[derive(Debug, Clone, PartialEq)]
pub struct StudentReport {
    pub grades: Vec<GradeToShowStudent>,
    pub average: f64,
}

/// Grades given in a subject with student names, plus their mean
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectReport {
    pub grades: Vec<GradeToShowSubject>,
    pub average: f64,
}

pub struct ReportUseCases<'a> {
    grades: &'a dyn GradeRepository,
    students: &'a dyn StudentRepository,
    service: GradeService,
}

impl<'a> ReportUseCases<'a> {
    pub fn new(grades: &'a dyn GradeRepository, students: &'a dyn StudentRepository) -> Self {
        Self {
            grades,
            students,
            service: GradeService::new(),
        }
    }

    pub fn get_student_subjects_grades(&self, student_id: &StudentId) -> Result<StudentReport> {
        let not_found = || {
            UseCaseError::ResourceNotFound(format!(
                "Cannot find data for student with ID '{}'",
                student_id
            ))
        };

        if !self.students.exists(student_id)? {
            return Err(not_found());
        }

        let grades = self.grades.get_student_grades_to_show(student_id)?;
        if grades.is_empty() {
            return Err(not_found());
        }

        let average = self.service.average_of(grades.iter().map(|g| g.value));
        debug!(student_id = %student_id, grades = grades.len(), average, "student report");
        Ok(StudentReport { grades, average })
    }

    pub fn get_subject_students_grades(&self, subject_id: &SubjectId) -> Result<SubjectReport> {
        let grades = self.grades.get_subject_grades_to_show(subject_id)?;
        if grades.is_empty() {
            return Err(UseCaseError::ResourceNotFound(format!(
                "Cannot find data for subject with ID '{}'",
                subject_id
            )));
        }

        let average = self.service.average_of(grades.iter().map(|g| g.value));
        debug!(subject_id = %subject_id, grades = grades.len(), average, "subject report");
        Ok(SubjectReport { grades, average })
    }

    /// One page of students, each tagged with their regular status
    pub fn get_all_students_dashboard(
        &self,
        query: &ListQuery<StudentSortField>,
    ) -> Result<Vec<StudentReportDashboard>> {
        crate::check_page(&query.page)?;

        self.students
            .get_all(query)?
            .into_iter()
            .map(|student| -> Result<StudentReportDashboard> {
                let status = self.grades.is_regular_student(student.id())?;
                Ok(StudentReportDashboard::new(student, status))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sicei_adapter::repository::in_memory::{
        InMemoryGradeRepository, InMemoryStore, InMemoryStudentRepository, InMemorySubjectRepository,
    };
    use sicei_domain::{
        NewGrade, NewStudent, NewSubject, PageRequest, Sort, SortOrder, Student, Subject,
        SubjectRepository,
    };

    struct Fixture {
        students: InMemoryStudentRepository,
        subjects: InMemorySubjectRepository,
        grades: InMemoryGradeRepository,
    }

    impl Fixture {
        fn new() -> Self {
            let store = InMemoryStore::new();
            Self {
                students: InMemoryStudentRepository::new(store.clone()),
                subjects: InMemorySubjectRepository::new(store.clone()),
                grades: InMemoryGradeRepository::new(store).with_passing_grade(70.0),
            }
        }

        fn student(&self, id: &str, name: &str) -> StudentId {
            let student = Student::new(
                StudentId::new(id),
                NewStudent::new(name, "Test", format!("{}@school.edu", id), 1),
            );
            self.students.create(student).unwrap().unwrap().id().clone()
        }

        fn subject(&self, id: &str, name: &str) -> SubjectId {
            let subject = Subject::new(SubjectId::new(id), NewSubject::new(name, "", 4, 1));
            self.subjects.create(subject).unwrap().unwrap().id().clone()
        }

        fn grade(&self, student: &StudentId, subject: &SubjectId, value: f64) {
            self.grades
                .create(NewGrade::new(student.clone(), subject.clone(), value))
                .unwrap();
        }

        fn reports(&self) -> ReportUseCases<'_> {
            ReportUseCases::new(&self.grades, &self.students)
        }
    }

    #[test]
    fn test_subject_report_average_is_fresh() {
        let fx = Fixture::new();
        let math = fx.subject("math", "Math");
        for (id, value) in [("A25000001", 70.0), ("A25000002", 80.0), ("A25000003", 90.0)] {
            let student = fx.student(id, "S");
            fx.grade(&student, &math, value);
        }

        let report = fx.reports().get_subject_students_grades(&math).unwrap();

        assert_eq!(report.grades.len(), 3);
        assert!((report.average - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_student_report_uses_subject_names() {
        let fx = Fixture::new();
        let alice = fx.student("A25000001", "Alice");
        let math = fx.subject("math", "Math");
        let art = fx.subject("art", "Art");
        fx.grade(&alice, &math, 100.0);
        fx.grade(&alice, &art, 50.0);

        let report = fx.reports().get_student_subjects_grades(&alice).unwrap();

        let subjects: Vec<&str> = report.grades.iter().map(|g| g.subject.as_str()).collect();
        assert!(subjects.contains(&"Math"));
        assert!(subjects.contains(&"Art"));
        assert_eq!(report.average, 75.0);
    }

    #[test]
    fn test_reports_without_grades_are_not_found() {
        let fx = Fixture::new();
        let alice = fx.student("A25000001", "Alice");
        let math = fx.subject("math", "Math");
        let reports = fx.reports();

        assert!(matches!(
            reports.get_student_subjects_grades(&alice),
            Err(UseCaseError::ResourceNotFound(_))
        ));
        assert!(matches!(
            reports.get_student_subjects_grades(&StudentId::new("A25009999")),
            Err(UseCaseError::ResourceNotFound(_))
        ));
        assert!(matches!(
            reports.get_subject_students_grades(&math),
            Err(UseCaseError::ResourceNotFound(_))
        ));
    }

    #[test]
    fn test_dashboard_flags_failing_students() {
        let fx = Fixture::new();
        let alice = fx.student("A25000001", "Alice");
        let bob = fx.student("A25000002", "Bob");
        let math = fx.subject("math", "Math");
        fx.grade(&alice, &math, 95.0);
        fx.grade(&bob, &math, 40.0);

        let query = ListQuery::new(PageRequest::new(10, 1))
            .with_sort(Sort::new(StudentSortField::Name, SortOrder::Asc));
        let dashboard = fx.reports().get_all_students_dashboard(&query).unwrap();

        assert_eq!(dashboard.len(), 2);
        assert_eq!(dashboard[0].student.name(), "Alice");
        assert!(dashboard[0].status);
        assert_eq!(dashboard[1].student.name(), "Bob");
        assert!(!dashboard[1].status);
    }

    #[test]
    fn test_dashboard_past_last_page_is_empty() {
        let fx = Fixture::new();
        fx.student("A25000001", "Alice");

        let dashboard = fx
            .reports()
            .get_all_students_dashboard(&ListQuery::new(PageRequest::new(5, 4)))
            .unwrap();

        assert!(dashboard.is_empty());
    }
}
