//! In-Memory Repository Implementations
//!
//! All three repositories share one [`InMemoryStore`], so a delete in one
//! collection can cascade to the grades that reference it. Maps are ordered
//! by key, which gives unsorted listings a stable natural order.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use sicei_domain::{
    Grade, GradeId, GradeRepository, GradeSortField, GradeToShowStudent, GradeToShowSubject,
    ListQuery, NewGrade, RepositoryError, SortableField, Student, StudentId, StudentRepository,
    StudentSortField, Subject, SubjectId, SubjectRepository, SubjectSortField,
};
use tracing::{debug, warn};

/// Grade below which a student stops being regular
pub const DEFAULT_PASSING_GRADE: f64 = 70.0;

/// Everything the store holds
#[derive(Debug, Clone)]
pub(crate) struct StoreState {
    pub(crate) students: BTreeMap<StudentId, Student>,
    pub(crate) subjects: BTreeMap<SubjectId, Subject>,
    pub(crate) grades: BTreeMap<GradeId, Grade>,
    /// Id handed to the next created grade
    pub(crate) next_grade_id: i64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            students: BTreeMap::new(),
            subjects: BTreeMap::new(),
            grades: BTreeMap::new(),
            next_grade_id: 1,
        }
    }
}

/// Shared, thread-safe storage behind the in-memory repositories
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_state(state: StoreState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, RepositoryError> {
        self.state.read().map_err(|_| RepositoryError::PersistenceError {
            message: "Failed to acquire read lock".to_string(),
        })
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, RepositoryError> {
        self.state.write().map_err(|_| RepositoryError::PersistenceError {
            message: "Failed to acquire write lock".to_string(),
        })
    }
}

/// Sort (when asked to) and cut out the requested page
fn sorted_page<T, F>(
    items: impl Iterator<Item = T>,
    query: &ListQuery<F>,
    compare: impl Fn(&T, &T, F) -> Ordering,
) -> Vec<T>
where
    F: SortableField,
{
    let mut items: Vec<T> = items.collect();
    if let Some(sort) = query.sort {
        debug!(field = sort.field.as_str(), order = sort.order.as_str(), "sorting listing");
        items.sort_by(|a, b| sort.order.apply(compare(a, b, sort.field)));
    }
    query.page.slice(items)
}

fn compare_students(a: &Student, b: &Student, field: StudentSortField) -> Ordering {
    match field {
        StudentSortField::Id => a.id().cmp(b.id()),
        StudentSortField::Name => a.name().cmp(b.name()),
        StudentSortField::Lastname => a.lastname().cmp(b.lastname()),
        StudentSortField::Email => a.email().cmp(b.email()),
        StudentSortField::Semester => a.semester().cmp(&b.semester()),
        StudentSortField::Average => a.average().total_cmp(&b.average()),
    }
}

fn compare_subjects(a: &Subject, b: &Subject, field: SubjectSortField) -> Ordering {
    match field {
        SubjectSortField::Id => a.id().cmp(b.id()),
        SubjectSortField::Name => a.name().cmp(b.name()),
        SubjectSortField::Credits => a.credits().cmp(&b.credits()),
        SubjectSortField::Semester => a.semester().cmp(&b.semester()),
    }
}

fn compare_grades(a: &Grade, b: &Grade, field: GradeSortField) -> Ordering {
    match field {
        GradeSortField::Id => a.id().cmp(&b.id()),
        GradeSortField::StudentId => a.student_id().cmp(b.student_id()),
        GradeSortField::SubjectId => a.subject_id().cmp(b.subject_id()),
        GradeSortField::Value => a.value().total_cmp(&b.value()),
    }
}

// ============================================================================
// Students
// ============================================================================

/// In-memory Student Repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryStudentRepository {
    store: InMemoryStore,
}

impl InMemoryStudentRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn create(&self, student: Student) -> Result<Option<Student>, RepositoryError> {
        let mut state = self.store.write()?;
        if state.students.contains_key(student.id()) {
            return Err(RepositoryError::Conflict {
                id: student.id().to_string(),
            });
        }
        state.students.insert(student.id().clone(), student.clone());
        Ok(Some(student))
    }

    fn get_by_id(&self, id: &StudentId) -> Result<Option<Student>, RepositoryError> {
        Ok(self.store.read()?.students.get(id).cloned())
    }

    fn get_by_semester(&self, semester: i32) -> Result<Vec<Student>, RepositoryError> {
        Ok(self
            .store
            .read()?
            .students
            .values()
            .filter(|s| s.semester() == semester)
            .cloned()
            .collect())
    }

    fn get_all(&self, query: &ListQuery<StudentSortField>) -> Result<Vec<Student>, RepositoryError> {
        let state = self.store.read()?;
        Ok(sorted_page(state.students.values().cloned(), query, compare_students))
    }

    fn update(&self, student: &Student) -> Result<Option<Student>, RepositoryError> {
        let mut state = self.store.write()?;
        match state.students.get_mut(student.id()) {
            Some(stored) => {
                *stored = student.clone();
                Ok(Some(student.clone()))
            }
            None => Ok(None),
        }
    }

    fn delete(&self, id: &StudentId) -> Result<bool, RepositoryError> {
        let mut state = self.store.write()?;
        if state.students.remove(id).is_none() {
            return Ok(false);
        }

        let before = state.grades.len();
        state.grades.retain(|_, g| g.student_id() != id);
        debug!(student_id = %id, grades_removed = before - state.grades.len(), "student removed");
        Ok(true)
    }

    fn exists(&self, id: &StudentId) -> Result<bool, RepositoryError> {
        Ok(self.store.read()?.students.contains_key(id))
    }
}

// ============================================================================
// Subjects
// ============================================================================

/// In-memory Subject Repository
#[derive(Debug, Clone, Default)]
pub struct InMemorySubjectRepository {
    store: InMemoryStore,
}

impl InMemorySubjectRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

impl SubjectRepository for InMemorySubjectRepository {
    fn create(&self, subject: Subject) -> Result<Option<Subject>, RepositoryError> {
        let mut state = self.store.write()?;
        if state.subjects.contains_key(subject.id()) {
            return Err(RepositoryError::Conflict {
                id: subject.id().to_string(),
            });
        }
        state.subjects.insert(subject.id().clone(), subject.clone());
        Ok(Some(subject))
    }

    fn get_by_id(&self, id: &SubjectId) -> Result<Option<Subject>, RepositoryError> {
        Ok(self.store.read()?.subjects.get(id).cloned())
    }

    fn get_all(&self, query: &ListQuery<SubjectSortField>) -> Result<Vec<Subject>, RepositoryError> {
        let state = self.store.read()?;
        Ok(sorted_page(state.subjects.values().cloned(), query, compare_subjects))
    }

    fn update(&self, subject: &Subject) -> Result<Option<Subject>, RepositoryError> {
        let mut state = self.store.write()?;
        match state.subjects.get_mut(subject.id()) {
            Some(stored) => {
                *stored = subject.clone();
                Ok(Some(subject.clone()))
            }
            None => Ok(None),
        }
    }

    fn delete(&self, id: &SubjectId) -> Result<bool, RepositoryError> {
        let mut state = self.store.write()?;
        if state.subjects.remove(id).is_none() {
            return Ok(false);
        }

        let before = state.grades.len();
        state.grades.retain(|_, g| g.subject_id() != id);
        debug!(subject_id = %id, grades_removed = before - state.grades.len(), "subject removed");
        Ok(true)
    }

    fn exists(&self, id: &SubjectId) -> Result<bool, RepositoryError> {
        Ok(self.store.read()?.subjects.contains_key(id))
    }
}

// ============================================================================
// Grades
// ============================================================================

/// In-memory Grade Repository
///
/// Grade ids come from a counter kept in the store. A student is regular
/// when none of their grades is below `passing_grade`.
#[derive(Debug, Clone)]
pub struct InMemoryGradeRepository {
    store: InMemoryStore,
    passing_grade: f64,
}

impl InMemoryGradeRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self {
            store,
            passing_grade: DEFAULT_PASSING_GRADE,
        }
    }

    pub fn with_passing_grade(mut self, passing_grade: f64) -> Self {
        self.passing_grade = passing_grade;
        self
    }
}

impl GradeRepository for InMemoryGradeRepository {
    /// Grades pointing at unknown students or subjects are not stored
    fn create(&self, grade: NewGrade) -> Result<Option<Grade>, RepositoryError> {
        let mut state = self.store.write()?;
        if !state.students.contains_key(&grade.student_id)
            || !state.subjects.contains_key(&grade.subject_id)
        {
            warn!(
                student_id = %grade.student_id,
                subject_id = %grade.subject_id,
                "grade references a missing record"
            );
            return Ok(None);
        }

        let id = GradeId::new(state.next_grade_id);
        state.next_grade_id += 1;

        let grade = Grade::new(id, grade);
        state.grades.insert(id, grade.clone());
        Ok(Some(grade))
    }

    fn get_by_id(&self, id: GradeId) -> Result<Option<Grade>, RepositoryError> {
        Ok(self.store.read()?.grades.get(&id).cloned())
    }

    fn get_all(&self, query: &ListQuery<GradeSortField>) -> Result<Vec<Grade>, RepositoryError> {
        let state = self.store.read()?;
        Ok(sorted_page(state.grades.values().cloned(), query, compare_grades))
    }

    fn update(&self, grade: &Grade) -> Result<Option<Grade>, RepositoryError> {
        let mut state = self.store.write()?;
        match state.grades.get_mut(&grade.id()) {
            Some(stored) => {
                *stored = grade.clone();
                Ok(Some(grade.clone()))
            }
            None => Ok(None),
        }
    }

    fn delete(&self, id: GradeId) -> Result<bool, RepositoryError> {
        Ok(self.store.write()?.grades.remove(&id).is_some())
    }

    fn exists(&self, id: GradeId) -> Result<bool, RepositoryError> {
        Ok(self.store.read()?.grades.contains_key(&id))
    }

    fn get_by_student_id(&self, student_id: &StudentId) -> Result<Vec<Grade>, RepositoryError> {
        Ok(self
            .store
            .read()?
            .grades
            .values()
            .filter(|g| g.student_id() == student_id)
            .cloned()
            .collect())
    }

    fn get_by_subject_id(&self, subject_id: &SubjectId) -> Result<Vec<Grade>, RepositoryError> {
        Ok(self
            .store
            .read()?
            .grades
            .values()
            .filter(|g| g.subject_id() == subject_id)
            .cloned()
            .collect())
    }

    fn get_student_grades_to_show(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<GradeToShowStudent>, RepositoryError> {
        let state = self.store.read()?;
        Ok(state
            .grades
            .values()
            .filter(|g| g.student_id() == student_id)
            .filter_map(|g| {
                let subject = state.subjects.get(g.subject_id())?;
                Some(GradeToShowStudent {
                    id: g.id(),
                    subject: subject.name().to_string(),
                    value: g.value(),
                })
            })
            .collect())
    }

    fn get_subject_grades_to_show(
        &self,
        subject_id: &SubjectId,
    ) -> Result<Vec<GradeToShowSubject>, RepositoryError> {
        let state = self.store.read()?;
        Ok(state
            .grades
            .values()
            .filter(|g| g.subject_id() == subject_id)
            .filter_map(|g| {
                let student = state.students.get(g.student_id())?;
                Some(GradeToShowSubject {
                    id: g.id(),
                    student: student.full_name(),
                    value: g.value(),
                })
            })
            .collect())
    }

    fn is_regular_student(&self, student_id: &StudentId) -> Result<bool, RepositoryError> {
        Ok(self
            .store
            .read()?
            .grades
            .values()
            .filter(|g| g.student_id() == student_id)
            .all(|g| g.value() >= self.passing_grade))
    }
}
