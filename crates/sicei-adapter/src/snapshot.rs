//! JSON snapshot of the in-memory store
//!
//! ```json
//! { "students": [..], "subjects": [..], "grades": [..], "next_grade_id": 4 }
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sicei_domain::model::grade::validate_value;
use sicei_domain::{Grade, GradeService, RepositoryError, Student, StudentId, Subject};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::mapper::{GradeRecord, StudentRecord, SubjectRecord};
use crate::repository::in_memory::{InMemoryStore, StoreState};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Repository(#[from] RepositoryError),
}

fn first_grade_id() -> i64 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub students: Vec<StudentRecord>,
    #[serde(default)]
    pub subjects: Vec<SubjectRecord>,
    #[serde(default)]
    pub grades: Vec<GradeRecord>,
    #[serde(default = "first_grade_id")]
    pub next_grade_id: i64,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            students: Vec::new(),
            subjects: Vec::new(),
            grades: Vec::new(),
            next_grade_id: first_grade_id(),
        }
    }
}

impl Snapshot {
    /// Copy the current contents of a store
    pub fn capture(store: &InMemoryStore) -> Result<Self, SnapshotError> {
        let state = store.read()?;
        Ok(Self {
            students: state.students.values().map(StudentRecord::from).collect(),
            subjects: state.subjects.values().map(SubjectRecord::from).collect(),
            grades: state.grades.values().map(GradeRecord::from).collect(),
            next_grade_id: state.next_grade_id,
        })
    }

    /// Build a store holding these records.
    ///
    /// Grades with an out-of-range value or pointing at a missing student or
    /// subject are skipped, and the students who lost one get their average
    /// recomputed. The grade counter never goes below the highest id in the
    /// file + 1, skipped grades included, so a hand-edited file cannot cause
    /// id reuse.
    pub fn into_store(self) -> InMemoryStore {
        let mut state = StoreState::default();

        for record in self.students {
            let student = Student::from(record);
            state.students.insert(student.id().clone(), student);
        }
        for record in self.subjects {
            let subject = Subject::from(record);
            state.subjects.insert(subject.id().clone(), subject);
        }

        let mut highest: i64 = 0;
        let mut stale: BTreeSet<StudentId> = BTreeSet::new();
        for record in self.grades {
            let grade = Grade::from(record);
            highest = highest.max(grade.id().value());

            if let Err(e) = validate_value(grade.value()) {
                warn!(grade_id = %grade.id(), error = %e, "skipping grade with invalid value");
                stale.insert(grade.student_id().clone());
                continue;
            }
            if !state.students.contains_key(grade.student_id())
                || !state.subjects.contains_key(grade.subject_id())
            {
                warn!(
                    grade_id = %grade.id(),
                    student_id = %grade.student_id(),
                    subject_id = %grade.subject_id(),
                    "skipping grade with dangling reference"
                );
                stale.insert(grade.student_id().clone());
                continue;
            }
            state.grades.insert(grade.id(), grade);
        }
        state.next_grade_id = self.next_grade_id.max(highest + 1);

        let service = GradeService::new();
        for student_id in &stale {
            let average = service.average_of(
                state
                    .grades
                    .values()
                    .filter(|g| g.student_id() == student_id)
                    .map(Grade::value),
            );
            if let Some(student) = state.students.get_mut(student_id) {
                student.set_average(average);
            }
        }

        InMemoryStore::from_state(state)
    }

    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&content)?;
        debug!(
            path = %path.display(),
            students = snapshot.students.len(),
            subjects = snapshot.subjects.len(),
            grades = snapshot.grades.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Like [`Snapshot::load`], but a missing file is an empty snapshot
    pub fn load_or_default(path: &Path) -> Result<Self, SnapshotError> {
        match Self::load(path) {
            Err(SnapshotError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "no snapshot yet, starting empty");
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        debug!(path = %path.display(), "snapshot saved");
        Ok(())
    }
}
