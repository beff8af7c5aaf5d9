//! Id sources backed by `rand` and `uuid`

use rand::{thread_rng, Rng};
use sicei_domain::service::student_id::MAX_STUDENT_NUMBER;
use sicei_domain::{IdSource, StudentIdFormat};
use uuid::Uuid;

/// Student ids like `A25000042`: the enrolment prefix plus a random
/// four digit number
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStudentIdSource {
    format: StudentIdFormat,
}

impl RandomStudentIdSource {
    pub fn new(format: StudentIdFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> StudentIdFormat {
        self.format
    }
}

impl IdSource for RandomStudentIdSource {
    fn candidate(&self) -> String {
        let number = thread_rng().gen_range(0..=MAX_STUDENT_NUMBER);
        self.format.format(number).as_str().to_string()
    }
}

/// Random v4 uuids for subjects
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSubjectIdSource;

impl IdSource for UuidSubjectIdSource {
    fn candidate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
