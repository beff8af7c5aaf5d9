//! Student id format: `A{YY}00{NNNN}`
//!
//! YY are the last two digits of the enrolment year and NNNN a four-digit,
//! zero-padded number. Picking the number is left to the caller.

use crate::model::student::StudentId;

/// Year used when none is configured
pub const DEFAULT_ENROLMENT_YEAR: u16 = 2025;

/// Largest number that fits the four-digit suffix
pub const MAX_STUDENT_NUMBER: u16 = 9999;

/// Formatter for student ids of one enrolment year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentIdFormat {
    year: u16,
}

impl StudentIdFormat {
    pub fn new(year: u16) -> Self {
        Self { year }
    }

    /// Fixed part of every id for this year, e.g. `A2500`
    pub fn prefix(&self) -> String {
        format!("A{:02}00", self.year % 100)
    }

    /// Build the id for a student number. Numbers above 9999 wrap.
    pub fn format(&self, number: u16) -> StudentId {
        let number = number % (MAX_STUDENT_NUMBER + 1);
        StudentId::new(format!("{}{:04}", self.prefix(), number))
    }

    /// Whether `id` has this year's shape
    pub fn matches(&self, id: &str) -> bool {
        match id.strip_prefix(&self.prefix()) {
            Some(digits) => digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()),
            None => false,
        }
    }
}

impl Default for StudentIdFormat {
    fn default() -> Self {
        Self::new(DEFAULT_ENROLMENT_YEAR)
    }
}
