//! Domain Models - The vocabulary of the school records system
//!
//! Entities carry identity (students, subjects, grades). Projections are
//! read-only joins built for display and are never persisted.

pub mod grade;
pub mod report;
pub mod student;
pub mod subject;

/// A field value that breaks an entity invariant
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A grade value outside the allowed range (or NaN)
    GradeOutOfRange { value: f64 },
    /// A required text field was empty or whitespace
    BlankField { field: &'static str },
    /// The email address is not usable
    InvalidEmail { email: String },
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValidationError::GradeOutOfRange { value } => write!(
                f,
                "Grade value {} is outside the range [{}, {}]",
                value,
                grade::GRADE_MIN,
                grade::GRADE_MAX
            ),
            ValidationError::BlankField { field } => {
                write!(f, "Field '{}' must not be blank", field)
            }
            ValidationError::InvalidEmail { email } => {
                write!(f, "'{}' is not a valid email address", email)
            }
        }
    }
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField { field });
    }
    Ok(())
}
