//! Student - A person enrolled in a semester
//!
//! A Student is an Entity. The id is assigned once at creation and never
//! changes; everything else can be patched. `average` is a cached value
//! owned by the grade flows, not by student updates.

use super::{require_text, ValidationError};

/// Unique identifier for a Student (e.g. `A25000042`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for StudentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Student data before an id has been allocated
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub semester: i32,
}

impl NewStudent {
    pub fn new(
        name: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
        semester: i32,
    ) -> Self {
        Self {
            name: name.into(),
            lastname: lastname.into(),
            email: email.into(),
            semester,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("lastname", &self.lastname)?;
        validate_email(&self.email)
    }
}

/// Student entity
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: StudentId,
    name: String,
    lastname: String,
    email: String,
    semester: i32,
    /// Mean of the student's grade values, 0.0 without grades
    average: f64,
}

impl Student {
    /// Create a freshly enrolled student (no grades yet)
    pub fn new(id: StudentId, draft: NewStudent) -> Self {
        Self {
            id,
            name: draft.name,
            lastname: draft.lastname,
            email: draft.email,
            semester: draft.semester,
            average: 0.0,
        }
    }

    /// Rebuild a student from stored fields
    pub fn restore(
        id: StudentId,
        name: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
        semester: i32,
        average: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            lastname: lastname.into(),
            email: email.into(),
            semester,
            average,
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lastname(&self) -> &str {
        &self.lastname
    }

    /// "name lastname", as shown in subject reports
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.lastname)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn semester(&self) -> i32 {
        self.semester
    }

    pub fn average(&self) -> f64 {
        self.average
    }

    // ========== Mutations ==========

    /// Overwrite the cached average
    pub fn set_average(&mut self, average: f64) {
        self.average = average;
    }

    /// Overwrite only the fields present in the patch
    pub fn apply(&mut self, patch: StudentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(lastname) = patch.lastname {
            self.lastname = lastname;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(semester) = patch.semester {
            self.semester = semester;
        }
    }
}

/// Partial update for a Student. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub semester: Option<i32>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.lastname.is_none()
            && self.email.is_none()
            && self.semester.is_none()
    }

    /// Validate the fields that are present
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }
        if let Some(lastname) = &self.lastname {
            require_text("lastname", lastname)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }
}

/// Accepts `local@domain.tld`: one `@`, non-empty local part, a dot inside the domain.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidEmail {
        email: email.to_string(),
    };

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    match domain.split_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() && !domain.ends_with('.') => {
            Ok(())
        }
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Student {
        Student::new(
            StudentId::new("A25000001"),
            NewStudent::new("Alice", "Liddell", "alice@school.edu", 3),
        )
    }

    #[test]
    fn test_new_student_starts_without_average() {
        let student = alice();
        assert_eq!(student.average(), 0.0);
        assert_eq!(student.full_name(), "Alice Liddell");
    }

    #[test]
    fn test_patch_overwrites_only_present_fields() {
        let mut student = alice();

        student.apply(StudentPatch {
            semester: Some(4),
            ..Default::default()
        });

        assert_eq!(student.semester(), 4);
        assert_eq!(student.name(), "Alice");
        assert_eq!(student.email(), "alice@school.edu");
        assert_eq!(student.id().as_str(), "A25000001");
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("alice@school.edu").is_ok());
        assert!(validate_email("alice.school.edu").is_err());
        assert!(validate_email("@school.edu").is_err());
        assert!(validate_email("alice@school").is_err());
        assert!(validate_email("alice@school.").is_err());
        assert!(validate_email("al ice@school.edu").is_err());
    }

    #[test]
    fn test_blank_name_rejected() {
        let draft = NewStudent::new("  ", "Liddell", "alice@school.edu", 1);
        assert_eq!(
            draft.validate(),
            Err(ValidationError::BlankField { field: "name" })
        );
    }
}
