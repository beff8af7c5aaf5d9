//! Subject - A course offered in a given semester

use super::{require_text, ValidationError};

/// Unique identifier for a Subject (UUID-shaped string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectId(String);

impl SubjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Subject data before an id has been allocated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubject {
    pub name: String,
    pub description: String,
    pub credits: i32,
    pub semester: i32,
}

impl NewSubject {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        credits: i32,
        semester: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            credits,
            semester,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

/// Subject entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    id: SubjectId,
    name: String,
    description: String,
    credits: i32,
    semester: i32,
}

impl Subject {
    pub fn new(id: SubjectId, draft: NewSubject) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            credits: draft.credits,
            semester: draft.semester,
        }
    }

    pub fn id(&self) -> &SubjectId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn credits(&self) -> i32 {
        self.credits
    }

    pub fn semester(&self) -> i32 {
        self.semester
    }

    /// Overwrite only the fields present in the patch
    pub fn apply(&mut self, patch: SubjectPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(credits) = patch.credits {
            self.credits = credits;
        }
        if let Some(semester) = patch.semester {
            self.semester = semester;
        }
    }
}

/// Partial update for a Subject
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub credits: Option<i32>,
    pub semester: Option<i32>,
}

impl SubjectPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.credits.is_none()
            && self.semester.is_none()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.name {
            Some(name) => require_text("name", name),
            None => Ok(()),
        }
    }
}
