//! Use case failures
//!
//! A fixed set of kinds the inbound surface maps to its own status codes.

use sicei_domain::{RepositoryError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UseCaseError {
    /// Required correlated ids were missing
    #[error("{0}")]
    NotEnoughArguments(String),

    /// A value broke an entity invariant or a request was malformed
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    ResourceNotFound(String),

    #[error("{0}")]
    ResourceAlreadyExists(String),

    /// Storage produced nothing on create, or no free id could be found
    #[error("{0}")]
    CannotCreate(String),

    #[error("{0}")]
    CannotUpdateResource(String),

    #[error("{0}")]
    CannotDeleteResource(String),

    #[error("Repository error: {0}")]
    Repository(#[source] RepositoryError),
}

impl UseCaseError {
    /// Stable name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            UseCaseError::NotEnoughArguments(_) => "NotEnoughArguments",
            UseCaseError::Validation(_) => "Validation",
            UseCaseError::ResourceNotFound(_) => "ResourceNotFound",
            UseCaseError::ResourceAlreadyExists(_) => "ResourceAlreadyExists",
            UseCaseError::CannotCreate(_) => "CannotCreate",
            UseCaseError::CannotUpdateResource(_) => "CannotUpdateResource",
            UseCaseError::CannotDeleteResource(_) => "CannotDeleteResource",
            UseCaseError::Repository(_) => "Repository",
        }
    }

    /// HTTP-style status for transports that want one
    pub fn status_code(&self) -> u16 {
        match self {
            UseCaseError::NotEnoughArguments(_) => 400,
            UseCaseError::ResourceNotFound(_) => 404,
            UseCaseError::ResourceAlreadyExists(_)
            | UseCaseError::CannotCreate(_)
            | UseCaseError::CannotUpdateResource(_)
            | UseCaseError::CannotDeleteResource(_) => 409,
            UseCaseError::Validation(_) => 422,
            UseCaseError::Repository(_) => 500,
        }
    }
}

impl From<RepositoryError> for UseCaseError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict { id } => {
                UseCaseError::ResourceAlreadyExists(format!("Resource with ID '{}' already exists", id))
            }
            other => UseCaseError::Repository(other),
        }
    }
}

impl From<ValidationError> for UseCaseError {
    fn from(err: ValidationError) -> Self {
        UseCaseError::Validation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UseCaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_maps_to_already_exists() {
        let err: UseCaseError = RepositoryError::Conflict {
            id: "A25000001".to_string(),
        }
        .into();

        assert_eq!(err.kind(), "ResourceAlreadyExists");
        assert_eq!(err.status_code(), 409);
    }

    #[test]
    fn test_persistence_error_is_internal() {
        let err: UseCaseError = RepositoryError::PersistenceError {
            message: "disk full".to_string(),
        }
        .into();

        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "Repository error: Persistence error: disk full");
    }

    #[test]
    fn test_validation_message() {
        let err: UseCaseError = ValidationError::GradeOutOfRange { value: 120.0 }.into();
        assert_eq!(err.kind(), "Validation");
        assert!(err.to_string().contains("120"));
    }
}
