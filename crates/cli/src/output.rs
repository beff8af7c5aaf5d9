//! JSON output for results and failures

use chrono::Utc;
use serde::Serialize;
use sicei_usecase::UseCaseError;

/// What a command produced, and whether the store changed
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub body: serde_json::Value,
    pub changed: bool,
}

impl Outcome {
    pub fn read<T: Serialize>(body: &T) -> anyhow::Result<Self> {
        Ok(Self {
            body: serde_json::to_value(body)?,
            changed: false,
        })
    }

    pub fn changed<T: Serialize>(body: &T) -> anyhow::Result<Self> {
        Ok(Self {
            body: serde_json::to_value(body)?,
            changed: true,
        })
    }
}

/// Failure as printed to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub timestamp: String,
    /// HTTP-style status of the failure kind
    pub status: u16,
}

impl ErrorDetail {
    /// Use case failures keep their kind; anything else is reported as an
    /// unexpected exception
    pub fn from_error(err: &anyhow::Error) -> Self {
        let (kind, status) = match err.downcast_ref::<UseCaseError>() {
            Some(use_case) => (use_case.kind().to_string(), use_case.status_code()),
            None => ("Exception".to_string(), 500),
        };
        Self {
            kind,
            message: format!("{:#}", err),
            timestamp: Utc::now().to_rfc3339(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_case_error_keeps_kind() {
        let err = anyhow::Error::new(UseCaseError::ResourceNotFound(
            "Grade cannot be found by id".to_string(),
        ));

        let detail = ErrorDetail::from_error(&err);
        let json = serde_json::to_value(&detail).unwrap();

        assert_eq!(json["type"], "ResourceNotFound");
        assert_eq!(json["message"], "Grade cannot be found by id");
        assert_eq!(json["status"], 404);
        assert!(json["timestamp"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_other_errors_are_exceptions() {
        let detail = ErrorDetail::from_error(&anyhow::anyhow!("disk on fire"));
        assert_eq!(detail.kind, "Exception");
        assert_eq!(detail.status, 500);
    }
}
