use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapError {
    #[error("{message}")]
    InvalidInput { field: String, message: String },

    #[error("Missing required input: {0}")]
    MissingInput(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Daily AI limit reached ({limit}). Upgrade for unlimited plans.")]
    QuotaExceeded { limit: u32 },

    #[error("AI returned an invalid plan: {0}")]
    MalformedResponse(String),

    #[error("AI request failed: {0}")]
    Completion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl SnapError {
    /// Build a validation failure attributed to a single form field.
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        SnapError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn missing(field: &str) -> Self {
        SnapError::MissingInput(field.to_string())
    }

    /// The input field a validation error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            SnapError::InvalidInput { field, .. } => Some(field),
            SnapError::MissingInput(field) => Some(field),
            _ => None,
        }
    }

    /// Whether a caller may retry the operation that produced this error.
    ///
    /// Transport failures and malformed AI payloads are transient; auth,
    /// quota and validation failures are terminal.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SnapError::Completion(_) | SnapError::MalformedResponse(_) | SnapError::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SnapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_carries_field() {
        let err = SnapError::invalid("age", "Age must be between 13 and 100.");
        assert_eq!(err.field(), Some("age"));
        assert_eq!(err.to_string(), "Age must be between 13 and 100.");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_retry_classification() {
        assert!(SnapError::MalformedResponse("eof".into()).is_retryable());
        assert!(SnapError::Completion("timeout".into()).is_retryable());
        assert!(!SnapError::QuotaExceeded { limit: 5 }.is_retryable());
        assert!(!SnapError::Unauthorized("expired".into()).is_retryable());
    }
}
