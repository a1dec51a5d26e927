//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    /// Repository error for a stored value that no longer parses
    pub fn corrupt_column<T: AsRef<str>>(column: T, value: &str) -> Self {
        Self::Repository(format!(
            "Unrecognized value {:?} in column {}",
            value,
            column.as_ref()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_column_names_value_and_column() {
        let err = DomainError::corrupt_column("leave_requests.status", "pending");

        assert!(matches!(err, DomainError::Repository(_)));
        assert_eq!(
            err.to_string(),
            "Repository error: Unrecognized value \"pending\" in column leave_requests.status"
        );
    }
}
