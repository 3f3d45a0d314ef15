use thiserror::Error;

/// Raised when a candidate record cannot be normalized.
///
/// `field` names the offending input field (`title`, `amount`, `goal`, ...)
/// so callers can surface it next to the right form control.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Error type that captures record store failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Persistence error: {0}")]
    Persistence(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_field() {
        let err = ValidationError::new("title", "must not be empty");
        assert_eq!(err.to_string(), "invalid title: must not be empty");
    }

    #[test]
    fn ledger_error_wraps_validation_transparently() {
        let err = LedgerError::from(ValidationError::new("amount", "must be finite"));
        assert_eq!(err.to_string(), "invalid amount: must be finite");
    }
}
