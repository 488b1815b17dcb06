//! Application error type shared by the quiz handlers.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::scoring::ScoringError;
use crate::ports::GatewayError;

/// Errors returned by quiz command and query handlers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuizError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error("Usuario no encontrado")]
    UserNotFound(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl QuizError {
    pub fn validation(message: impl Into<String>) -> Self {
        QuizError::Validation(message.into())
    }

    /// Whether the request itself was malformed.
    pub fn is_client_error(&self) -> bool {
        matches!(self, QuizError::Validation(_) | QuizError::Scoring(_))
    }
}

impl From<ValidationError> for QuizError {
    fn from(err: ValidationError) -> Self {
        QuizError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_error_keeps_its_message() {
        let err: QuizError = ScoringError::InvalidIntensity {
            question: "P1".to_string(),
            value: "\"abc\"".to_string(),
        }
        .into();

        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Invalid intensity value for question 'P1': \"abc\"");
    }

    #[test]
    fn gateway_error_is_not_a_client_error() {
        let err: QuizError = GatewayError::unavailable("connection refused").into();
        assert!(!err.is_client_error());
        assert_eq!(err.to_string(), "Spreadsheet provider unavailable: connection refused");
    }

    #[test]
    fn validation_error_converts_to_message() {
        let err: QuizError = ValidationError::empty_field("nombre").into();
        assert_eq!(err.to_string(), "Field 'nombre' cannot be empty");
    }
}
