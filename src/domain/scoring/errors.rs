//! Scoring error types.

use thiserror::Error;

/// Errors that abort a scoring run.
///
/// Scoring never returns partial results: the first malformed answer
/// fails the whole computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("Invalid intensity value for question '{question}': {value}")]
    InvalidIntensity { question: String, value: String },
}
