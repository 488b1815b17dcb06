//! Foundation module - Shared domain primitives.
//!
//! Value objects and error types used across the quiz and scoring modules.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{TestId, UserId};
pub use timestamp::Timestamp;
