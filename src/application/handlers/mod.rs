//! Application handlers.
//!
//! One handler per use case, each holding the gateway it talks to.

mod calculate_results;
mod errors;
mod get_questions;
mod record_answer;
mod register_user;
mod update_user_progress;

pub use calculate_results::{CalculateResultsCommand, CalculateResultsHandler};
pub use errors::QuizError;
pub use get_questions::{GetQuestionsHandler, GetQuestionsQuery};
pub use record_answer::{RecordAnswerCommand, RecordAnswerHandler, RecordAnswerResult};
pub use register_user::{RegisterUserCommand, RegisterUserHandler, RegisterUserResult};
pub use update_user_progress::{UpdateUserProgressCommand, UpdateUserProgressHandler};
