//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates with the
//! spreadsheet gateway. Command handlers write rows, query handlers read
//! them, and `CalculateResultsHandler` runs the scoring pipeline.

pub mod handlers;
pub mod sheet_rows;

pub use handlers::{
    CalculateResultsCommand, CalculateResultsHandler, GetQuestionsHandler, GetQuestionsQuery,
    QuizError, RecordAnswerCommand, RecordAnswerHandler, RecordAnswerResult,
    RegisterUserCommand, RegisterUserHandler, RegisterUserResult, UpdateUserProgressCommand,
    UpdateUserProgressHandler,
};
