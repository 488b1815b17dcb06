//! Quiz Module - Questions, answer log entries and user records.
//!
//! Each type mirrors one spreadsheet table row. Conversion to and from
//! sheet cells lives in the application layer (`application::sheet_rows`).

mod answer_log;
mod question;
mod user;

pub use answer_log::AnswerLogEntry;
pub use question::Question;
pub use user::{NewUser, TestStatus, UserProgress};
