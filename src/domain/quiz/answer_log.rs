//! Answer log entry.

use serde_json::Value;

use crate::domain::foundation::{TestId, Timestamp, UserId};

/// One recorded answer, appended to the answers table.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerLogEntry {
    pub test_id: TestId,
    pub user: UserId,
    pub question_id: Value,
    pub response: Value,
    /// Weight of the question, empty when not supplied.
    pub weight: Value,
    /// Most likely subtype so far, empty when not supplied.
    pub current_subtype: String,
    pub recorded_at: Timestamp,
}

impl AnswerLogEntry {
    /// Cells in table column order.
    pub fn to_row(&self) -> Vec<Value> {
        vec![
            Value::String(self.test_id.to_string()),
            Value::String(self.user.to_string()),
            self.question_id.clone(),
            self.response.clone(),
            self.weight.clone(),
            Value::String(self.current_subtype.clone()),
            Value::String(self.recorded_at.to_sheet_string()),
        ]
    }
}
