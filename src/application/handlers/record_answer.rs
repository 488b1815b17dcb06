//! RecordAnswerHandler - Command handler appending an answer to the log.

use serde_json::Value;
use std::sync::Arc;

use crate::domain::foundation::{TestId, Timestamp, UserId};
use crate::domain::quiz::AnswerLogEntry;
use crate::ports::SpreadsheetGateway;

use super::QuizError;

/// Command to record one answer.
#[derive(Debug, Clone)]
pub struct RecordAnswerCommand {
    pub user: String,
    pub question_id: Value,
    pub response: Value,
    pub weight: Option<Value>,
    pub current_subtype: Option<String>,
    /// Groups answers of one attempt; generated from the clock when absent.
    pub test_id: Option<String>,
}

/// Result of a recorded answer.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordAnswerResult {
    pub test_id: TestId,
}

/// Handler for appending answers to the answers table.
pub struct RecordAnswerHandler {
    gateway: Arc<dyn SpreadsheetGateway>,
    table: String,
}

impl RecordAnswerHandler {
    pub fn new(gateway: Arc<dyn SpreadsheetGateway>, table: impl Into<String>) -> Self {
        Self {
            gateway,
            table: table.into(),
        }
    }

    pub async fn handle(&self, cmd: RecordAnswerCommand) -> Result<RecordAnswerResult, QuizError> {
        let now = Timestamp::now();
        let test_id = match cmd.test_id {
            Some(id) => TestId::new(id)?,
            None => TestId::generate(&now),
        };

        let entry = AnswerLogEntry {
            test_id: test_id.clone(),
            user: UserId::new(cmd.user)?,
            question_id: cmd.question_id,
            response: cmd.response,
            weight: cmd.weight.unwrap_or_else(|| Value::String(String::new())),
            current_subtype: cmd.current_subtype.unwrap_or_default(),
            recorded_at: now,
        };

        self.gateway.append_row(&self.table, entry.to_row()).await?;

        tracing::info!(
            test_id = %entry.test_id,
            user = %entry.user,
            question = %entry.question_id,
            "Recorded answer"
        );
        Ok(RecordAnswerResult { test_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sheets::InMemorySpreadsheet;
    use crate::application::sheet_rows::ANSWER_LOG_HEADERS;
    use serde_json::json;

    fn sheet() -> Arc<InMemorySpreadsheet> {
        Arc::new(InMemorySpreadsheet::new().with_table("Respuestas", &ANSWER_LOG_HEADERS, vec![]))
    }

    fn command() -> RecordAnswerCommand {
        RecordAnswerCommand {
            user: "Ana/ana@example.com".to_string(),
            question_id: json!(7),
            response: json!(4),
            weight: Some(json!(2)),
            current_subtype: Some("SP1".to_string()),
            test_id: Some("Test_42".to_string()),
        }
    }

    #[tokio::test]
    async fn appends_row_with_supplied_values() {
        let sheet = sheet();
        let handler = RecordAnswerHandler::new(sheet.clone(), "Respuestas");

        let result = handler.handle(command()).await.unwrap();

        assert_eq!(result.test_id.as_str(), "Test_42");
        let rows = sheet.rows("Respuestas").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][..6], &[
            json!("Test_42"),
            json!("Ana/ana@example.com"),
            json!(7),
            json!(4),
            json!(2),
            json!("SP1"),
        ]);
        assert_eq!(rows[0][6].as_str().map(str::len), Some(19));
    }

    #[tokio::test]
    async fn optional_fields_default_to_empty_and_test_id_is_generated() {
        let sheet = sheet();
        let handler = RecordAnswerHandler::new(sheet.clone(), "Respuestas");
        let cmd = RecordAnswerCommand {
            weight: None,
            current_subtype: None,
            test_id: None,
            ..command()
        };

        let result = handler.handle(cmd).await.unwrap();

        assert!(result.test_id.as_str().starts_with("Test_"));
        let rows = sheet.rows("Respuestas").await.unwrap();
        assert_eq!(rows[0].len(), 7);
        assert_eq!(rows[0][4], json!(""));
        assert_eq!(rows[0][5], json!(""));
    }

    #[tokio::test]
    async fn blank_user_is_rejected_before_writing() {
        let sheet = sheet();
        let handler = RecordAnswerHandler::new(sheet.clone(), "Respuestas");
        let cmd = RecordAnswerCommand {
            user: "".to_string(),
            ..command()
        };

        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(QuizError::Validation(_))));
        assert!(sheet.rows("Respuestas").await.unwrap().is_empty());
    }
}
