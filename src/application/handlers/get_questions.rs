//! GetQuestionsHandler - Query handler listing the quiz questions.

use std::sync::Arc;

use crate::application::sheet_rows::question_from_record;
use crate::domain::quiz::Question;
use crate::ports::SpreadsheetGateway;

use super::QuizError;

/// Query for every question in the questions table.
#[derive(Debug, Clone, Default)]
pub struct GetQuestionsQuery;

/// Handler for reading the questions table.
pub struct GetQuestionsHandler {
    gateway: Arc<dyn SpreadsheetGateway>,
    table: String,
}

impl GetQuestionsHandler {
    pub fn new(gateway: Arc<dyn SpreadsheetGateway>, table: impl Into<String>) -> Self {
        Self {
            gateway,
            table: table.into(),
        }
    }

    pub async fn handle(&self, _query: GetQuestionsQuery) -> Result<Vec<Question>, QuizError> {
        let records = self.gateway.read_all_rows(&self.table).await?;
        let questions: Vec<Question> = records.iter().map(question_from_record).collect();

        tracing::debug!(table = %self.table, count = questions.len(), "Loaded questions");
        Ok(questions)
    }
}
