//! CalculateResultsHandler - Runs the scoring pipeline for a set of answers.

use serde_json::Value;
use std::sync::Arc;

use crate::application::sheet_rows::subtype_catalog;
use crate::domain::scoring::{Answer, ScoringResult, SubtypeAggregator};
use crate::ports::SpreadsheetGateway;

use super::QuizError;

/// Command to score a user's answers.
#[derive(Debug, Clone)]
pub struct CalculateResultsCommand {
    pub answers: Vec<Answer>,
    /// Questions the client has not asked yet. Accepted but not used.
    pub available_questions: Option<Value>,
}

/// Handler scoring answers and enriching the winner from the subtype table.
pub struct CalculateResultsHandler {
    gateway: Arc<dyn SpreadsheetGateway>,
    table: String,
}

impl CalculateResultsHandler {
    pub fn new(gateway: Arc<dyn SpreadsheetGateway>, table: impl Into<String>) -> Self {
        Self {
            gateway,
            table: table.into(),
        }
    }

    /// Aggregates before touching the gateway, so malformed answers fail
    /// without any I/O. The subtype table is read once per call.
    pub async fn handle(&self, cmd: CalculateResultsCommand) -> Result<ScoringResult, QuizError> {
        let scores = SubtypeAggregator::aggregate(&cmd.answers)?;

        let records = self.gateway.read_all_rows(&self.table).await?;
        let catalog = subtype_catalog(&records);

        let result = ScoringResult::assemble(&cmd.answers, scores, &catalog);

        tracing::info!(
            answers = cmd.answers.len(),
            subtypes = result.scores.len(),
            principal = result.principal.as_deref().unwrap_or("-"),
            described = !result.description.is_placeholder(),
            "Calculated results"
        );
        Ok(result)
    }
}
