//! UpdateUserProgressHandler - Command handler updating a user's row.

use serde_json::Value;
use std::sync::Arc;

use crate::application::sheet_rows::{find_user_row, user_column, user_columns};
use crate::domain::quiz::{TestStatus, UserProgress};
use crate::ports::{GatewayError, SpreadsheetGateway};

use super::QuizError;

/// Command to update a user's progress.
#[derive(Debug, Clone)]
pub struct UpdateUserProgressCommand {
    /// The user's `nombre/correo` key.
    pub user: String,
    pub last_question: Option<Value>,
    pub current_subtype: Option<String>,
    pub status: Option<String>,
}

impl UpdateUserProgressCommand {
    fn progress(&self) -> UserProgress {
        UserProgress {
            last_question: self
                .last_question
                .clone()
                .unwrap_or_else(|| Value::String(String::new())),
            current_subtype: self.current_subtype.clone().unwrap_or_default(),
            status: self
                .status
                .as_deref()
                .map(TestStatus::from_text)
                .unwrap_or_default(),
        }
    }
}

/// Handler locating a user by linear scan and rewriting its progress cells.
pub struct UpdateUserProgressHandler {
    gateway: Arc<dyn SpreadsheetGateway>,
    table: String,
}

impl UpdateUserProgressHandler {
    pub fn new(gateway: Arc<dyn SpreadsheetGateway>, table: impl Into<String>) -> Self {
        Self {
            gateway,
            table: table.into(),
        }
    }

    pub async fn handle(&self, cmd: UpdateUserProgressCommand) -> Result<(), QuizError> {
        let records = self.gateway.read_all_rows(&self.table).await?;
        let row = find_user_row(&records, &cmd.user).ok_or_else(|| {
            tracing::debug!(user = %cmd.user, "User not found for progress update");
            QuizError::UserNotFound(cmd.user.clone())
        })?;

        let progress = cmd.progress();
        let updates = [
            (user_columns::LAST_QUESTION, progress.last_question),
            (
                user_columns::RESULTS,
                Value::String(progress.current_subtype),
            ),
            (
                user_columns::TEST_STATUS,
                Value::String(progress.status.to_string()),
            ),
        ];

        for (column, value) in updates {
            let letter = user_column(column)
                .ok_or_else(|| GatewayError::InvalidCell(format!("unknown column '{}'", column)))?;
            self.gateway
                .update_cell(&self.table, row, &letter, value)
                .await?;
        }

        tracing::info!(user = %cmd.user, row, "Updated user progress");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sheets::InMemorySpreadsheet;
    use serde_json::json;

    fn user_row(name_email: &str) -> Vec<Value> {
        vec![
            json!("Usuario_1"),
            json!(name_email),
            json!("En curso"),
            json!("2024-01-15 10:30:05"),
            json!(""),
            json!(""),
            json!(""),
            json!(""),
        ]
    }

    fn sheet() -> Arc<InMemorySpreadsheet> {
        Arc::new(InMemorySpreadsheet::new().with_table(
            "Usuarios",
            &user_columns::ALL,
            vec![user_row("Ana/ana@example.com"), user_row("Luis/luis@example.com")],
        ))
    }

    #[tokio::test]
    async fn updates_progress_cells_of_matching_row() {
        let sheet = sheet();
        let handler = UpdateUserProgressHandler::new(sheet.clone(), "Usuarios");

        handler
            .handle(UpdateUserProgressCommand {
                user: "Luis/luis@example.com".to_string(),
                last_question: Some(json!(12)),
                current_subtype: Some("SX4".to_string()),
                status: Some("Finalizado".to_string()),
            })
            .await
            .unwrap();

        let rows = sheet.rows("Usuarios").await.unwrap();
        assert_eq!(rows[1][2], json!("Finalizado"));
        assert_eq!(rows[1][4], json!(12));
        assert_eq!(rows[1][6], json!("SX4"));
        assert_eq!(rows[0], user_row("Ana/ana@example.com"));
    }

    #[tokio::test]
    async fn status_defaults_to_in_progress() {
        let sheet = sheet();
        let handler = UpdateUserProgressHandler::new(sheet.clone(), "Usuarios");

        handler
            .handle(UpdateUserProgressCommand {
                user: "Ana/ana@example.com".to_string(),
                last_question: None,
                current_subtype: None,
                status: None,
            })
            .await
            .unwrap();

        let rows = sheet.rows("Usuarios").await.unwrap();
        assert_eq!(rows[0][2], json!("En curso"));
        assert_eq!(rows[0][4], json!(""));
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let handler = UpdateUserProgressHandler::new(sheet(), "Usuarios");

        let result = handler
            .handle(UpdateUserProgressCommand {
                user: "Nadie/".to_string(),
                last_question: None,
                current_subtype: None,
                status: None,
            })
            .await;

        assert_eq!(result, Err(QuizError::UserNotFound("Nadie/".to_string())));
    }
}
