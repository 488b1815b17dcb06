//! RegisterUserHandler - Command handler registering a quiz user.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::quiz::NewUser;
use crate::ports::SpreadsheetGateway;

use super::QuizError;

/// Command to register a user.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub name: String,
    pub email: Option<String>,
}

/// Result of a successful registration.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterUserResult {
    pub user_id: UserId,
}

/// Handler for appending users to the users table.
pub struct RegisterUserHandler {
    gateway: Arc<dyn SpreadsheetGateway>,
    table: String,
}

impl RegisterUserHandler {
    pub fn new(gateway: Arc<dyn SpreadsheetGateway>, table: impl Into<String>) -> Self {
        Self {
            gateway,
            table: table.into(),
        }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<RegisterUserResult, QuizError> {
        let user = NewUser::register(cmd.name, cmd.email.unwrap_or_default(), Timestamp::now())?;

        self.gateway.append_row(&self.table, user.to_row()).await?;

        tracing::info!(user_id = %user.id, "Registered user");
        Ok(RegisterUserResult { user_id: user.id })
    }
}
