//! Quiz user records.

use serde_json::Value;
use std::fmt;

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

/// Progress state of a user's test.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TestStatus {
    #[default]
    InProgress,
    /// Any other status text the client sends, stored verbatim.
    Other(String),
}

impl TestStatus {
    pub fn from_text(text: &str) -> Self {
        if text == "En curso" {
            TestStatus::InProgress
        } else {
            TestStatus::Other(text.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TestStatus::InProgress => "En curso",
            TestStatus::Other(text) => text,
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user about to be appended to the users table.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub started_at: Timestamp,
}

impl NewUser {
    /// Registers a user starting now.
    pub fn register(
        name: impl Into<String>,
        email: impl Into<String>,
        started_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("nombre"));
        }
        Ok(Self {
            id: UserId::generate(&started_at),
            name,
            email: email.into(),
            started_at,
        })
    }

    /// The `nombre/correo` key users are later looked up by.
    pub fn name_email(&self) -> String {
        format!("{}/{}", self.name, self.email)
    }

    /// Cells in table column order; the last four start empty.
    pub fn to_row(&self) -> Vec<Value> {
        let empty = || Value::String(String::new());
        vec![
            Value::String(self.id.to_string()),
            Value::String(self.name_email()),
            Value::String(TestStatus::InProgress.to_string()),
            Value::String(self.started_at.to_sheet_string()),
            empty(),
            empty(),
            empty(),
            empty(),
        ]
    }
}

/// Progress update for an existing user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProgress {
    pub last_question: Value,
    pub current_subtype: String,
    pub status: TestStatus,
}
