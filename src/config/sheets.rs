//! Spreadsheet gateway configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use crate::ports::TableNames;

/// Spreadsheet gateway configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SheetsConfig {
    /// Which gateway backs the tables
    #[serde(default)]
    pub provider: SheetsProvider,

    /// Spreadsheet identifier (Google provider)
    pub spreadsheet_id: Option<String>,

    /// Bearer token for the spreadsheet API (Google provider)
    pub access_token: Option<Secret<String>>,

    /// API base URL (Google provider)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// JSON seed file for the in-memory provider
    pub seed_path: Option<PathBuf>,

    #[serde(default = "default_questions_table")]
    pub questions_table: String,

    #[serde(default = "default_answers_table")]
    pub answers_table: String,

    #[serde(default = "default_subtypes_table")]
    pub subtypes_table: String,

    #[serde(default = "default_users_table")]
    pub users_table: String,
}

/// Spreadsheet gateway provider
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SheetsProvider {
    Google,
    #[default]
    Memory,
}

impl SheetsConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Table names used by the quiz handlers
    pub fn table_names(&self) -> TableNames {
        TableNames {
            questions: self.questions_table.clone(),
            answers: self.answers_table.clone(),
            subtypes: self.subtypes_table.clone(),
            users: self.users_table.clone(),
        }
    }

    fn has_spreadsheet_id(&self) -> bool {
        self.spreadsheet_id
            .as_ref()
            .is_some_and(|id| !id.trim().is_empty())
    }

    fn has_access_token(&self) -> bool {
        self.access_token
            .as_ref()
            .is_some_and(|t| !t.expose_secret().is_empty())
    }

    /// Validate spreadsheet configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }

        for (label, name) in [
            ("questions", &self.questions_table),
            ("answers", &self.answers_table),
            ("subtypes", &self.subtypes_table),
            ("users", &self.users_table),
        ] {
            if name.trim().is_empty() {
                return Err(ValidationError::EmptyTableName(label));
            }
        }

        if self.provider == SheetsProvider::Google {
            if !self.has_spreadsheet_id() {
                return Err(ValidationError::MissingRequired("SHEETS__SPREADSHEET_ID"));
            }
            if !self.has_access_token() {
                return Err(ValidationError::MissingRequired("SHEETS__ACCESS_TOKEN"));
            }
            if !self.api_base_url.starts_with("https://")
                && !self.api_base_url.starts_with("http://")
            {
                return Err(ValidationError::InvalidApiBaseUrl);
            }
        }

        Ok(())
    }
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            provider: SheetsProvider::default(),
            spreadsheet_id: None,
            access_token: None,
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout(),
            seed_path: None,
            questions_table: default_questions_table(),
            answers_table: default_answers_table(),
            subtypes_table: default_subtypes_table(),
            users_table: default_users_table(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://sheets.googleapis.com/v4".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_questions_table() -> String {
    "Preguntas".to_string()
}

fn default_answers_table() -> String {
    "Respuestas".to_string()
}

fn default_subtypes_table() -> String {
    "Subtipo".to_string()
}

fn default_users_table() -> String {
    "Usuarios".to_string()
}
