//! Spreadsheet Gateway Port - Interface for the remote tabular store.
//!
//! The store is treated as a set of named tables. Each table has a header
//! row naming its columns; every following row is exposed as a
//! [`SheetRecord`] keyed by those header names.
//!
//! No transactional guarantees are assumed: every operation is an
//! independent call against the provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Port for spreadsheet provider interactions.
#[async_trait]
pub trait SpreadsheetGateway: Send + Sync {
    /// Reads every data row of `table` as field→value records.
    ///
    /// The header row is not returned. Rows come back in sheet order.
    async fn read_all_rows(&self, table: &str) -> Result<Vec<SheetRecord>, GatewayError>;

    /// Appends a row after the last data row of `table`.
    async fn append_row(&self, table: &str, values: Vec<Value>) -> Result<(), GatewayError>;

    /// Overwrites a single cell.
    ///
    /// `row` is the 1-based sheet row; row 1 is the header row.
    async fn update_cell(
        &self,
        table: &str,
        row: u32,
        column: &ColumnLetter,
        value: Value,
    ) -> Result<(), GatewayError>;
}

/// Errors returned by spreadsheet gateway implementations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error("Spreadsheet provider unavailable: {0}")]
    Unavailable(String),

    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Spreadsheet provider returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Invalid response from spreadsheet provider: {0}")]
    InvalidResponse(String),

    #[error("Invalid cell reference: {0}")]
    InvalidCell(String),

    #[error("Spreadsheet gateway misconfigured: {0}")]
    Configuration(String),
}

impl GatewayError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        GatewayError::Unavailable(message.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        GatewayError::InvalidResponse(message.into())
    }
}

/// Names of the four tables the service works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    pub questions: String,
    pub answers: String,
    pub subtypes: String,
    pub users: String,
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            questions: "Preguntas".to_string(),
            answers: "Respuestas".to_string(),
            subtypes: "Subtipo".to_string(),
            users: "Usuarios".to_string(),
        }
    }
}

/// One data row of a table, keyed by header name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SheetRecord(Map<String, Value>);

impl SheetRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Builds a record by zipping a header row with a value row.
    ///
    /// Missing trailing values are filled with empty strings so every
    /// header is present on every record; extra values are ignored.
    pub fn from_row(headers: &[String], values: Vec<Value>) -> Self {
        let mut values = values.into_iter();
        let fields = headers
            .iter()
            .map(|header| {
                let value = values.next().unwrap_or_else(|| Value::String(String::new()));
                (header.clone(), value)
            })
            .collect();
        Self(fields)
    }

    /// Adds or replaces a field (builder style).
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(column.into(), value.into());
        self
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    /// Returns the cell as text, stringifying numbers and booleans.
    pub fn text(&self, column: &str) -> Option<String> {
        self.get(column).map(cell_to_text)
    }

    /// Returns the cell as a number, parsing numeric text.
    ///
    /// Empty or non-numeric cells yield `None`.
    pub fn number(&self, column: &str) -> Option<f64> {
        match self.get(column)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Renders a cell value the way it reads in the sheet.
pub(crate) fn cell_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
        other => other.to_string(),
    }
}

/// A spreadsheet column in A1 notation (`A`, `B`, ..., `Z`, `AA`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnLetter(String);

impl ColumnLetter {
    /// Parses a column letter, accepting upper or lower case.
    pub fn new(letters: &str) -> Result<Self, ValidationError> {
        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_format(
                "column",
                format!("'{}' is not a column letter", letters),
            ));
        }
        Ok(Self(letters.to_ascii_uppercase()))
    }

    /// Column for a 0-based index: 0 → `A`, 25 → `Z`, 26 → `AA`.
    pub fn from_index(index: usize) -> Self {
        let mut n = index + 1;
        let mut letters = Vec::new();
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push(b'A' + rem as u8);
            n = (n - 1) / 26;
        }
        letters.reverse();
        Self(String::from_utf8_lossy(&letters).into_owned())
    }

    /// 0-based index of this column.
    pub fn index(&self) -> usize {
        self.0
            .bytes()
            .fold(0usize, |acc, b| acc * 26 + usize::from(b - b'A' + 1))
            - 1
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
