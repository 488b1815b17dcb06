//! In-Memory Spreadsheet Adapter
//!
//! Keeps every table in memory behind a tokio `RwLock`.
//! Useful for testing and local development; tables can be seeded from a
//! JSON file of the form:
//!
//! ```json
//! {
//!   "Preguntas": { "headers": ["ID", "Pregunta"], "rows": [[1, "¿...?"]] }
//! }
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;

use crate::ports::{ColumnLetter, GatewayError, SheetRecord, SpreadsheetGateway};

#[derive(Debug, Clone, Default, Deserialize)]
struct Table {
    headers: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<Value>>,
}

/// In-memory spreadsheet with named tables.
#[derive(Debug, Default)]
pub struct InMemorySpreadsheet {
    tables: RwLock<HashMap<String, Table>>,
}

impl InMemorySpreadsheet {
    /// Creates a spreadsheet with no tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a table with the given header and data rows.
    pub fn with_table(mut self, name: &str, headers: &[&str], rows: Vec<Vec<Value>>) -> Self {
        let table = Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        };
        self.tables.get_mut().insert(name.to_string(), table);
        self
    }

    /// Builds a spreadsheet from a JSON seed document.
    pub fn from_seed(seed: Value) -> Result<Self, GatewayError> {
        let tables: HashMap<String, Table> = serde_json::from_value(seed)
            .map_err(|e| GatewayError::invalid_response(format!("invalid seed: {}", e)))?;
        Ok(Self {
            tables: RwLock::new(tables),
        })
    }

    /// Loads a JSON seed document from disk.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GatewayError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await.map_err(|e| {
            GatewayError::unavailable(format!("cannot read seed file {}: {}", path.display(), e))
        })?;
        let seed: Value = serde_json::from_str(&text)
            .map_err(|e| GatewayError::invalid_response(format!("invalid seed: {}", e)))?;
        Self::from_seed(seed)
    }

    /// Data rows of a table (header excluded).
    pub async fn rows(&self, table: &str) -> Option<Vec<Vec<Value>>> {
        self.tables.read().await.get(table).map(|t| t.rows.clone())
    }
}

#[async_trait]
impl SpreadsheetGateway for InMemorySpreadsheet {
    async fn read_all_rows(&self, table: &str) -> Result<Vec<SheetRecord>, GatewayError> {
        let tables = self.tables.read().await;
        let table_data = tables
            .get(table)
            .ok_or_else(|| GatewayError::TableNotFound(table.to_string()))?;

        Ok(table_data
            .rows
            .iter()
            .map(|row| SheetRecord::from_row(&table_data.headers, row.clone()))
            .collect())
    }

    async fn append_row(&self, table: &str, values: Vec<Value>) -> Result<(), GatewayError> {
        let mut tables = self.tables.write().await;
        let table_data = tables
            .get_mut(table)
            .ok_or_else(|| GatewayError::TableNotFound(table.to_string()))?;

        table_data.rows.push(values);
        Ok(())
    }

    async fn update_cell(
        &self,
        table: &str,
        row: u32,
        column: &ColumnLetter,
        value: Value,
    ) -> Result<(), GatewayError> {
        if row < 2 {
            return Err(GatewayError::InvalidCell(format!(
                "{}{} is not a data row",
                column, row
            )));
        }

        let mut tables = self.tables.write().await;
        let table_data = tables
            .get_mut(table)
            .ok_or_else(|| GatewayError::TableNotFound(table.to_string()))?;

        // Sheets grow to fit writes past the current extent.
        let row_index = (row - 2) as usize;
        if table_data.rows.len() <= row_index {
            table_data.rows.resize(row_index + 1, Vec::new());
        }
        let cells = &mut table_data.rows[row_index];
        let col_index = column.index();
        if cells.len() <= col_index {
            cells.resize(col_index + 1, Value::String(String::new()));
        }
        cells[col_index] = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn sheet() -> InMemorySpreadsheet {
        InMemorySpreadsheet::new().with_table(
            "Usuarios",
            &["ID", "Nombre"],
            vec![vec![json!("Usuario_1"), json!("Ana/")]],
        )
    }

    #[tokio::test]
    async fn read_all_rows_keys_by_header() {
        let records = sheet().read_all_rows("Usuarios").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text("Nombre").as_deref(), Some("Ana/"));
    }

    #[tokio::test]
    async fn unknown_table_is_not_found() {
        let result = sheet().read_all_rows("Nope").await;
        assert_eq!(result, Err(GatewayError::TableNotFound("Nope".to_string())));
    }

    #[tokio::test]
    async fn append_row_adds_after_last_row() {
        let sheet = sheet();
        sheet
            .append_row("Usuarios", vec![json!("Usuario_2"), json!("Luis/")])
            .await
            .unwrap();

        let rows = sheet.rows("Usuarios").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], json!("Usuario_2"));
    }

    #[tokio::test]
    async fn update_cell_uses_sheet_coordinates() {
        let sheet = sheet();
        let column = ColumnLetter::new("B").unwrap();
        sheet
            .update_cell("Usuarios", 2, &column, json!("Ana/ana@example.com"))
            .await
            .unwrap();

        let rows = sheet.rows("Usuarios").await.unwrap();
        assert_eq!(rows[0][1], json!("Ana/ana@example.com"));
    }

    #[tokio::test]
    async fn update_cell_grows_the_table() {
        let sheet = sheet();
        let column = ColumnLetter::new("D").unwrap();
        sheet
            .update_cell("Usuarios", 4, &column, json!("x"))
            .await
            .unwrap();

        let rows = sheet.rows("Usuarios").await.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], vec![json!(""), json!(""), json!(""), json!("x")]);
    }

    #[tokio::test]
    async fn update_cell_rejects_header_row() {
        let column = ColumnLetter::new("A").unwrap();
        let result = sheet().update_cell("Usuarios", 1, &column, json!("x")).await;
        assert!(matches!(result, Err(GatewayError::InvalidCell(_))));
    }

    #[tokio::test]
    async fn loads_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Subtipo": {{"headers": ["Type Name"], "rows": [["SP1"], ["SX1"]]}},
                "Usuarios": {{"headers": ["ID"]}}}}"#
        )
        .unwrap();

        let sheet = InMemorySpreadsheet::from_json_file(file.path()).await.unwrap();

        assert_eq!(sheet.read_all_rows("Subtipo").await.unwrap().len(), 2);
        assert!(sheet.rows("Usuarios").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_seed_file_is_reported() {
        let result = InMemorySpreadsheet::from_json_file("/definitely/not/here.json").await;
        assert!(matches!(result, Err(GatewayError::Unavailable(_))));
    }
}
