//! Google Sheets Adapter - Implementation of SpreadsheetGateway for the
//! Google Sheets v4 REST API.
//!
//! Each table is a worksheet (tab) of one spreadsheet. Reads fetch the
//! whole tab with unformatted values, so numbers arrive as JSON numbers.
//! Writes use `USER_ENTERED` so cells are interpreted the way the sheet UI
//! would interpret typed input.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GoogleSheetsConfig::new(spreadsheet_id, access_token)
//!     .with_timeout(Duration::from_secs(10));
//!
//! let gateway = GoogleSheetsGateway::new(config)?;
//! ```
//!
//! The access token is used as a bearer token as-is; obtaining and
//! refreshing it happens outside this service.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::ports::{
    cell_to_text, ColumnLetter, GatewayError, SheetRecord, SpreadsheetGateway,
};

/// Configuration for the Google Sheets gateway.
#[derive(Debug, Clone)]
pub struct GoogleSheetsConfig {
    /// Spreadsheet identifier (from the spreadsheet URL).
    pub spreadsheet_id: String,
    /// OAuth bearer token with spreadsheet scope.
    access_token: Secret<String>,
    /// Base URL for the API (default: https://sheets.googleapis.com/v4).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GoogleSheetsConfig {
    pub fn new(spreadsheet_id: impl Into<String>, access_token: Secret<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            access_token,
            base_url: "https://sheets.googleapis.com/v4".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }
}

/// Google Sheets API gateway.
pub struct GoogleSheetsGateway {
    config: GoogleSheetsConfig,
    client: Client,
}

impl GoogleSheetsGateway {
    pub fn new(config: GoogleSheetsConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Configuration(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self { config, client })
    }

    /// `{base}/spreadsheets/{id}/values/{range}` with the range percent-encoded.
    fn values_url(&self, range: &str) -> Result<Url, GatewayError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| GatewayError::Configuration(format!("invalid base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| GatewayError::Configuration("base URL cannot take a path".to_string()))?
            .pop_if_empty()
            .extend(["spreadsheets", self.config.spreadsheet_id.as_str(), "values", range]);
        Ok(url)
    }

    async fn send(&self, table: &str, request: RequestBuilder) -> Result<Response, GatewayError> {
        let response = request
            .bearer_auth(self.config.access_token())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::unavailable(format!(
                        "request timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else if e.is_connect() {
                    GatewayError::unavailable(format!("Connection failed: {}", e))
                } else {
                    GatewayError::unavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(table, status = status.as_u16(), "Sheets API request failed");
        Err(Self::map_status(table, status.as_u16(), &body))
    }

    fn map_status(table: &str, status: u16, body: &str) -> GatewayError {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| body.to_string());

        if status == 400 && message.contains("Unable to parse range") {
            return GatewayError::TableNotFound(table.to_string());
        }
        GatewayError::Upstream { status, message }
    }
}

#[async_trait]
impl SpreadsheetGateway for GoogleSheetsGateway {
    async fn read_all_rows(&self, table: &str) -> Result<Vec<SheetRecord>, GatewayError> {
        let url = self.values_url(&sheet_range(table))?;
        let request = self.client.get(url).query(&[
            ("valueRenderOption", "UNFORMATTED_VALUE"),
            ("majorDimension", "ROWS"),
        ]);

        let range: ValueRange = self
            .send(table, request)
            .await?
            .json()
            .await
            .map_err(|e| GatewayError::invalid_response(e.to_string()))?;

        let records = records_from_values(range.values.unwrap_or_default());
        tracing::debug!(table, rows = records.len(), "Read sheet");
        Ok(records)
    }

    async fn append_row(&self, table: &str, values: Vec<Value>) -> Result<(), GatewayError> {
        let url = self.values_url(&format!("{}:append", sheet_range(table)))?;
        let body = ValueRange {
            range: None,
            values: Some(vec![values]),
        };
        let request = self
            .client
            .post(url)
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&body);

        self.send(table, request).await?;
        Ok(())
    }

    async fn update_cell(
        &self,
        table: &str,
        row: u32,
        column: &ColumnLetter,
        value: Value,
    ) -> Result<(), GatewayError> {
        let range = cell_range(table, row, column);
        let url = self.values_url(&range)?;
        let body = ValueRange {
            range: Some(range),
            values: Some(vec![vec![value]]),
        };
        let request = self
            .client
            .put(url)
            .query(&[("valueInputOption", "USER_ENTERED")])
            .json(&body);

        self.send(table, request).await?;
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Wire types and A1 helpers
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<Vec<Vec<Value>>>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// A1 range covering a whole tab: `'Tab name'` with quotes doubled.
fn sheet_range(table: &str) -> String {
    format!("'{}'", table.replace('\'', "''"))
}

/// A1 range of one cell, e.g. `'Usuarios'!E5`.
fn cell_range(table: &str, row: u32, column: &ColumnLetter) -> String {
    format!("{}!{}{}", sheet_range(table), column, row)
}

/// Turns a values grid into records: the first row names the columns.
fn records_from_values(values: Vec<Vec<Value>>) -> Vec<SheetRecord> {
    let mut rows = values.into_iter();
    let Some(header_row) = rows.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(cell_to_text)
        .collect();

    rows.map(|row| SheetRecord::from_row(&headers, row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gateway(base_url: &str) -> GoogleSheetsGateway {
        let config = GoogleSheetsConfig::new("sheet-123", Secret::new("token".to_string()))
            .with_base_url(base_url);
        GoogleSheetsGateway::new(config).unwrap()
    }

    #[test]
    fn sheet_range_quotes_and_escapes() {
        assert_eq!(sheet_range("Preguntas"), "'Preguntas'");
        assert_eq!(sheet_range("O'Brien"), "'O''Brien'");
    }

    #[test]
    fn cell_range_uses_a1_notation() {
        let column = ColumnLetter::new("E").unwrap();
        assert_eq!(cell_range("Usuarios", 5, &column), "'Usuarios'!E5");
    }

    #[test]
    fn values_url_encodes_range() {
        let url = gateway("https://sheets.googleapis.com/v4")
            .values_url(&sheet_range("BASE DE DATOS"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-123/values/'BASE%20DE%20DATOS'"
        );
    }

    #[test]
    fn values_url_tolerates_trailing_slash() {
        let url = gateway("http://localhost:9000/v4/").values_url("'A'").unwrap();
        assert_eq!(url.path(), "/v4/spreadsheets/sheet-123/values/'A'");
    }

    #[test]
    fn records_from_values_uses_first_row_as_header() {
        let records = records_from_values(vec![
            vec![json!("ID"), json!("Peso")],
            vec![json!(1), json!(2.5)],
            vec![json!(2)],
        ]);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].number("Peso"), Some(2.5));
        assert_eq!(records[1].text("Peso").as_deref(), Some(""));
    }

    #[test]
    fn records_from_empty_grid_is_empty() {
        assert!(records_from_values(vec![]).is_empty());
    }

    #[test]
    fn unparseable_range_maps_to_table_not_found() {
        let body = r#"{"error": {"code": 400, "message": "Unable to parse range: 'Nope'", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(
            GoogleSheetsGateway::map_status("Nope", 400, body),
            GatewayError::TableNotFound("Nope".to_string())
        );
    }

    #[test]
    fn other_statuses_map_to_upstream() {
        let body = r#"{"error": {"code": 403, "message": "The caller does not have permission"}}"#;
        assert_eq!(
            GoogleSheetsGateway::map_status("Usuarios", 403, body),
            GatewayError::Upstream {
                status: 403,
                message: "The caller does not have permission".to_string()
            }
        );
    }

    #[test]
    fn value_range_serializes_without_empty_fields() {
        let body = ValueRange {
            range: None,
            values: Some(vec![vec![json!("a"), json!(1)]]),
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"values": [["a", 1]]}));
    }
}
