//! Spreadsheet adapters - Implementations of the `SpreadsheetGateway` port.
//!
//! - `GoogleSheetsGateway` - Google Sheets v4 REST API
//! - `InMemorySpreadsheet` - Process-local tables for development and tests

mod google;
mod in_memory;

pub use google::{GoogleSheetsConfig, GoogleSheetsGateway};
pub use in_memory::InMemorySpreadsheet;
