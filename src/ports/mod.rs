//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SpreadsheetGateway` - Whole-table reads, row appends and cell updates
//!   against the spreadsheet that backs questions, answers, subtypes and users.

mod spreadsheet_gateway;

pub use spreadsheet_gateway::{
    ColumnLetter, GatewayError, SheetRecord, SpreadsheetGateway, TableNames,
};

pub(crate) use spreadsheet_gateway::cell_to_text;
