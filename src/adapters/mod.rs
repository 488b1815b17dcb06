//! Adapters - Implementations of port interfaces.
//!
//! - `http` - Axum routes, handlers and middleware
//! - `sheets` - Spreadsheet gateways (Google Sheets, in-memory)

pub mod http;
pub mod sheets;
