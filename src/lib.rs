//! Subtype Quiz - Spreadsheet-backed quiz service.
//!
//! Serves quiz questions, records answers and registrations, and scores a
//! set of answers into a personality subtype with its description.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
