//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, errors)
//! - `quiz` - Questions, answer log entries and user records
//! - `scoring` - Pure subtype scoring (aggregation, ranking, enrichment)

pub mod foundation;
pub mod quiz;
pub mod scoring;
