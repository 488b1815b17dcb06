//! Quiz question.

use serde::{Deserialize, Serialize};

/// A quiz question as stored in the questions table. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,

    #[serde(rename = "pregunta")]
    pub text: String,

    /// Subtypes this question scores towards.
    #[serde(rename = "subtipos")]
    pub subtypes: Vec<String>,

    #[serde(rename = "peso")]
    pub weight: f64,
}

impl Question {
    /// Splits a comma-separated subtype cell, trimming and dropping blanks.
    pub fn parse_subtypes(cell: &str) -> Vec<String> {
        cell.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
