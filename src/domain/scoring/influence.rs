//! Influence Extractor - Answers that contributed to the principal subtype.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Answer;

/// Projection of an answer for explanatory output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluentialAnswer {
    #[serde(rename = "pregunta")]
    pub question: String,

    /// Parsed weight; always serialized as a JSON float.
    #[serde(rename = "peso")]
    pub weight: f64,

    /// Raw response value, as sent by the client.
    #[serde(rename = "respuesta")]
    pub response: Value,
}

impl From<&Answer> for InfluentialAnswer {
    fn from(answer: &Answer) -> Self {
        Self {
            question: answer.question.clone(),
            weight: answer.weight,
            response: answer.response.clone(),
        }
    }
}

/// Answers tagged with `principal`, in their original order.
///
/// Returns an empty list when there is no principal subtype.
pub fn influential_answers(answers: &[Answer], principal: Option<&str>) -> Vec<InfluentialAnswer> {
    let Some(principal) = principal else {
        return Vec::new();
    };

    answers
        .iter()
        .filter(|answer| answer.has_subtype(principal))
        .map(InfluentialAnswer::from)
        .collect()
}
