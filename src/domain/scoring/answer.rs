//! Answer value objects.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ScoringError;

/// One answered question as submitted by the client.
///
/// `subtypes` and `weight` are copied from the originating question on the
/// client side. `response` is kept exactly as sent so it can be echoed
/// back; it is only interpreted through [`Answer::intensity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "pregunta")]
    pub question: String,

    #[serde(rename = "respuesta")]
    pub response: Value,

    #[serde(rename = "subtipos")]
    pub subtypes: Vec<String>,

    #[serde(rename = "peso")]
    pub weight: f64,
}

impl Answer {
    pub fn new(
        question: impl Into<String>,
        response: impl Into<Value>,
        subtypes: &[&str],
        weight: f64,
    ) -> Self {
        Self {
            question: question.into(),
            response: response.into(),
            subtypes: subtypes.iter().map(|s| s.to_string()).collect(),
            weight,
        }
    }

    /// Parses the raw response into an intensity.
    pub fn intensity(&self) -> Result<Intensity, ScoringError> {
        Intensity::parse(&self.response).ok_or_else(|| ScoringError::InvalidIntensity {
            question: self.question.clone(),
            value: self.response.to_string(),
        })
    }

    /// Whether this answer is tagged with `subtype` (exact match).
    pub fn has_subtype(&self, subtype: &str) -> bool {
        self.subtypes.iter().any(|s| s == subtype)
    }
}

/// User-reported answer strength, expected on a 0-5 scale.
///
/// The range is not enforced; out-of-range values score proportionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Intensity(i64);

impl Intensity {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Integer conversion of a raw JSON response.
    ///
    /// - integers are taken as-is
    /// - floats are truncated toward zero, and must fit in an `i64`
    /// - strings are trimmed and parsed as a signed base-10 integer
    ///
    /// Everything else (including `"3.5"`, booleans and null) is rejected.
    pub fn parse(raw: &Value) -> Option<Self> {
        match raw {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(truncate_float))
                .map(Self::new),
            Value::String(s) => s.trim().parse::<i64>().ok().map(Self::new),
            _ => None,
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Truncates toward zero; `None` for NaN, infinities and values outside `i64`.
fn truncate_float(f: f64) -> Option<i64> {
    let truncated = f.trunc();
    // i64::MIN is exactly representable; i64::MAX rounds up to 2^63
    (i64::MIN as f64..i64::MAX as f64)
        .contains(&truncated)
        .then_some(truncated as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn intensity_accepts_integers_and_integer_strings() {
        assert_eq!(Intensity::parse(&json!(4)), Some(Intensity::new(4)));
        assert_eq!(Intensity::parse(&json!("3")), Some(Intensity::new(3)));
        assert_eq!(Intensity::parse(&json!(" 5 ")), Some(Intensity::new(5)));
        assert_eq!(Intensity::parse(&json!("-2")), Some(Intensity::new(-2)));
    }

    #[test]
    fn intensity_truncates_floats() {
        assert_eq!(Intensity::parse(&json!(3.9)), Some(Intensity::new(3)));
        assert_eq!(Intensity::parse(&json!(-1.5)), Some(Intensity::new(-1)));
    }

    #[test]
    fn intensity_rejects_floats_outside_integer_range() {
        assert_eq!(Intensity::parse(&json!(1e30)), None);
        assert_eq!(Intensity::parse(&json!(-1e30)), None);
        assert_eq!(Intensity::parse(&json!(9.3e18)), None);
        assert_eq!(
            Intensity::parse(&json!(-9.2e18)),
            Some(Intensity::new(-9_200_000_000_000_000_000))
        );
    }

    #[test]
    fn intensity_rejects_booleans() {
        assert_eq!(Intensity::parse(&json!(true)), None);
        assert_eq!(Intensity::parse(&json!(false)), None);
    }

    #[test]
    fn intensity_rejects_non_integer_values() {
        assert_eq!(Intensity::parse(&json!("abc")), None);
        assert_eq!(Intensity::parse(&json!("3.5")), None);
        assert_eq!(Intensity::parse(&json!("")), None);
        assert_eq!(Intensity::parse(&json!(true)), None);
        assert_eq!(Intensity::parse(&Value::Null), None);
        assert_eq!(Intensity::parse(&json!([1])), None);
    }

    #[test]
    fn answer_deserializes_from_wire_names() {
        let answer: Answer = serde_json::from_value(json!({
            "pregunta": "P1",
            "respuesta": "4",
            "subtipos": ["SP1", "SX1"],
            "peso": 2
        }))
        .unwrap();

        assert_eq!(answer.question, "P1");
        assert_eq!(answer.response, json!("4"));
        assert_eq!(answer.subtypes, vec!["SP1", "SX1"]);
        assert_eq!(answer.weight, 2.0);
        assert_eq!(answer.intensity().unwrap().value(), 4);
    }

    #[test]
    fn answer_requires_response_field() {
        let result: Result<Answer, _> = serde_json::from_value(json!({
            "pregunta": "P1",
            "subtipos": ["SP1"],
            "peso": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_intensity_names_the_question() {
        let answer = Answer::new("P7", "abc", &["X"], 1.0);
        let err = answer.intensity().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid intensity value for question 'P7': \"abc\""
        );
    }
}
