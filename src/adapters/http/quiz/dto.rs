//! HTTP DTOs (Data Transfer Objects) for quiz endpoints.
//!
//! Field names are the JSON names existing clients already send and read,
//! so they stay in Spanish. Every response is wrapped in a `status`
//! envelope: `"success"` with a payload, or `"error"` with a message.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::{
    CalculateResultsCommand, RecordAnswerCommand, RegisterUserCommand, UpdateUserProgressCommand,
};
use crate::domain::quiz::Question;
use crate::domain::scoring::{Answer, ScoringResult};

const SUCCESS: &str = "success";
const ERROR: &str = "error";

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to record one answer.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordAnswerRequest {
    pub usuario: String,
    pub id_pregunta: Value,
    pub respuesta: Value,
    #[serde(default)]
    pub peso: Option<Value>,
    /// Most likely subtype so far.
    #[serde(default)]
    pub subtipo_actual: Option<String>,
    #[serde(default)]
    pub test_id: Option<String>,
}

impl From<RecordAnswerRequest> for RecordAnswerCommand {
    fn from(req: RecordAnswerRequest) -> Self {
        Self {
            user: req.usuario,
            question_id: req.id_pregunta,
            response: req.respuesta,
            weight: req.peso,
            current_subtype: req.subtipo_actual,
            test_id: req.test_id,
        }
    }
}

/// Request to register a user.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserRequest {
    pub nombre: String,
    #[serde(default)]
    pub correo: Option<String>,
}

impl From<RegisterUserRequest> for RegisterUserCommand {
    fn from(req: RegisterUserRequest) -> Self {
        Self {
            name: req.nombre,
            email: req.correo,
        }
    }
}

/// Request to update a user's progress.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    /// The user's `nombre/correo` key.
    pub usuario: String,
    #[serde(default)]
    pub ultima_pregunta: Option<Value>,
    #[serde(default)]
    pub subtipo_actual: Option<String>,
    #[serde(default)]
    pub estado_test: Option<String>,
}

impl From<UpdateUserRequest> for UpdateUserProgressCommand {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            user: req.usuario,
            last_question: req.ultima_pregunta,
            current_subtype: req.subtipo_actual,
            status: req.estado_test,
        }
    }
}

/// Request to score a set of answers.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateResultsRequest {
    pub respuestas: Vec<Answer>,
    /// Accepted for compatibility; not used in scoring.
    #[serde(default)]
    pub preguntas_disponibles: Option<Value>,
}

impl From<CalculateResultsRequest> for CalculateResultsCommand {
    fn from(req: CalculateResultsRequest) -> Self {
        Self {
            answers: req.respuestas,
            available_questions: req.preguntas_disponibles,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response listing the quiz questions.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionsResponse {
    pub status: &'static str,
    pub datos: Vec<Question>,
}

impl QuestionsResponse {
    pub fn new(datos: Vec<Question>) -> Self {
        Self {
            status: SUCCESS,
            datos,
        }
    }
}

/// Success response carrying a human-readable message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub status: &'static str,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: SUCCESS,
            message: message.into(),
        }
    }
}

/// Scoring response: the result fields sit next to `status`.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub result: ScoringResult,
}

impl From<ScoringResult> for ResultsResponse {
    fn from(result: ScoringResult) -> Self {
        Self {
            status: SUCCESS,
            result,
        }
    }
}

/// Failure envelope shared by every route.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ERROR,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::{score_answers, SubtypeCatalog};
    use serde_json::json;

    #[test]
    fn calculate_request_accepts_mixed_intensities() {
        let req: CalculateResultsRequest = serde_json::from_value(json!({
            "respuestas": [
                {"pregunta": "P1", "respuesta": "5", "subtipos": ["SP1"], "peso": 1},
                {"pregunta": "P2", "respuesta": 3, "subtipos": ["SX1"], "peso": 2.5}
            ],
            "preguntas_disponibles": [{"id": "P3"}]
        }))
        .unwrap();

        let cmd = CalculateResultsCommand::from(req);
        assert_eq!(cmd.answers.len(), 2);
        assert!(cmd.available_questions.is_some());
    }

    #[test]
    fn calculate_request_requires_answers() {
        let result: Result<CalculateResultsRequest, _> =
            serde_json::from_value(json!({"preguntas_disponibles": []}));
        assert!(result.is_err());
    }

    #[test]
    fn record_answer_request_defaults_optional_fields() {
        let req: RecordAnswerRequest = serde_json::from_value(json!({
            "usuario": "Ana/",
            "id_pregunta": 4,
            "respuesta": "2"
        }))
        .unwrap();

        let cmd = RecordAnswerCommand::from(req);
        assert_eq!(cmd.weight, None);
        assert_eq!(cmd.test_id, None);
        assert_eq!(cmd.question_id, json!(4));
    }

    #[test]
    fn results_response_flattens_result_next_to_status() {
        let answers = vec![Answer::new("P1", 5, &["X"], 10.0)];
        let result = score_answers(&answers, &SubtypeCatalog::new()).unwrap();

        let value = serde_json::to_value(ResultsResponse::from(result)).unwrap();

        assert_eq!(value["status"], json!("success"));
        assert_eq!(value["resultado"], json!("X"));
        assert_eq!(value["descripcion"], json!("No disponible."));
        assert_eq!(value["pesos_acumulados"], json!({"X": 10.0}));
    }

    #[test]
    fn error_response_uses_error_status() {
        let value = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(value, json!({"status": "error", "message": "boom"}));
    }
}
