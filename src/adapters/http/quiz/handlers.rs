//! HTTP handlers for quiz endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{
    CalculateResultsHandler, GetQuestionsHandler, GetQuestionsQuery, QuizError,
    RecordAnswerHandler, RegisterUserHandler, UpdateUserProgressHandler,
};
use crate::ports::{SpreadsheetGateway, TableNames};

use super::dto::{
    CalculateResultsRequest, ErrorResponse, MessageResponse, QuestionsResponse,
    RecordAnswerRequest, RegisterUserRequest, ResultsResponse, UpdateUserRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Quiz API error that implements IntoResponse.
///
/// The body is always the generic error envelope with the underlying
/// error text as message; only the status code distinguishes error kinds.
#[derive(Debug)]
pub struct QuizApiError {
    status: StatusCode,
    message: String,
}

impl QuizApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for QuizApiError {
    fn into_response(self) -> axum::response::Response {
        if self.status.is_server_error() {
            tracing::error!(status = self.status.as_u16(), "Request failed: {}", self.message);
        } else {
            tracing::debug!(status = self.status.as_u16(), "Request rejected: {}", self.message);
        }
        (self.status, Json(ErrorResponse::new(self.message))).into_response()
    }
}

impl From<QuizError> for QuizApiError {
    fn from(error: QuizError) -> Self {
        let status = match &error {
            e if e.is_client_error() => StatusCode::BAD_REQUEST,
            QuizError::UserNotFound(_) => StatusCode::NOT_FOUND,
            QuizError::Gateway(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: error.to_string(),
        }
    }
}

impl From<JsonRejection> for QuizApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing the gateway and table names.
///
/// Cloned for each request; handlers are created on demand from it.
#[derive(Clone)]
pub struct QuizAppState {
    pub gateway: Arc<dyn SpreadsheetGateway>,
    pub tables: Arc<TableNames>,
}

impl QuizAppState {
    pub fn new(gateway: Arc<dyn SpreadsheetGateway>, tables: TableNames) -> Self {
        Self {
            gateway,
            tables: Arc::new(tables),
        }
    }

    pub fn get_questions_handler(&self) -> GetQuestionsHandler {
        GetQuestionsHandler::new(self.gateway.clone(), self.tables.questions.clone())
    }

    pub fn record_answer_handler(&self) -> RecordAnswerHandler {
        RecordAnswerHandler::new(self.gateway.clone(), self.tables.answers.clone())
    }

    pub fn register_user_handler(&self) -> RegisterUserHandler {
        RegisterUserHandler::new(self.gateway.clone(), self.tables.users.clone())
    }

    pub fn update_user_progress_handler(&self) -> UpdateUserProgressHandler {
        UpdateUserProgressHandler::new(self.gateway.clone(), self.tables.users.clone())
    }

    pub fn calculate_results_handler(&self) -> CalculateResultsHandler {
        CalculateResultsHandler::new(self.gateway.clone(), self.tables.subtypes.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /
///
/// Liveness greeting.
pub async fn home() -> &'static str {
    "¡Hola! Tu servidor está funcionando."
}

/// GET /preguntas
///
/// Returns every question in the questions table.
pub async fn get_questions(
    State(state): State<QuizAppState>,
) -> Result<Json<QuestionsResponse>, QuizApiError> {
    let questions = state.get_questions_handler().handle(GetQuestionsQuery).await?;
    Ok(Json(QuestionsResponse::new(questions)))
}

/// POST /responder
///
/// Appends one answer to the answers log.
pub async fn record_answer(
    State(state): State<QuizAppState>,
    payload: Result<Json<RecordAnswerRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, QuizApiError> {
    let Json(request) = payload?;
    state.record_answer_handler().handle(request.into()).await?;
    Ok(Json(MessageResponse::success("Respuesta registrada correctamente")))
}

/// POST /registrar_usuario
///
/// Registers a new user with status "En curso".
pub async fn register_user(
    State(state): State<QuizAppState>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, QuizApiError> {
    let Json(request) = payload?;
    let result = state.register_user_handler().handle(request.into()).await?;
    Ok(Json(MessageResponse::success(format!(
        "Usuario {} registrado correctamente",
        result.user_id
    ))))
}

/// POST /actualizar_usuario
///
/// Updates the progress cells of an existing user.
pub async fn update_user(
    State(state): State<QuizAppState>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, QuizApiError> {
    let Json(request) = payload?;
    state
        .update_user_progress_handler()
        .handle(request.into())
        .await?;
    Ok(Json(MessageResponse::success("Usuario actualizado correctamente")))
}

/// POST /calcular_resultados
///
/// Scores the submitted answers and describes the principal subtype.
pub async fn calculate_results(
    State(state): State<QuizAppState>,
    payload: Result<Json<CalculateResultsRequest>, JsonRejection>,
) -> Result<Json<ResultsResponse>, QuizApiError> {
    let Json(request) = payload?;
    let result = state
        .calculate_results_handler()
        .handle(request.into())
        .await?;
    Ok(Json(result.into()))
}

/// Fallback for unknown routes, using the error envelope.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Ruta no encontrada")))
}
