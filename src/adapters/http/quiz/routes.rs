//! Axum router configuration for quiz endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    calculate_results, get_questions, home, not_found, record_answer, register_user,
    update_user, QuizAppState,
};

/// Create the quiz API router.
///
/// # Routes
///
/// - `GET /` - Liveness greeting
/// - `GET /preguntas` - List questions
/// - `POST /responder` - Record one answer
/// - `POST /registrar_usuario` - Register a user
/// - `POST /actualizar_usuario` - Update a user's progress
/// - `POST /calcular_resultados` - Score answers into a subtype
pub fn quiz_routes() -> Router<QuizAppState> {
    Router::new()
        .route("/", get(home))
        .route("/preguntas", get(get_questions))
        .route("/responder", post(record_answer))
        .route("/registrar_usuario", post(register_user))
        .route("/actualizar_usuario", post(update_user))
        .route("/calcular_resultados", post(calculate_results))
        .fallback(not_found)
}

/// Create the quiz router with its state attached.
pub fn quiz_router(state: QuizAppState) -> Router {
    quiz_routes().with_state(state)
}
