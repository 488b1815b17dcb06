//! HTTP adapter for quiz endpoints.
//!
//! Exposes the quiz service via REST API:
//! - `GET /preguntas` - List questions
//! - `POST /responder` - Record an answer
//! - `POST /registrar_usuario` - Register a user
//! - `POST /actualizar_usuario` - Update user progress
//! - `POST /calcular_resultados` - Calculate the subtype result

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{QuizApiError, QuizAppState};
pub use routes::{quiz_router, quiz_routes};
