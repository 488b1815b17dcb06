//! HTTP adapters - REST API implementations.

pub mod middleware;
pub mod quiz;

use axum::Router;

use crate::config::ServerConfig;

pub use middleware::apply_middleware;
pub use quiz::{quiz_router, QuizAppState};

/// Builds the complete application router: quiz routes plus middleware.
pub fn app(state: QuizAppState, config: &ServerConfig) -> Router {
    apply_middleware(quiz_router(state), config)
}
