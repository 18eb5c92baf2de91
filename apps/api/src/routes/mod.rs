pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // File extraction
        .route("/api/v1/extract", post(handlers::handle_extract))
        // Analysis API
        .route(
            "/api/v1/analysis/resume",
            post(handlers::handle_parse_resume),
        )
        .route("/api/v1/analysis/jd", post(handlers::handle_parse_jd))
        .route("/api/v1/analysis/match", post(handlers::handle_match))
        .route("/api/v1/analysis/salary", post(handlers::handle_salary))
        .route(
            "/api/v1/analysis/interview-questions",
            post(handlers::handle_interview_questions),
        )
        .route(
            "/api/v1/analysis/report",
            post(handlers::handle_screening_report),
        )
        .with_state(state)
}
