pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers as evaluation;
use crate::resume::handlers as resume;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route("/api/v1/sessions/:id", get(session::handle_get_session))
        .route(
            "/api/v1/sessions/:id/analysis",
            post(evaluation::handle_run_analysis),
        )
        .route(
            "/api/v1/sessions/:id/cover-letter",
            post(evaluation::handle_cover_letter),
        )
        // Stateless tools
        .route("/api/v1/resumes/parse", post(resume::handle_parse_resume))
        .route("/api/v1/rephrase", post(evaluation::handle_rephrase))
        .route(
            "/api/v1/ats-templates",
            get(resume::handle_list_ats_templates),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
