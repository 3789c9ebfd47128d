use crate::commands;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/assistant/languages",
            get(commands::assistant::get_languages),
        )
        .route(
            "/api/assistant/suggestions",
            get(commands::assistant::get_sample_questions),
        )
        .route("/api/assistant/ask", post(commands::assistant::ask_assistant))
}
