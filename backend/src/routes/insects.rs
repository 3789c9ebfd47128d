use crate::commands;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

/// Photos from phone cameras routinely exceed axum's 2MB default.
const UPLOAD_LIMIT: usize = 10 * 1024 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/insects/identify",
            post(commands::insects::identify_insect).layer(DefaultBodyLimit::max(UPLOAD_LIMIT)),
        )
        .route(
            "/api/insects/pesticides",
            get(commands::insects::get_pesticides),
        )
        .route(
            "/api/insects/samples",
            get(commands::insects::get_sample_insects),
        )
}
