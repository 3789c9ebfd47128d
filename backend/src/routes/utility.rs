use crate::commands;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(commands::utility::root))
        .route("/api/ping", get(commands::utility::ping))
}
