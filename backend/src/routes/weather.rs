use crate::commands;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/weather", get(commands::weather::get_weather))
        .route("/api/weather/locate", post(commands::weather::locate_user))
}
