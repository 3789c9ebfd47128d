use crate::commands;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/yield/crops",
            get(commands::yield_predictor::get_predictor_options),
        )
        .route(
            "/api/yield/predict",
            post(commands::yield_predictor::predict_yield),
        )
}
