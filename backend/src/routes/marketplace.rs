use crate::commands;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/marketplace/listings",
            get(commands::marketplace::get_listings),
        )
        .route(
            "/api/marketplace/filters",
            get(commands::marketplace::get_filter_options),
        )
        .route(
            "/api/marketplace/stats",
            get(commands::marketplace::get_marketplace_stats),
        )
}
