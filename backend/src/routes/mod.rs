use crate::middleware::{response::wrap_response_middleware, session::session_middleware};
use crate::state::AppState;
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod assistant;
pub mod dashboard;
pub mod insects;
pub mod marketplace;
pub mod session;
pub mod utility;
pub mod weather;
pub mod yield_predictor;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(utility::router())
        .merge(dashboard::router())
        .merge(marketplace::router())
        .merge(yield_predictor::router())
        .merge(weather::router())
        .merge(insects::router())
        .merge(assistant::router())
        .merge(session::router())
}

/// The full application: routes, envelope wrapping, session resolution,
/// CORS and request tracing.
pub fn create_app(state: AppState) -> Router {
    create_router()
        .layer(middleware::from_fn(wrap_response_middleware))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
