use super::settle;
use crate::error::BhoomiResult;
use crate::models::GeoPlace;
use crate::services::adapters::{locate, request_weather_and_alerts, WeatherReport};
use crate::state::{AppState, SessionContext};
use crate::views::ViewKind;
use axum::extract::{Query, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct WeatherQuery {
    pub location: Option<String>,
}

/// An explicit `location` becomes the session's selected location; without
/// one the last selection (or the configured default) is used.
pub async fn get_weather(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Query(query): Query<WeatherQuery>,
) -> BhoomiResult<Json<WeatherReport>> {
    let key = &session.session_key;
    let location = match query.location.map(|l| l.trim().to_string()).filter(|l| !l.is_empty()) {
        Some(explicit) => {
            state.views.set_selected_location(key, explicit.clone());
            explicit
        }
        None => state
            .views
            .selected_location(key)
            .unwrap_or_else(|| state.config.default_location.clone()),
    };

    let token = state.views.begin(key, ViewKind::Weather);
    let outcome = request_weather_and_alerts(state.services.as_ref(), &location).await;
    settle(&state, &session, token, outcome, |v| &mut v.weather)
}

#[derive(Debug, Deserialize)]
pub struct LocateRequest {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Serialize)]
pub struct LocatedPlace {
    pub place: GeoPlace,
    pub location: String,
}

pub async fn locate_user(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Json(payload): Json<LocateRequest>,
) -> BhoomiResult<Json<LocatedPlace>> {
    let place = locate(state.services.as_ref(), payload.lat, payload.lon).await?;
    let location = place.display_name();
    tracing::info!("Session {} located at {}", session.session_key, location);
    state
        .views
        .set_selected_location(&session.session_key, location.clone());

    Ok(Json(LocatedPlace { place, location }))
}
