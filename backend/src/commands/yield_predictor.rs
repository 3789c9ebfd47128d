use super::settle;
use crate::analysis::{CropReference, CROP_REFERENCES, SEASONS, STATES};
use crate::error::BhoomiResult;
use crate::models::{YieldPrediction, YieldRequest};
use crate::services::adapters::request_yield_prediction;
use crate::state::{AppState, SessionContext};
use crate::views::ViewKind;
use axum::extract::State;
use axum::{Extension, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct PredictorOptions {
    pub crops: &'static [CropReference],
    pub seasons: &'static [&'static str],
    pub states: &'static [&'static str],
}

pub async fn get_predictor_options() -> Json<PredictorOptions> {
    Json(PredictorOptions {
        crops: CROP_REFERENCES,
        seasons: SEASONS,
        states: STATES,
    })
}

pub async fn predict_yield(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Json(payload): Json<YieldRequest>,
) -> BhoomiResult<Json<YieldPrediction>> {
    let token = state.views.begin(&session.session_key, ViewKind::Yield);
    let outcome = request_yield_prediction(state.services.as_ref(), payload).await;

    if let Ok(p) = &outcome {
        tracing::info!(
            "Predicted {} in {} ({}): {:.2} q/ha over {} ha",
            p.crop,
            p.state,
            p.season,
            p.yield_per_hectare,
            p.area
        );
    }
    settle(&state, &session, token, outcome, |v| &mut v.yield_prediction)
}
