use crate::marketplace::{marketplace_stats, MarketplaceStats};
use crate::reference::{QuickAction, QUICK_ACTIONS};
use crate::state::{AppState, SessionContext};
use axum::extract::State;
use axum::{Extension, Json};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub greeting: String,
    pub selected_location: String,
    pub quick_actions: &'static [QuickAction],
    pub marketplace: MarketplaceStats,
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Json<DashboardSummary> {
    let greeting = match session.username.as_deref() {
        Some(name) => format!("Welcome back, {}!", name),
        None => "Welcome to BhoomiMitra".to_string(),
    };
    let selected_location = state
        .views
        .selected_location(&session.session_key)
        .unwrap_or_else(|| state.config.default_location.clone());

    Json(DashboardSummary {
        greeting,
        selected_location,
        quick_actions: QUICK_ACTIONS,
        marketplace: marketplace_stats(state.listings.all()),
    })
}
