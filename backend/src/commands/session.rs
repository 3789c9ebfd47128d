use crate::state::{AppState, SessionContext};
use crate::views::SessionViews;
use axum::extract::State;
use axum::{Extension, Json};

/// Loading flags, last good results and errors for the caller's session.
pub async fn get_views(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Json<SessionViews> {
    Json(state.views.snapshot(&session.session_key))
}
