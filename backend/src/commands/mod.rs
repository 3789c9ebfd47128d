use crate::error::{BhoomiError, BhoomiResult};
use crate::state::{AppState, SessionContext};
use crate::views::{ActionState, SessionViews};
use axum::Json;

pub mod assistant;
pub mod dashboard;
pub mod insects;
pub mod marketplace;
pub mod session;
pub mod utility;
pub mod weather;
pub mod yield_predictor;

/// Records `outcome` against the session's view state and answers the caller.
/// A response overtaken by a newer request of the same kind is dropped.
pub(crate) fn settle<T: Clone>(
    state: &AppState,
    session: &SessionContext,
    token: u64,
    outcome: BhoomiResult<T>,
    view: impl FnOnce(&mut SessionViews) -> &mut ActionState<T>,
) -> BhoomiResult<Json<T>> {
    let applied = state
        .views
        .with_session(&session.session_key, |views| view(views).complete(token, &outcome));

    if !applied {
        tracing::info!(
            "Dropping superseded response (session={}, token={})",
            session.session_key,
            token
        );
        return Err(BhoomiError::Superseded);
    }
    outcome.map(Json)
}
