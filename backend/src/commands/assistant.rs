use super::settle;
use crate::error::BhoomiResult;
use crate::models::AssistantAnswer;
use crate::reference::{Language, LANGUAGES, SAMPLE_QUESTIONS};
use crate::services::adapters::request_assistant_answer;
use crate::state::{AppState, SessionContext};
use crate::views::ViewKind;
use axum::extract::State;
use axum::{Extension, Json};
use serde::Deserialize;

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub prompt: String,
    #[serde(default = "default_language")]
    pub language: String,
}

pub async fn ask_assistant(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Json(payload): Json<AskRequest>,
) -> BhoomiResult<Json<AssistantAnswer>> {
    let token = state.views.begin(&session.session_key, ViewKind::Assistant);
    let outcome =
        request_assistant_answer(state.services.as_ref(), &payload.prompt, &payload.language).await;
    settle(&state, &session, token, outcome, |v| &mut v.assistant)
}

pub async fn get_languages() -> Json<&'static [Language]> {
    Json(LANGUAGES)
}

pub async fn get_sample_questions() -> Json<&'static [&'static str]> {
    Json(SAMPLE_QUESTIONS)
}
