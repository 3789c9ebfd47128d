use super::settle;
use crate::error::{BhoomiError, BhoomiResult};
use crate::models::{ClassificationResult, ImageUpload};
use crate::reference::{Pesticide, SampleInsect, PESTICIDES, SAMPLE_INSECTS};
use crate::services::adapters::request_insect_identification;
use crate::state::{AppState, SessionContext};
use crate::views::ViewKind;
use axum::extract::{Multipart, State};
use axum::{Extension, Json};

async fn read_image_field(mut multipart: Multipart) -> BhoomiResult<ImageUpload> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| BhoomiError::validation(format!("Invalid upload: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| BhoomiError::validation(format!("Invalid upload: {}", e)))?;

        return Ok(ImageUpload {
            file_name,
            mime_type,
            bytes: bytes.to_vec(),
        });
    }
    Err(BhoomiError::validation("Missing 'image' field in upload"))
}

pub async fn identify_insect(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    multipart: Multipart,
) -> BhoomiResult<Json<ClassificationResult>> {
    let upload = read_image_field(multipart).await?;

    let token = state.views.begin(&session.session_key, ViewKind::Insect);
    let outcome = request_insect_identification(state.services.as_ref(), upload).await;
    settle(&state, &session, token, outcome, |v| &mut v.insect)
}

pub async fn get_pesticides() -> Json<&'static [Pesticide]> {
    Json(PESTICIDES)
}

pub async fn get_sample_insects() -> Json<&'static [SampleInsect]> {
    Json(SAMPLE_INSECTS)
}
