use axum::{Json, body::Bytes, extract::State};
use tracing::instrument;
use types::{GenerateRequest, GenerateResponse, Style};

use super::{non_empty, parse_body};
use crate::error::{ApiError, ApiResult};
use crate::structs::AppState;

#[instrument(skip(state, body))]
pub async fn generate_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<GenerateResponse>> {
    let request: GenerateRequest = parse_body(&body)?;

    let (Some(text), Some(style)) =
        (non_empty(request.text), non_empty(request.style))
    else {
        return Err(ApiError::bad_request("Missing text or style"));
    };

    let style = Style::from(style);
    tracing::info!(style = %style, "generating video");

    let metadata = state.pipeline.generate(&text, &style).await;

    Ok(Json(GenerateResponse {
        success: true,
        video_url: metadata.video.video_url.clone(),
        metadata,
    }))
}
