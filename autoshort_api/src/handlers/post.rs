use axum::{Json, body::Bytes, extract::State};
use tracing::instrument;
use types::{PostRequest, PostResponse};

use super::{non_empty, parse_body};
use crate::error::{ApiError, ApiResult};
use crate::structs::AppState;

#[instrument(skip(state, body))]
pub async fn post_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<PostResponse>> {
    let request: PostRequest = parse_body(&body)?;

    let (Some(video_url), Some(platforms)) = (
        non_empty(request.video_url),
        request.platforms.filter(|p| !p.is_empty()),
    ) else {
        return Err(ApiError::bad_request("Missing videoUrl or platforms"));
    };

    let youtube_access_token = request
        .youtube_access_token
        .filter(|token| !token.expose_secret().is_empty());

    let results = state
        .dispatcher
        .dispatch(&video_url, &platforms, youtube_access_token.as_ref())
        .await;

    Ok(Json(PostResponse {
        success: true,
        results,
    }))
}
