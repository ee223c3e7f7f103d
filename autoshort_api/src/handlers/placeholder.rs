use axum::response::Redirect;

/// Stands in for generated video files until they are stored somewhere.
pub async fn placeholder_video_handler() -> Redirect {
    Redirect::temporary(agents::editor::SAMPLE_VIDEO_URL)
}
