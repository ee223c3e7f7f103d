use types::{Script, VideoResult, VisualSpec};

/// Sample clip returned until real rendering exists.
pub const SAMPLE_VIDEO_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

/// Terminal stage. Inputs are accepted but not yet used for rendering.
pub fn edit_video(
    _audio_url: &str,
    _visuals: &VisualSpec,
    _script: &Script,
) -> VideoResult {
    tracing::info!("Editor Agent: Assembling final video...");

    VideoResult {
        video_url: SAMPLE_VIDEO_URL.to_string(),
        duration: 15.0,
        resolution: "1080x1920".to_string(),
        format: "mp4".to_string(),
    }
}
