//! Wire and data model shared by the generation pipeline, the publisher and
//! the HTTP service.
//!
//! Every entity lives for a single request; nothing here is persisted.

mod platform;
mod style;

pub use platform::Platform;
pub use style::Style;

use std::collections::HashMap;

use redact::Secret;
use serde::{Deserialize, Serialize};

/// Structured plan produced by the content planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPlan {
    pub key_message: String,
    pub target_audience: String,
    pub tone: String,
    pub visual_elements: Vec<String>,
    pub hook: String,
    pub call_to_action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptSegment {
    pub text: String,
    /// Offset from the start of the video, in seconds.
    pub start_time: f64,
    /// Seconds.
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub script: String,
    pub timing: Vec<ScriptSegment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceResult {
    pub audio_url: String,
    pub voice_id: String,
    pub duration: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Background {
    GradientBlue,
    GradientPinkPurple,
    GradientGreen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextStyle {
    BoldSans,
    BoldPlayful,
    CleanSerif,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transition {
    SmoothFade,
    QuickZoom,
    Slide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    BlueWhite,
    PinkPurple,
    GreenWhite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualTheme {
    pub background: Background,
    pub text_style: TextStyle,
    pub transitions: Transition,
    pub color_scheme: ColorScheme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualSpec {
    #[serde(flatten)]
    pub theme: VisualTheme,
    pub captions: Vec<ScriptSegment>,
    pub b_roll: Vec<String>,
}

/// Terminal artifact of the generation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResult {
    pub video_url: String,
    pub duration: f64,
    pub resolution: String,
    pub format: String,
}

/// Outcome of posting to one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformPostResult {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,

    pub optimal_time: String,
    pub caption: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    pub text: Option<String>,
    pub style: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    pub plan: ContentPlan,
    pub script: Script,
    pub voice: VoiceResult,
    pub visuals: VisualSpec,
    pub video: VideoResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub video_url: String,
    pub metadata: GenerationMetadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    pub video_url: Option<String>,
    pub platforms: Option<Vec<Platform>>,

    /// When present, YouTube is posted through the real upload API.
    pub youtube_access_token: Option<Secret<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub success: bool,
    pub results: HashMap<String, PlatformPostResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct YouTubeAuthQuery {
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct YouTubeCallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
}
