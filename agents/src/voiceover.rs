use tracing::instrument;
use types::{Style, VoiceResult};

pub const PLACEHOLDER_AUDIO_URL: &str = "/api/placeholder-audio";
pub const VOICE_DURATION_SECONDS: f64 = 15.0;

#[must_use]
pub const fn voice_id(style: &Style) -> &'static str {
    match style {
        Style::Professional => "professional-voice-id",
        Style::Brainrot => "energetic-voice-id",
        Style::InfoEducational => "calm-educational-voice-id",
        Style::Other(_) => "default",
    }
}

/// No synthesis happens yet; the script is only used for logging.
#[instrument(skip(script), fields(script_len = script.len()))]
pub fn generate_voice(script: &str, style: &Style) -> VoiceResult {
    tracing::info!("Voiceover Agent: Generating voice narration...");

    VoiceResult {
        audio_url: PLACEHOLDER_AUDIO_URL.to_string(),
        voice_id: voice_id(style).to_string(),
        duration: VOICE_DURATION_SECONDS,
    }
}
