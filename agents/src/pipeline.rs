use std::sync::Arc;

use tracing::instrument;
use types::{GenerationMetadata, Style};

use crate::{
    LanguageModel, editor, planner, scriptwriter, visuals, voiceover,
};

/// Runs the generation stages in order: plan, script, voice, visuals, video.
#[derive(Clone)]
pub struct Pipeline {
    model: Arc<dyn LanguageModel>,
}

impl Pipeline {
    #[must_use]
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Never fails: stages that depend on the model substitute their
    /// fallbacks.
    #[instrument(skip(self))]
    pub async fn generate(&self, text: &str, style: &Style) -> GenerationMetadata {
        let plan = planner::plan(self.model.as_ref(), text, style).await;
        let script =
            scriptwriter::write_script(self.model.as_ref(), &plan, style).await;
        let voice = voiceover::generate_voice(&script.script, style);
        let visuals = visuals::design_visuals(&plan, &script, style);
        let video = editor::edit_video(&voice.audio_url, &visuals, &script);

        GenerationMetadata {
            plan,
            script,
            voice,
            visuals,
            video,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::fakes::FailingModel;

    #[tokio::test]
    async fn test_generate_completes_when_model_is_down() {
        let pipeline = Pipeline::new(Arc::new(FailingModel));

        let result = pipeline.generate("Budget tips", &Style::from("unknown")).await;

        assert_eq!(result.plan.key_message, "Budget tips");
        assert_eq!(result.script.timing.len(), 3);
        assert_eq!(result.voice.voice_id, "default");
        assert_eq!(result.visuals.captions, result.script.timing);
        assert_eq!(result.video.video_url, editor::SAMPLE_VIDEO_URL);
        assert_eq!(result.video.resolution, "1080x1920");
        assert_eq!(result.video.format, "mp4");
    }
}
