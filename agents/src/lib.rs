/*!
 * Content generation agents.
 *
 * A generation request flows through five stages in a fixed order:
 * planner, scriptwriter, voiceover, visual designer and editor. Only the
 * first two talk to a language model, and both fall back to deterministic
 * output when that call fails, so the pipeline always produces a result.
 */
pub mod editor;
pub mod llm;
pub mod pipeline;
pub mod planner;
pub mod scriptwriter;
pub mod visuals;
pub mod voiceover;

use thiserror::Error;

pub use llm::{LanguageModel, OpenAiModel};
pub use pipeline::Pipeline;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("language model is not configured")]
    MissingApiKey,
    #[error("language model request failed: {0}")]
    Api(String),
    #[error("language model returned no content")]
    EmptyResponse,
    #[error("failed to parse language model output: {0}")]
    Parse(#[from] serde_json::Error),
}
