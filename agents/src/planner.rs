use tracing::instrument;
use types::{ContentPlan, Style};

use crate::llm::{self, LanguageModel};

fn prompt(text: &str, style: &Style) -> String {
    format!(
        r#"You are a Content Planner Agent. Analyze this idea and create a beat-by-beat narrative plan.

Idea: "{text}"
Style: {style}

Create a structured plan with:
1. Key message
2. Target audience
3. Tone and style
4. Visual elements needed
5. Hook (first 3 seconds)
6. Call to action

Return a JSON object with exactly these fields: keyMessage, targetAudience, tone, visualElements (array of strings), hook, callToAction."#
    )
}

/// Turn a raw idea into a structured content plan.
///
/// Makes exactly one model call; any failure yields [`fallback_plan`].
#[instrument(skip(model))]
pub async fn plan(
    model: &dyn LanguageModel,
    text: &str,
    style: &Style,
) -> ContentPlan {
    tracing::info!("Content Planner Agent: Analyzing your idea...");

    match llm::complete_as::<ContentPlan>(model, &prompt(text, style)).await {
        Ok(plan) => plan,
        Err(e) => {
            tracing::warn!("content planner falling back: {}", e);
            fallback_plan(text, style)
        }
    }
}

#[must_use]
pub fn fallback_plan(text: &str, style: &Style) -> ContentPlan {
    let target_audience = if *style == Style::Professional {
        "Business professionals"
    } else {
        "General audience"
    };

    ContentPlan {
        key_message: text.to_string(),
        target_audience: target_audience.to_string(),
        tone: style.to_string(),
        visual_elements: vec![
            "Text overlays".to_string(),
            "Background graphics".to_string(),
            "B-roll footage".to_string(),
        ],
        hook: "Did you know?".to_string(),
        call_to_action: "Follow for more tips!".to_string(),
    }
}
