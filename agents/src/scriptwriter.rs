use tracing::instrument;
use types::{ContentPlan, Script, ScriptSegment, Style};

use crate::llm::{self, LanguageModel};

const SAMPLE_SCRIPT: &str = "This is a sample script for your video content.";

fn prompt(plan: &ContentPlan, style: &Style) -> String {
    // ContentPlan only holds strings, serialization cannot fail.
    let plan = serde_json::to_string(plan).unwrap_or_default();

    format!(
        r"You are a Scriptwriter Agent. Write a 10-15 second video script based on this plan.

Plan: {plan}
Style: {style}

Create a script that:
- Has a strong hook in the first 3 seconds
- Is optimized for short-form content
- Matches the {style} style
- Includes natural pauses for visuals
- Ends with a clear call to action

Return a JSON object with:
- script: the full script text
- timing: array of {{text, startTime, duration}} for each segment"
    )
}

/// Turn a plan into a timed script.
///
/// Makes exactly one model call; any failure yields [`fallback_script`].
#[instrument(skip(model))]
pub async fn write_script(
    model: &dyn LanguageModel,
    plan: &ContentPlan,
    style: &Style,
) -> Script {
    tracing::info!("Scriptwriter Agent: Creating platform-optimized scripts...");

    match llm::complete_as::<Script>(model, &prompt(plan, style)).await {
        Ok(script) => script,
        Err(e) => {
            tracing::warn!("scriptwriter falling back: {}", e);
            fallback_script(plan)
        }
    }
}

/// Three segments: hook, key message, call to action at 0s, 2s and 12s.
#[must_use]
pub fn fallback_script(plan: &ContentPlan) -> Script {
    let or = |value: &str, default: &str| {
        if value.is_empty() {
            default.to_string()
        } else {
            value.to_string()
        }
    };

    Script {
        script: or(&plan.key_message, SAMPLE_SCRIPT),
        timing: vec![
            ScriptSegment {
                text: or(&plan.hook, "Did you know?"),
                start_time: 0.0,
                duration: 2.0,
            },
            ScriptSegment {
                text: or(&plan.key_message, SAMPLE_SCRIPT),
                start_time: 2.0,
                duration: 10.0,
            },
            ScriptSegment {
                text: or(&plan.call_to_action, "Follow for more!"),
                start_time: 12.0,
                duration: 3.0,
            },
        ],
    }
}
