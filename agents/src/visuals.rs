use tracing::instrument;
use types::{
    Background, ColorScheme, ContentPlan, Script, Style, TextStyle, Transition,
    VisualSpec, VisualTheme,
};

const PROFESSIONAL: VisualTheme = VisualTheme {
    background: Background::GradientBlue,
    text_style: TextStyle::BoldSans,
    transitions: Transition::SmoothFade,
    color_scheme: ColorScheme::BlueWhite,
};

const BRAINROT: VisualTheme = VisualTheme {
    background: Background::GradientPinkPurple,
    text_style: TextStyle::BoldPlayful,
    transitions: Transition::QuickZoom,
    color_scheme: ColorScheme::PinkPurple,
};

const INFO_EDUCATIONAL: VisualTheme = VisualTheme {
    background: Background::GradientGreen,
    text_style: TextStyle::CleanSerif,
    transitions: Transition::Slide,
    color_scheme: ColorScheme::GreenWhite,
};

/// Unknown styles get the professional theme.
#[must_use]
pub const fn theme_for(style: &Style) -> VisualTheme {
    match style {
        Style::Brainrot => BRAINROT,
        Style::InfoEducational => INFO_EDUCATIONAL,
        Style::Professional | Style::Other(_) => PROFESSIONAL,
    }
}

#[instrument(skip_all, fields(style = %style))]
pub fn design_visuals(
    _plan: &ContentPlan,
    script: &Script,
    style: &Style,
) -> VisualSpec {
    tracing::info!("Visual Design Agent: Selecting visuals and graphics...");

    VisualSpec {
        theme: theme_for(style),
        captions: script.timing.clone(),
        b_roll: vec!["stock-footage-1".to_string(), "stock-footage-2".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{planner::fallback_plan, scriptwriter::fallback_script};

    #[test]
    fn test_unknown_style_gets_professional_theme() {
        assert_eq!(theme_for(&Style::from("synthwave")), theme_for(&Style::Professional));
        assert_eq!(theme_for(&Style::Professional).background, Background::GradientBlue);
    }

    #[test]
    fn test_styles_map_to_distinct_themes() {
        assert_eq!(theme_for(&Style::Brainrot).transitions, Transition::QuickZoom);
        assert_eq!(theme_for(&Style::InfoEducational).text_style, TextStyle::CleanSerif);
    }

    #[test]
    fn test_captions_copy_script_segments() {
        let plan = fallback_plan("idea", &Style::Brainrot);
        let script = fallback_script(&plan);

        let visuals = design_visuals(&plan, &script, &Style::Brainrot);

        assert_eq!(visuals.captions, script.timing);
        assert_eq!(visuals.b_roll, vec!["stock-footage-1", "stock-footage-2"]);
        assert_eq!(visuals.theme.color_scheme, ColorScheme::PinkPurple);
    }
}
