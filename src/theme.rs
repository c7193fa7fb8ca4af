use crate::math::checker::check_wcag_compliance;
use crate::types::{ThemeColors, WcagWarning};

/// White text on a scale's 500 shade, the rendered state of solid-variant
/// components.
const SOLID_TEXT: &str = "#ffffff";

/// Walk every color scale in the theme and report each base (500) shade
/// whose contrast with white text fails WCAG AA. Warnings come out in the
/// theme's iteration order. Only the solid variant is audited; soft,
/// outlined and plain variants render different color pairs and are out of
/// scope here.
pub fn wcag_warnings(theme: &ThemeColors) -> Vec<WcagWarning> {
    let mut warnings = Vec::new();
    for (name, scale) in theme.iter() {
        let result = check_wcag_compliance(SOLID_TEXT, &scale.shade_500);
        if !result.passes_aa {
            warnings.push(WcagWarning {
                scale: name.to_string(),
                variant: "solid".to_string(),
                issue: format!(
                    "White text on the {name} base color has a contrast ratio of {:.2}:1, below the WCAG AA minimum of 4.5:1",
                    result.ratio
                ),
                recommendation: "Use a darker shade (600+) or adjust the base color".to_string(),
            });
        }
    }
    warnings
}
