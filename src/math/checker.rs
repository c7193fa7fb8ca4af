use serde::{Deserialize, Serialize};

/// Contrast ratio of a foreground/background pair classified against the
/// WCAG text thresholds. Derived once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WcagResult {
    pub ratio: f64,
    pub passes_aa: bool,
    pub passes_aaa: bool,
    pub passes_aa_large: bool,
}

/// Thresholds for normal text AA (4.5:1), normal text AAA (7:1) and large
/// text AA (3:1). The booleans classify the raw ratio; the reported `ratio`
/// is rounded to two decimal places for presentation.
pub fn check_wcag_compliance(foreground: &str, background: &str) -> WcagResult {
    let raw = super::wcag::contrast_ratio(foreground, background);
    WcagResult {
        ratio: (raw * 100.0).round() / 100.0,
        passes_aa: raw >= 4.5,
        passes_aaa: raw >= 7.0,
        passes_aa_large: raw >= 3.0,
    }
}
