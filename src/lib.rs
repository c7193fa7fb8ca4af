//! Color ramp generation and WCAG contrast auditing for theme palettes.
//!
//! Everything here is a synchronous pure function over immutable inputs:
//! hex ⇄ HSL conversion, 11-step shade ramps from a seed color, WCAG
//! relative luminance and contrast ratios, and a theme-level audit that
//! flags base colors failing AA against white text.

pub mod math;
pub mod scale;
pub mod theme;
pub mod types;

pub use math::checker::{check_wcag_compliance, WcagResult};
pub use math::hsl::{hex_to_hsl, hsl_to_hex, Hsl};
pub use math::wcag::{contrast_ratio, relative_luminance};
pub use scale::generate_color_scale;
pub use theme::wcag_warnings;
pub use types::{ColorScale, ThemeColors, WcagWarning, SHADE_KEYS};
