use crate::math::hsl::{hex_to_hsl, hsl_to_hex, Hsl};
use crate::types::ColorScale;

/// How one derived shade is produced from the seed's HSL: a fixed target
/// lightness plus a factor applied to the seed's saturation.
struct ShadePolicy {
    key: u16,
    lightness: u8,
    saturation_scale: f64,
}

/// Hand-tuned ramp policy. Lighter tints desaturate toward white for a
/// softer look; shades 400 and darker keep the seed's saturation so dark
/// shades stay vivid. Shade 500 is the seed itself and has no entry here.
const SHADE_POLICY: [ShadePolicy; 10] = [
    ShadePolicy { key: 50, lightness: 97, saturation_scale: 0.70 },
    ShadePolicy { key: 100, lightness: 94, saturation_scale: 0.80 },
    ShadePolicy { key: 200, lightness: 87, saturation_scale: 0.85 },
    ShadePolicy { key: 300, lightness: 74, saturation_scale: 0.95 },
    ShadePolicy { key: 400, lightness: 62, saturation_scale: 1.0 },
    ShadePolicy { key: 600, lightness: 45, saturation_scale: 1.0 },
    ShadePolicy { key: 700, lightness: 38, saturation_scale: 1.0 },
    ShadePolicy { key: 800, lightness: 30, saturation_scale: 1.0 },
    ShadePolicy { key: 900, lightness: 23, saturation_scale: 1.0 },
    ShadePolicy { key: 950, lightness: 14, saturation_scale: 1.0 },
];

fn derive_shade(base: Hsl, policy: &ShadePolicy) -> String {
    let s = (base.s as f64 * policy.saturation_scale).round() as i32;
    hsl_to_hex(Hsl::new(base.h as i32, s, policy.lightness as i32))
}

/// Derive the full 11-step ramp from one seed color. The hue is held fixed
/// across every shade; the 500 slot is the seed string verbatim, `#` prefix
/// and letter case preserved.
pub fn generate_color_scale(seed_hex: &str) -> ColorScale {
    let base = hex_to_hsl(seed_hex);
    let [s50, s100, s200, s300, s400, s600, s700, s800, s900, s950] =
        SHADE_POLICY.each_ref().map(|p| derive_shade(base, p));
    ColorScale {
        shade_50: s50,
        shade_100: s100,
        shade_200: s200,
        shade_300: s300,
        shade_400: s400,
        shade_500: seed_hex.to_string(),
        shade_600: s600,
        shade_700: s700,
        shade_800: s800,
        shade_900: s900,
        shade_950: s950,
    }
}
