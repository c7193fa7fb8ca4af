use serde::{Deserialize, Serialize};

/// Integer HSL color: hue in degrees (0-359), saturation and lightness as
/// percentages (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Build an `Hsl`, wrapping the hue into 0-359 and clamping
    /// saturation/lightness to 0-100.
    pub fn new(h: i32, s: i32, l: i32) -> Self {
        Self {
            h: h.rem_euclid(360) as u16,
            s: s.clamp(0, 100) as u8,
            l: l.clamp(0, 100) as u8,
        }
    }
}

/// Convert a 6-digit hex color to HSL, rounding each component to the
/// nearest integer. Inherits the lenient parse contract of
/// [`parse_hex_rgb`](super::hex::parse_hex_rgb): malformed input converts
/// as black.
pub fn hex_to_hsl(hex: &str) -> Hsl {
    let (r, g, b) = super::hex::parse_hex_rgb(hex);
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let (h, s) = if delta == 0.0 {
        (0.0, 0.0)
    } else {
        let s = delta / (1.0 - (2.0 * l - 1.0).abs());
        let h = 60.0
            * if max == r {
                ((g - b) / delta).rem_euclid(6.0)
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
        (h, s)
    };

    Hsl::new(
        h.round() as i32,
        (s * 100.0).round() as i32,
        (l * 100.0).round() as i32,
    )
}

/// One leg of the standard HSL reconstruction: map a hue offset to a
/// linear RGB channel given the two chroma anchors.
fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Convert HSL back to a lowercase `#rrggbb` string. The round trip through
/// [`hex_to_hsl`] is lossy by design: integer rounding at each step bounds
/// the drift to one unit per channel.
pub fn hsl_to_hex(hsl: Hsl) -> String {
    let h = hsl.h as f64 / 360.0;
    let s = hsl.s as f64 / 100.0;
    let l = hsl.l as f64 / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    super::hex::format_hex_rgb(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}
