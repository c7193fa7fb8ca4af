/// Convert an sRGB channel (0-255) to linear light.
/// sRGB -> linear: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per the WCAG formula.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(hex: &str) -> f64 {
    let (r, g, b) = super::hex::parse_hex_rgb(hex);
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// WCAG contrast ratio between two colors, symmetric in its arguments.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2; range is [1, 21].
pub fn contrast_ratio(hex_a: &str, hex_b: &str) -> f64 {
    let l1 = relative_luminance(hex_a);
    let l2 = relative_luminance(hex_b);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_luminance_is_1() {
        assert!((relative_luminance("#ffffff") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn black_luminance_is_0() {
        assert!(relative_luminance("#000000").abs() < 1e-9);
    }

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio("#000000", "#ffffff");
        assert!((ratio - 21.0).abs() < 0.01);
    }

    #[test]
    fn self_contrast_is_1() {
        for hex in ["#ffffff", "#3b82f6", "#123456"] {
            assert!((contrast_ratio(hex, hex) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn gray_on_white() {
        // reference: 4.54
        let ratio = contrast_ratio("#767676", "#ffffff");
        assert!((ratio - 4.54).abs() < 0.1);
    }

    #[test]
    fn order_independent() {
        let r1 = contrast_ratio("#ff0000", "#ffffff");
        let r2 = contrast_ratio("#ffffff", "#ff0000");
        assert!((r1 - r2).abs() < 1e-9);
    }

    #[test]
    fn red_on_white() {
        // reference: 3.99
        let ratio = contrast_ratio("#ff0000", "#ffffff");
        assert!((ratio - 3.99).abs() < 0.1);
    }

    #[test]
    fn slate_on_white() {
        // reference: 14.62
        let ratio = contrast_ratio("#1e293b", "#ffffff");
        assert!((ratio - 14.62).abs() < 0.1);
    }

    #[test]
    fn yellow_on_white_is_near_floor() {
        let ratio = contrast_ratio("#ffff00", "#ffffff");
        assert!(ratio < 1.1);
    }
}
