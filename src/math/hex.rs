/// Parse a 6-digit hex string to RGB channels (0-255).
/// The leading `#` is optional.
/// Returns (0, 0, 0) on malformed input; this crate deliberately keeps the
/// lenient contract rather than surfacing a parse error.
pub fn parse_hex_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_char_boundary(2) || !hex.is_char_boundary(4) {
        return (0, 0, 0);
    }
    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
    (r, g, b)
}

/// Format RGB channels as a lowercase `#rrggbb` string.
pub fn format_hex_rgb(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_6digit_hex() {
        assert_eq!(parse_hex_rgb("#ff0000"), (255, 0, 0));
        assert_eq!(parse_hex_rgb("#00ff00"), (0, 255, 0));
        assert_eq!(parse_hex_rgb("#3b82f6"), (59, 130, 246));
    }

    #[test]
    fn parse_without_prefix() {
        assert_eq!(parse_hex_rgb("1e293b"), (30, 41, 59));
    }

    #[test]
    fn parse_uppercase() {
        assert_eq!(parse_hex_rgb("#FF8000"), (255, 128, 0));
    }

    #[test]
    fn parse_malformed_returns_black() {
        assert_eq!(parse_hex_rgb("not-a-color"), (0, 0, 0));
        assert_eq!(parse_hex_rgb("#xyz"), (0, 0, 0));
        assert_eq!(parse_hex_rgb(""), (0, 0, 0));
        assert_eq!(parse_hex_rgb("#ff00"), (0, 0, 0));
    }

    #[test]
    fn parse_bad_digits_zero_channel() {
        // valid length, invalid digits in the middle channel only
        assert_eq!(parse_hex_rgb("#ffzzff"), (255, 0, 255));
    }

    #[test]
    fn format_is_lowercase_and_padded() {
        assert_eq!(format_hex_rgb(255, 0, 0), "#ff0000");
        assert_eq!(format_hex_rgb(9, 9, 11), "#09090b");
        assert_eq!(format_hex_rgb(0, 0, 0), "#000000");
    }

    #[test]
    fn parse_format_round_trip() {
        let (r, g, b) = parse_hex_rgb("#3b82f6");
        assert_eq!(format_hex_rgb(r, g, b), "#3b82f6");
    }
}
