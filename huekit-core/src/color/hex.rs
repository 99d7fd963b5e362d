//! Hex color codec.
//!
//! Accepted forms (leading `#` optional when decoding):
//! * RGB
//! * RGBA
//! * RRGGBB
//! * RRGGBBAA

use super::{clamp_alpha, round2, Rgb};
use crate::error::{ColorError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    static ref HEX_PATTERN: Regex =
        Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
            .expect("hex pattern is valid");
}

/// Returns true for `#` followed by 3, 4, 6 or 8 hex digits, in any case.
pub fn is_valid_hex(text: &str) -> bool {
    HEX_PATTERN.is_match(text)
}

/// Decodes a hex string, reporting bad lengths or digits as [`ColorError::InvalidHex`].
pub fn try_hex_to_rgb(hex: &str) -> Result<Rgb> {
    let invalid = || ColorError::InvalidHex(hex.to_string());
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    let nibbles = digits
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(invalid)?;

    let channels: Vec<u8> = match nibbles.len() {
        // short forms double each digit: f -> ff
        3 | 4 => nibbles.iter().map(|n| n * 17).collect(),
        6 | 8 => nibbles.chunks(2).map(|pair| pair[0] << 4 | pair[1]).collect(),
        _ => return Err(invalid()),
    };

    let a = channels
        .get(3)
        .map_or(1.0, |&alpha| round2(f64::from(alpha) / 255.0));

    Ok(Rgb {
        r: channels[0],
        g: channels[1],
        b: channels[2],
        a,
    })
}

/// Decodes a hex string, falling back to opaque black when it is malformed.
///
/// Use [`try_hex_to_rgb`] when the caller needs to tell bad input apart from
/// a genuine `#000000`.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    try_hex_to_rgb(hex).unwrap_or_else(|err| {
        debug!(%err, "falling back to opaque black");
        Rgb::black()
    })
}

/// Encodes as lowercase `#rrggbb`, or `#rrggbbaa` when not fully opaque.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    let a = clamp_alpha(rgb.a);
    if a >= 1.0 {
        format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
    } else {
        let alpha = (a * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_six_digit() {
        assert_eq!(hex_to_rgb("#ff0000"), Rgb::new(255, 0, 0));
        assert_eq!(hex_to_rgb("1e90ff"), Rgb::new(30, 144, 255));
        assert_eq!(hex_to_rgb("#ABCDEF"), Rgb::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn test_decode_short_forms() {
        assert_eq!(hex_to_rgb("#f00"), Rgb::new(255, 0, 0));
        assert_eq!(hex_to_rgb("#abc"), Rgb::new(0xaa, 0xbb, 0xcc));

        let rgba = hex_to_rgb("#f008");
        assert_eq!((rgba.r, rgba.g, rgba.b), (255, 0, 0));
        assert_eq!(rgba.a, 0.53);
    }

    #[test]
    fn test_decode_alpha_suffix() {
        assert_eq!(hex_to_rgb("#ff000080").a, 0.5);
        assert_eq!(hex_to_rgb("#ff0000ff").a, 1.0);
        assert_eq!(hex_to_rgb("#ff000000").a, 0.0);
    }

    #[test]
    fn test_malformed_hex_falls_back_to_black() {
        for bad in ["", "#", "#12", "#12345", "#1234567", "#ggg", "#ff00zz", "#ffé"] {
            assert_eq!(hex_to_rgb(bad), Rgb::black(), "input {bad:?}");
        }
    }

    #[test]
    fn test_try_decode_reports_error() {
        match try_hex_to_rgb("#12345") {
            Err(ColorError::InvalidHex(input)) => assert_eq!(input, "#12345"),
            other => panic!("Expected InvalidHex, got {other:?}"),
        }
        assert!(try_hex_to_rgb("#zzzzzz").is_err());
        assert!(try_hex_to_rgb("#000000").is_ok());
    }

    #[test]
    fn test_encode() {
        assert_eq!(rgb_to_hex(Rgb::new(255, 0, 0)), "#ff0000");
        assert_eq!(rgb_to_hex(Rgb::new(0, 0, 0)), "#000000");
        assert_eq!(rgb_to_hex(Rgb::with_alpha(255, 0, 0, 0.5)), "#ff000080");
        assert_eq!(rgb_to_hex(Rgb::with_alpha(255, 0, 0, 0.0)), "#ff000000");
    }

    #[test]
    fn test_encode_clamps_out_of_range_alpha() {
        let over = Rgb {
            r: 1,
            g: 2,
            b: 3,
            a: 7.5,
        };
        assert_eq!(rgb_to_hex(over), "#010203");

        let under = Rgb {
            r: 1,
            g: 2,
            b: 3,
            a: -1.0,
        };
        assert_eq!(rgb_to_hex(under), "#01020300");
    }

    #[test]
    fn test_round_trip_six_digit() {
        for hex in ["#000000", "#ffffff", "#1e90ff", "#663399", "#7f7f7f"] {
            assert_eq!(rgb_to_hex(hex_to_rgb(hex)), hex);
        }
    }

    #[test]
    fn test_is_valid_hex() {
        assert!(is_valid_hex("#fff"));
        assert!(is_valid_hex("#FFFA"));
        assert!(is_valid_hex("#a1b2c3"));
        assert!(is_valid_hex("#A1B2C3D4"));
        assert!(!is_valid_hex("fff"));
        assert!(!is_valid_hex("#ff"));
        assert!(!is_valid_hex("#fffff"));
        assert!(!is_valid_hex("#ggg"));
        assert!(!is_valid_hex(" #fff"));
    }
}
