//! Free-form color string parsing.
//!
//! Recognized forms, tried in this order:
//! * hex literal: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! * `rgb(r, g, b)` / `rgba(r, g, b, a)`
//! * `hsl(h, s%, l%)` / `hsla(h, s%, l%, a)` (the `%` signs are optional)
//! * a CSS color name, in any case
//!
//! Everything is normalized to a lowercase hex string. Out-of-range numbers
//! are clamped rather than rejected: channels to 255, saturation and
//! lightness to 100, alpha to 0.0-1.0. Hue wraps at 360.

use crate::color::{hsl_to_hex, is_valid_hex, rgb_to_hex, try_hex_to_rgb, Hsl, Rgb};
use crate::error::{ColorError, Result};
use crate::names::named_color_hex;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::str::FromStr;
use tracing::trace;

lazy_static! {
    static ref RGB_FUNCTION: Regex = Regex::new(
        r"(?i)^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d*\.?\d+)\s*)?\)$"
    )
    .expect("rgb pattern is valid");
    static ref HSL_FUNCTION: Regex = Regex::new(
        r"(?i)^hsla?\(\s*(\d{1,3})\s*,\s*(\d{1,3})%?\s*,\s*(\d{1,3})%?\s*(?:,\s*(\d*\.?\d+)\s*)?\)$"
    )
    .expect("hsl pattern is valid");
}

fn number(caps: &Captures<'_>, index: usize, max: u16) -> Option<u16> {
    caps.get(index)?.as_str().parse::<u16>().ok().map(|n| n.min(max))
}

fn alpha(caps: &Captures<'_>) -> Option<f64> {
    match caps.get(4) {
        Some(m) => m.as_str().parse::<f64>().ok(),
        None => Some(1.0),
    }
}

fn parse_rgb_function(caps: &Captures<'_>) -> Option<String> {
    let rgb = Rgb::with_alpha(
        number(caps, 1, 255)? as u8,
        number(caps, 2, 255)? as u8,
        number(caps, 3, 255)? as u8,
        alpha(caps)?,
    );
    Some(rgb_to_hex(rgb))
}

fn parse_hsl_function(caps: &Captures<'_>) -> Option<String> {
    let hsl = Hsl::with_alpha(
        number(caps, 1, u16::MAX)?,
        number(caps, 2, 100)? as u8,
        number(caps, 3, 100)? as u8,
        alpha(caps)?,
    );
    Some(hsl_to_hex(hsl))
}

/// Parses `text` into a hex string, or `None` when no form matches.
///
/// ```
/// use huekit::parser::parse_color;
///
/// assert_eq!(parse_color("rgb(255, 0, 0)").as_deref(), Some("#ff0000"));
/// assert_eq!(parse_color("hsla(120, 100%, 25%, 0.5)").as_deref(), Some("#00800080"));
/// assert_eq!(parse_color("RebeccaPurple").as_deref(), Some("#663399"));
/// assert_eq!(parse_color("not a color"), None);
/// ```
pub fn parse_color(text: &str) -> Option<String> {
    let text = text.trim();

    if is_valid_hex(text) {
        trace!(input = text, "parsed hex literal");
        return Some(text.to_ascii_lowercase());
    }
    if let Some(caps) = RGB_FUNCTION.captures(text) {
        trace!(input = text, "parsed rgb function");
        return parse_rgb_function(&caps);
    }
    if let Some(caps) = HSL_FUNCTION.captures(text) {
        trace!(input = text, "parsed hsl function");
        return parse_hsl_function(&caps);
    }

    let named = named_color_hex(text).map(str::to_string);
    if named.is_none() {
        trace!(input = text, "unrecognized color string");
    }
    named
}

/// Like [`parse_color`], but reports a miss as [`ColorError::UnrecognizedColor`].
pub fn parse_color_strict(text: &str) -> Result<String> {
    parse_color(text).ok_or_else(|| ColorError::UnrecognizedColor(text.to_string()))
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        try_hex_to_rgb(&parse_color_strict(s)?)
    }
}
