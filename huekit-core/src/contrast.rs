//! WCAG 2.x relative luminance and contrast checks.
//!
//! Ratios run from 1.0 (identical luminance) to 21.0 (black on white) and
//! are reported rounded to two decimals. The compliance checks compare that
//! rounded ratio against the thresholds below.

use crate::color::{hex_to_rgb, round2, Rgb};

/// Minimum ratio for AA, normal-size text.
pub const AA_NORMAL_TEXT: f64 = 4.5;
/// Minimum ratio for AAA, normal-size text.
pub const AAA_NORMAL_TEXT: f64 = 7.0;
/// Minimum ratio for AA, large text (18pt, or 14pt bold).
pub const AA_LARGE_TEXT: f64 = 3.0;
/// Minimum ratio for AAA, large text.
pub const AAA_LARGE_TEXT: f64 = 4.5;

fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance, 0.0 for black through 1.0 for white. Alpha is ignored.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

pub fn contrast_ratio_rgb(first: Rgb, second: Rgb) -> f64 {
    let a = relative_luminance(first);
    let b = relative_luminance(second);
    let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
    round2((lighter + 0.05) / (darker + 0.05))
}

/// Contrast ratio between two hex colors. The argument order does not matter.
pub fn contrast_ratio(first: &str, second: &str) -> f64 {
    contrast_ratio_rgb(hex_to_rgb(first), hex_to_rgb(second))
}

pub fn is_wcag_aa_compliant(foreground: &str, background: &str) -> bool {
    contrast_ratio(foreground, background) >= AA_NORMAL_TEXT
}

pub fn is_wcag_aaa_compliant(foreground: &str, background: &str) -> bool {
    contrast_ratio(foreground, background) >= AAA_NORMAL_TEXT
}

pub fn is_wcag_aa_large_text(foreground: &str, background: &str) -> bool {
    contrast_ratio(foreground, background) >= AA_LARGE_TEXT
}

pub fn is_wcag_aaa_large_text(foreground: &str, background: &str) -> bool {
    contrast_ratio(foreground, background) >= AAA_LARGE_TEXT
}

/// Every WCAG text check for one foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContrastReport {
    pub ratio: f64,
    pub aa: bool,
    pub aaa: bool,
    pub aa_large: bool,
    pub aaa_large: bool,
}

impl ContrastReport {
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            aa: ratio >= AA_NORMAL_TEXT,
            aaa: ratio >= AAA_NORMAL_TEXT,
            aa_large: ratio >= AA_LARGE_TEXT,
            aaa_large: ratio >= AAA_LARGE_TEXT,
        }
    }
}

pub fn evaluate(foreground: &str, background: &str) -> ContrastReport {
    ContrastReport::from_ratio(contrast_ratio(foreground, background))
}

/// Picks black or white text for the given background, whichever contrasts
/// more. Black wins a tie.
pub fn readable_text_color(background: &str) -> &'static str {
    let bg = hex_to_rgb(background);
    let on_black = contrast_ratio_rgb(Rgb::black(), bg);
    let on_white = contrast_ratio_rgb(Rgb::white(), bg);
    if on_black >= on_white {
        "#000000"
    } else {
        "#ffffff"
    }
}
