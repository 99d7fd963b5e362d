//! # huekit
//!
//! Color space conversion and color harmony toolkit.
//!
//! ## Features
//!
//! - **Conversions**: RGB, HSL, HSV, CMYK and hex, in every direction
//! - **Harmonies**: complementary, split-complementary, analogous, triad, tetrad, shades and tints
//! - **Accessibility**: WCAG relative luminance, contrast ratio and AA/AAA checks
//! - **Parsing**: hex literals, `rgb()`/`rgba()`, `hsl()`/`hsla()` and CSS color names
//! - **Naming**: nearest CSS named color for any hex value
//!
//! All operations are pure functions over small `Copy` values; nothing is
//! cached or mutated, so every function can be called from any thread.
//!
//! ## Quick Start
//!
//! ```rust
//! use huekit::{contrast, harmony, parser, Hsl, Rgb};
//!
//! let red = huekit::hex_to_rgb("#ff0000");
//! assert_eq!(red, Rgb::new(255, 0, 0));
//! assert_eq!(huekit::rgb_to_hsl(red), Hsl::new(0, 100, 50));
//!
//! assert_eq!(harmony::complementary("#ff0000"), "#00ffff");
//! assert_eq!(contrast::contrast_ratio("#ffffff", "#000000"), 21.0);
//! assert_eq!(parser::parse_color("rgb(255, 0, 0)").as_deref(), Some("#ff0000"));
//!
//! let nearest = huekit::names::closest_named_color("#fe0102").unwrap();
//! assert_eq!(nearest.name, "red");
//! ```
//!
//! ## Modules
//!
//! - [`color`] - value types, hex codec, RGB converters and space-to-space bridges
//! - [`harmony`] - palette generation
//! - [`contrast`] - WCAG luminance and contrast
//! - [`parser`] - color string parsing
//! - [`names`] - named color table and nearest-name search
//! - [`error`] - error type

pub mod color;
pub mod contrast;
pub mod error;
pub mod harmony;
pub mod names;
pub mod parser;

pub use color::{
    cmyk_to_hex, cmyk_to_rgb, hex_to_cmyk, hex_to_hsl, hex_to_hsv, hex_to_rgb, hsl_to_hex,
    hsl_to_hsv, hsl_to_rgb, hsv_to_hex, hsv_to_hsl, hsv_to_rgb, is_valid_hex, rgb_to_cmyk,
    rgb_to_hex, rgb_to_hsl, rgb_to_hsv, try_hex_to_rgb, Cmyk, Hsl, Hsv, Rgb,
};
pub use contrast::{
    contrast_ratio, is_wcag_aa_compliant, is_wcag_aaa_compliant, relative_luminance,
    ContrastReport,
};
pub use error::{ColorError, Result};
pub use harmony::{Harmony, HarmonyOptions};
pub use names::{closest_named_color, NamedColor, NamedColorMatch, NAMED_COLORS};
pub use parser::{parse_color, parse_color_strict};
