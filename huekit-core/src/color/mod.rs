//! Color value types and the conversions between them.
//!
//! Every type here is a small `Copy` value. Components are stored already
//! rounded and clamped: channels as `u8`, hue as whole degrees, saturation,
//! lightness, value and CMYK inks as whole percentages, and alpha as an
//! `f64` kept to two decimal places.

mod bridge;
mod convert;
mod hex;

pub use bridge::{
    cmyk_to_hex, hex_to_cmyk, hex_to_hsl, hex_to_hsv, hsl_to_hex, hsl_to_hsv, hsv_to_hex,
    hsv_to_hsl,
};
pub use convert::{cmyk_to_rgb, hsl_to_rgb, hsv_to_rgb, rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv};
pub use hex::{hex_to_rgb, is_valid_hex, rgb_to_hex, try_hex_to_rgb};

use std::fmt;

/// Rounds to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Clamps alpha to 0.0-1.0. NaN is treated as opaque.
pub(crate) fn clamp_alpha(a: f64) -> f64 {
    if a.is_nan() {
        1.0
    } else {
        a.clamp(0.0, 1.0)
    }
}

pub(crate) fn normalize_alpha(a: f64) -> f64 {
    round2(clamp_alpha(a))
}

/// An sRGB color with 8-bit channels and straight alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha from 0.0 (transparent) to 1.0 (opaque)
    pub a: f64,
}

impl Rgb {
    /// Creates an opaque RGB color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates an RGB color with alpha clamped to 0.0-1.0 and rounded to two decimals.
    pub fn with_alpha(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: normalize_alpha(a),
        }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }

    pub fn is_opaque(&self) -> bool {
        clamp_alpha(self.a) >= 1.0
    }

    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }

    /// CMYK carries no alpha; it is dropped.
    pub fn to_cmyk(self) -> Cmyk {
        rgb_to_cmyk(self)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                normalize_alpha(self.a)
            )
        }
    }
}

/// Hue, saturation and lightness.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in degrees, 0-359
    pub h: u16,
    /// Saturation percentage, 0-100
    pub s: u8,
    /// Lightness percentage, 0-100
    pub l: u8,
    pub a: f64,
}

impl Hsl {
    /// Creates an opaque HSL color. Hue wraps at 360, percentages clamp to 100.
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self::with_alpha(h, s, l, 1.0)
    }

    pub fn with_alpha(h: u16, s: u8, l: u8, a: f64) -> Self {
        Self {
            h: h % 360,
            s: s.min(100),
            l: l.min(100),
            a: normalize_alpha(a),
        }
    }

    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }

    pub fn to_hsv(self) -> Hsv {
        hsl_to_hsv(self)
    }

    pub fn to_hex(self) -> String {
        hsl_to_hex(self)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if clamp_alpha(self.a) >= 1.0 {
            write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
        } else {
            write!(
                f,
                "hsla({}, {}%, {}%, {})",
                self.h,
                self.s,
                self.l,
                normalize_alpha(self.a)
            )
        }
    }
}

/// Hue, saturation and value (brightness).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue in degrees, 0-359
    pub h: u16,
    /// Saturation percentage, 0-100
    pub s: u8,
    /// Value percentage, 0-100
    pub v: u8,
    pub a: f64,
}

impl Hsv {
    pub fn new(h: u16, s: u8, v: u8) -> Self {
        Self::with_alpha(h, s, v, 1.0)
    }

    pub fn with_alpha(h: u16, s: u8, v: u8, a: f64) -> Self {
        Self {
            h: h % 360,
            s: s.min(100),
            v: v.min(100),
            a: normalize_alpha(a),
        }
    }

    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self)
    }

    pub fn to_hsl(self) -> Hsl {
        hsv_to_hsl(self)
    }

    pub fn to_hex(self) -> String {
        hsv_to_hex(self)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({}, {}%, {}%)", self.h, self.s, self.v)
    }
}

/// Process color as cyan, magenta, yellow and key (black) ink percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl Cmyk {
    /// Creates a CMYK color with each ink clamped to 100.
    pub fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self {
            c: c.min(100),
            m: m.min(100),
            y: y.min(100),
            k: k.min(100),
        }
    }

    pub fn to_rgb(self) -> Rgb {
        cmyk_to_rgb(self)
    }

    pub fn to_hex(self) -> String {
        cmyk_to_hex(self)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%)",
            self.c, self.m, self.y, self.k
        )
    }
}
