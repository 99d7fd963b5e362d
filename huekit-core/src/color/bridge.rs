//! Direct space-to-space entry points composed from the hex codec and the
//! RGB converters. Alpha rides along unchanged wherever both ends carry it.

use super::{
    cmyk_to_rgb, hex_to_rgb, hsl_to_rgb, hsv_to_rgb, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl,
    rgb_to_hsv, Cmyk, Hsl, Hsv,
};

pub fn hsv_to_hsl(hsv: Hsv) -> Hsl {
    rgb_to_hsl(hsv_to_rgb(hsv))
}

pub fn hsl_to_hsv(hsl: Hsl) -> Hsv {
    rgb_to_hsv(hsl_to_rgb(hsl))
}

/// Malformed hex decodes as black, see [`hex_to_rgb`].
pub fn hex_to_hsl(hex: &str) -> Hsl {
    rgb_to_hsl(hex_to_rgb(hex))
}

pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

pub fn hex_to_hsv(hex: &str) -> Hsv {
    rgb_to_hsv(hex_to_rgb(hex))
}

pub fn hsv_to_hex(hsv: Hsv) -> String {
    rgb_to_hex(hsv_to_rgb(hsv))
}

pub fn hex_to_cmyk(hex: &str) -> Cmyk {
    rgb_to_cmyk(hex_to_rgb(hex))
}

pub fn cmyk_to_hex(cmyk: Cmyk) -> String {
    rgb_to_hex(cmyk_to_rgb(cmyk))
}
