//! Named color table and nearest-name lookup.
//!
//! The table holds the CSS named colors in alphabetical order, including both
//! `gray` and `grey` spellings. Order matters: the nearest-name search keeps the
//! first entry at the minimum distance, so `aqua` wins over `cyan` and `gray`
//! over `grey`.

use crate::color::{hex_to_rgb, try_hex_to_rgb, Rgb};
use lazy_static::lazy_static;
use std::collections::HashMap;
use tracing::{debug, trace};

/// A CSS color name and its 6-digit hex value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NamedColor {
    pub name: &'static str,
    pub hex: &'static str,
}

/// Result of a nearest-name search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NamedColorMatch {
    pub name: &'static str,
    pub hex: &'static str,
    /// Weighted Euclidean distance in RGB space, 0.0 for an exact match
    pub distance: f64,
}

#[rustfmt::skip]
pub static NAMED_COLORS: &[NamedColor] = &[
    NamedColor { name: "aliceblue", hex: "#f0f8ff" },
    NamedColor { name: "antiquewhite", hex: "#faebd7" },
    NamedColor { name: "aqua", hex: "#00ffff" },
    NamedColor { name: "aquamarine", hex: "#7fffd4" },
    NamedColor { name: "azure", hex: "#f0ffff" },
    NamedColor { name: "beige", hex: "#f5f5dc" },
    NamedColor { name: "bisque", hex: "#ffe4c4" },
    NamedColor { name: "black", hex: "#000000" },
    NamedColor { name: "blanchedalmond", hex: "#ffebcd" },
    NamedColor { name: "blue", hex: "#0000ff" },
    NamedColor { name: "blueviolet", hex: "#8a2be2" },
    NamedColor { name: "brown", hex: "#a52a2a" },
    NamedColor { name: "burlywood", hex: "#deb887" },
    NamedColor { name: "cadetblue", hex: "#5f9ea0" },
    NamedColor { name: "chartreuse", hex: "#7fff00" },
    NamedColor { name: "chocolate", hex: "#d2691e" },
    NamedColor { name: "coral", hex: "#ff7f50" },
    NamedColor { name: "cornflowerblue", hex: "#6495ed" },
    NamedColor { name: "cornsilk", hex: "#fff8dc" },
    NamedColor { name: "crimson", hex: "#dc143c" },
    NamedColor { name: "cyan", hex: "#00ffff" },
    NamedColor { name: "darkblue", hex: "#00008b" },
    NamedColor { name: "darkcyan", hex: "#008b8b" },
    NamedColor { name: "darkgoldenrod", hex: "#b8860b" },
    NamedColor { name: "darkgray", hex: "#a9a9a9" },
    NamedColor { name: "darkgreen", hex: "#006400" },
    NamedColor { name: "darkgrey", hex: "#a9a9a9" },
    NamedColor { name: "darkkhaki", hex: "#bdb76b" },
    NamedColor { name: "darkmagenta", hex: "#8b008b" },
    NamedColor { name: "darkolivegreen", hex: "#556b2f" },
    NamedColor { name: "darkorange", hex: "#ff8c00" },
    NamedColor { name: "darkorchid", hex: "#9932cc" },
    NamedColor { name: "darkred", hex: "#8b0000" },
    NamedColor { name: "darksalmon", hex: "#e9967a" },
    NamedColor { name: "darkseagreen", hex: "#8fbc8f" },
    NamedColor { name: "darkslateblue", hex: "#483d8b" },
    NamedColor { name: "darkslategray", hex: "#2f4f4f" },
    NamedColor { name: "darkslategrey", hex: "#2f4f4f" },
    NamedColor { name: "darkturquoise", hex: "#00ced1" },
    NamedColor { name: "darkviolet", hex: "#9400d3" },
    NamedColor { name: "deeppink", hex: "#ff1493" },
    NamedColor { name: "deepskyblue", hex: "#00bfff" },
    NamedColor { name: "dimgray", hex: "#696969" },
    NamedColor { name: "dimgrey", hex: "#696969" },
    NamedColor { name: "dodgerblue", hex: "#1e90ff" },
    NamedColor { name: "firebrick", hex: "#b22222" },
    NamedColor { name: "floralwhite", hex: "#fffaf0" },
    NamedColor { name: "forestgreen", hex: "#228b22" },
    NamedColor { name: "fuchsia", hex: "#ff00ff" },
    NamedColor { name: "gainsboro", hex: "#dcdcdc" },
    NamedColor { name: "ghostwhite", hex: "#f8f8ff" },
    NamedColor { name: "gold", hex: "#ffd700" },
    NamedColor { name: "goldenrod", hex: "#daa520" },
    NamedColor { name: "gray", hex: "#808080" },
    NamedColor { name: "green", hex: "#008000" },
    NamedColor { name: "greenyellow", hex: "#adff2f" },
    NamedColor { name: "grey", hex: "#808080" },
    NamedColor { name: "honeydew", hex: "#f0fff0" },
    NamedColor { name: "hotpink", hex: "#ff69b4" },
    NamedColor { name: "indianred", hex: "#cd5c5c" },
    NamedColor { name: "indigo", hex: "#4b0082" },
    NamedColor { name: "ivory", hex: "#fffff0" },
    NamedColor { name: "khaki", hex: "#f0e68c" },
    NamedColor { name: "lavender", hex: "#e6e6fa" },
    NamedColor { name: "lavenderblush", hex: "#fff0f5" },
    NamedColor { name: "lawngreen", hex: "#7cfc00" },
    NamedColor { name: "lemonchiffon", hex: "#fffacd" },
    NamedColor { name: "lightblue", hex: "#add8e6" },
    NamedColor { name: "lightcoral", hex: "#f08080" },
    NamedColor { name: "lightcyan", hex: "#e0ffff" },
    NamedColor { name: "lightgoldenrodyellow", hex: "#fafad2" },
    NamedColor { name: "lightgray", hex: "#d3d3d3" },
    NamedColor { name: "lightgreen", hex: "#90ee90" },
    NamedColor { name: "lightgrey", hex: "#d3d3d3" },
    NamedColor { name: "lightpink", hex: "#ffb6c1" },
    NamedColor { name: "lightsalmon", hex: "#ffa07a" },
    NamedColor { name: "lightseagreen", hex: "#20b2aa" },
    NamedColor { name: "lightskyblue", hex: "#87cefa" },
    NamedColor { name: "lightslategray", hex: "#778899" },
    NamedColor { name: "lightslategrey", hex: "#778899" },
    NamedColor { name: "lightsteelblue", hex: "#b0c4de" },
    NamedColor { name: "lightyellow", hex: "#ffffe0" },
    NamedColor { name: "lime", hex: "#00ff00" },
    NamedColor { name: "limegreen", hex: "#32cd32" },
    NamedColor { name: "linen", hex: "#faf0e6" },
    NamedColor { name: "magenta", hex: "#ff00ff" },
    NamedColor { name: "maroon", hex: "#800000" },
    NamedColor { name: "mediumaquamarine", hex: "#66cdaa" },
    NamedColor { name: "mediumblue", hex: "#0000cd" },
    NamedColor { name: "mediumorchid", hex: "#ba55d3" },
    NamedColor { name: "mediumpurple", hex: "#9370db" },
    NamedColor { name: "mediumseagreen", hex: "#3cb371" },
    NamedColor { name: "mediumslateblue", hex: "#7b68ee" },
    NamedColor { name: "mediumspringgreen", hex: "#00fa9a" },
    NamedColor { name: "mediumturquoise", hex: "#48d1cc" },
    NamedColor { name: "mediumvioletred", hex: "#c71585" },
    NamedColor { name: "midnightblue", hex: "#191970" },
    NamedColor { name: "mintcream", hex: "#f5fffa" },
    NamedColor { name: "mistyrose", hex: "#ffe4e1" },
    NamedColor { name: "moccasin", hex: "#ffe4b5" },
    NamedColor { name: "navajowhite", hex: "#ffdead" },
    NamedColor { name: "navy", hex: "#000080" },
    NamedColor { name: "oldlace", hex: "#fdf5e6" },
    NamedColor { name: "olive", hex: "#808000" },
    NamedColor { name: "olivedrab", hex: "#6b8e23" },
    NamedColor { name: "orange", hex: "#ffa500" },
    NamedColor { name: "orangered", hex: "#ff4500" },
    NamedColor { name: "orchid", hex: "#da70d6" },
    NamedColor { name: "palegoldenrod", hex: "#eee8aa" },
    NamedColor { name: "palegreen", hex: "#98fb98" },
    NamedColor { name: "paleturquoise", hex: "#afeeee" },
    NamedColor { name: "palevioletred", hex: "#db7093" },
    NamedColor { name: "papayawhip", hex: "#ffefd5" },
    NamedColor { name: "peachpuff", hex: "#ffdab9" },
    NamedColor { name: "peru", hex: "#cd853f" },
    NamedColor { name: "pink", hex: "#ffc0cb" },
    NamedColor { name: "plum", hex: "#dda0dd" },
    NamedColor { name: "powderblue", hex: "#b0e0e6" },
    NamedColor { name: "purple", hex: "#800080" },
    NamedColor { name: "rebeccapurple", hex: "#663399" },
    NamedColor { name: "red", hex: "#ff0000" },
    NamedColor { name: "rosybrown", hex: "#bc8f8f" },
    NamedColor { name: "royalblue", hex: "#4169e1" },
    NamedColor { name: "saddlebrown", hex: "#8b4513" },
    NamedColor { name: "salmon", hex: "#fa8072" },
    NamedColor { name: "sandybrown", hex: "#f4a460" },
    NamedColor { name: "seagreen", hex: "#2e8b57" },
    NamedColor { name: "seashell", hex: "#fff5ee" },
    NamedColor { name: "sienna", hex: "#a0522d" },
    NamedColor { name: "silver", hex: "#c0c0c0" },
    NamedColor { name: "skyblue", hex: "#87ceeb" },
    NamedColor { name: "slateblue", hex: "#6a5acd" },
    NamedColor { name: "slategray", hex: "#708090" },
    NamedColor { name: "slategrey", hex: "#708090" },
    NamedColor { name: "snow", hex: "#fffafa" },
    NamedColor { name: "springgreen", hex: "#00ff7f" },
    NamedColor { name: "steelblue", hex: "#4682b4" },
    NamedColor { name: "tan", hex: "#d2b48c" },
    NamedColor { name: "teal", hex: "#008080" },
    NamedColor { name: "thistle", hex: "#d8bfd8" },
    NamedColor { name: "tomato", hex: "#ff6347" },
    NamedColor { name: "turquoise", hex: "#40e0d0" },
    NamedColor { name: "violet", hex: "#ee82ee" },
    NamedColor { name: "wheat", hex: "#f5deb3" },
    NamedColor { name: "white", hex: "#ffffff" },
    NamedColor { name: "whitesmoke", hex: "#f5f5f5" },
    NamedColor { name: "yellow", hex: "#ffff00" },
    NamedColor { name: "yellowgreen", hex: "#9acd32" },
];

lazy_static! {
    static ref NAME_INDEX: HashMap<&'static str, &'static str> = NAMED_COLORS
        .iter()
        .map(|named| (named.name, named.hex))
        .collect();
}

/// Looks up a color name, ignoring case and surrounding whitespace.
pub fn named_color_hex(name: &str) -> Option<&'static str> {
    NAME_INDEX
        .get(name.trim().to_ascii_lowercase().as_str())
        .copied()
}

// Green weighs most and blue least, roughly following eye sensitivity.
fn weighted_distance(a: Rgb, b: Rgb) -> f64 {
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);
    (3.0 * dr * dr + 4.0 * dg * dg + 2.0 * db * db).sqrt()
}

/// Finds the named color nearest to `hex`. Alpha is ignored.
///
/// Returns `None` only when `hex` is not a decodable hex color.
pub fn closest_named_color(hex: &str) -> Option<NamedColorMatch> {
    let target = match try_hex_to_rgb(hex) {
        Ok(rgb) => rgb,
        Err(err) => {
            debug!(%err, "no named color match");
            return None;
        }
    };

    let mut best: Option<NamedColorMatch> = None;
    for named in NAMED_COLORS {
        let distance = weighted_distance(target, hex_to_rgb(named.hex));
        if best.map_or(true, |current| distance < current.distance) {
            best = Some(NamedColorMatch {
                name: named.name,
                hex: named.hex,
                distance,
            });
        }
    }

    if let Some(found) = &best {
        trace!(
            input = hex,
            name = found.name,
            distance = found.distance,
            "closest named color"
        );
    }
    best
}
