//! Color harmony palettes.
//!
//! Schemes are derived in HSL space: hue rotations for the wheel-based
//! schemes and lightness stops for shades and tints. The seed color is the
//! input normalized through the hex codec, so every palette entry is a
//! lowercase hex string. Malformed input is treated as black, like
//! [`hex_to_rgb`].

use crate::color::{hex_to_rgb, hsl_to_hex, rgb_to_hex, rgb_to_hsl, Hsl};
use crate::error::{ColorError, Result};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Palette sizes and angles used by [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HarmonyOptions {
    /// Number of analogous colors, seed included
    pub analogous_count: usize,
    /// Hue step between neighbouring analogous colors, in degrees
    pub analogous_angle: i32,
    /// Number of shades
    pub shade_count: usize,
    /// Number of tints
    pub tint_count: usize,
}

impl Default for HarmonyOptions {
    fn default() -> Self {
        Self {
            analogous_count: 3,
            analogous_angle: 30,
            shade_count: 5,
            tint_count: 5,
        }
    }
}

/// Harmony scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Harmony {
    /// Seed and the opposite hue
    Complementary,
    /// Seed and the two hues either side of its complement
    SplitComplementary,
    /// Neighbouring hues
    Analogous,
    /// Three hues 120 degrees apart
    Triad,
    /// Four hues 90 degrees apart
    Tetrad,
    /// Lightness from white down to black
    Shades,
    /// Lightness from the pure hue up to white
    Tints,
}

impl Harmony {
    pub const ALL: [Harmony; 7] = [
        Harmony::Complementary,
        Harmony::SplitComplementary,
        Harmony::Analogous,
        Harmony::Triad,
        Harmony::Tetrad,
        Harmony::Shades,
        Harmony::Tints,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Harmony::Complementary => "complementary",
            Harmony::SplitComplementary => "split-complementary",
            Harmony::Analogous => "analogous",
            Harmony::Triad => "triad",
            Harmony::Tetrad => "tetrad",
            Harmony::Shades => "shades",
            Harmony::Tints => "tints",
        }
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Harmony {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Harmony::ALL
            .into_iter()
            .find(|harmony| harmony.name() == wanted)
            .ok_or_else(|| ColorError::UnknownHarmony(s.to_string()))
    }
}

fn seed(hex: &str) -> (String, Hsl) {
    let rgb = hex_to_rgb(hex);
    (rgb_to_hex(rgb), rgb_to_hsl(rgb))
}

fn rotate(hsl: Hsl, degrees: i64) -> String {
    let h = (i64::from(hsl.h) + degrees).rem_euclid(360) as u16;
    hsl_to_hex(Hsl { h, ..hsl })
}

fn with_lightness(hsl: Hsl, lightness: f64) -> String {
    let l = lightness.round().clamp(0.0, 100.0) as u8;
    hsl_to_hex(Hsl { l, ..hsl })
}

fn ensure_count(count: usize, min: usize) -> Result<()> {
    if count < min {
        return Err(ColorError::InvalidCount { count, min });
    }
    Ok(())
}

/// The hue opposite `hex` on the color wheel.
pub fn complementary(hex: &str) -> String {
    let (_, hsl) = seed(hex);
    rotate(hsl, 180)
}

/// Seed followed by the hues 150 and 210 degrees away.
pub fn split_complementary(hex: &str) -> Vec<String> {
    let (seed_hex, hsl) = seed(hex);
    vec![seed_hex, rotate(hsl, 150), rotate(hsl, 210)]
}

/// `count` colors around the seed, `angle` degrees apart.
///
/// The seed comes first, followed by pairs stepping counterclockwise then
/// clockwise (`-angle`, `+angle`, `-2*angle`, `+2*angle`, ...). An even
/// `count` adds one more clockwise step at the end:
///
/// ```
/// use huekit::harmony::analogous;
///
/// let palette = analogous("#ff0000", 4, 30).unwrap();
/// assert_eq!(palette, ["#ff0000", "#ff0080", "#ff8000", "#ffff00"]);
/// ```
pub fn analogous(hex: &str, count: usize, angle: i32) -> Result<Vec<String>> {
    ensure_count(count, 1)?;
    let (seed_hex, hsl) = seed(hex);
    let angle = i64::from(angle);
    let half = (count - 1) / 2;

    let mut colors = Vec::with_capacity(count);
    colors.push(seed_hex);
    for step in 1..=half as i64 {
        colors.push(rotate(hsl, -angle * step));
        colors.push(rotate(hsl, angle * step));
    }
    if count % 2 == 0 {
        colors.push(rotate(hsl, angle * (half as i64 + 1)));
    }

    trace!(count, angle, "analogous palette");
    Ok(colors)
}

pub fn triad(hex: &str) -> Vec<String> {
    let (seed_hex, hsl) = seed(hex);
    vec![seed_hex, rotate(hsl, 120), rotate(hsl, 240)]
}

pub fn tetrad(hex: &str) -> Vec<String> {
    let (seed_hex, hsl) = seed(hex);
    vec![seed_hex, rotate(hsl, 90), rotate(hsl, 180), rotate(hsl, 270)]
}

/// `count` colors with lightness stepping evenly from 100 down to 0.
///
/// Fewer than two shades cannot span the range and yield
/// [`ColorError::InvalidCount`].
pub fn shades(hex: &str, count: usize) -> Result<Vec<String>> {
    ensure_count(count, 2)?;
    let (_, hsl) = seed(hex);
    let step = 100.0 / (count - 1) as f64;
    Ok((0..count)
        .map(|i| with_lightness(hsl, 100.0 - step * i as f64))
        .collect())
}

/// `count` colors with lightness stepping evenly from 50 up to 100.
///
/// Fewer than two tints yield [`ColorError::InvalidCount`].
pub fn tints(hex: &str, count: usize) -> Result<Vec<String>> {
    ensure_count(count, 2)?;
    let (_, hsl) = seed(hex);
    let step = 50.0 / (count - 1) as f64;
    Ok((0..count)
        .map(|i| with_lightness(hsl, 50.0 + step * i as f64))
        .collect())
}

/// Builds the palette for `harmony`. Complementary yields the seed and its
/// complement.
pub fn generate(hex: &str, harmony: Harmony, options: &HarmonyOptions) -> Result<Vec<String>> {
    match harmony {
        Harmony::Complementary => Ok(vec![seed(hex).0, complementary(hex)]),
        Harmony::SplitComplementary => Ok(split_complementary(hex)),
        Harmony::Analogous => analogous(hex, options.analogous_count, options.analogous_angle),
        Harmony::Triad => Ok(triad(hex)),
        Harmony::Tetrad => Ok(tetrad(hex)),
        Harmony::Shades => shades(hex, options.shade_count),
        Harmony::Tints => tints(hex, options.tint_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex_to_hsl;

    #[test]
    fn test_complementary() {
        assert_eq!(complementary("#ff0000"), "#00ffff");
        assert_eq!(complementary("#00ffff"), "#ff0000");
        assert_eq!(complementary("#0000ff"), "#ffff00");
    }

    #[test]
    fn test_complementary_of_gray_is_itself() {
        assert_eq!(complementary("#808080"), "#808080");
    }

    #[test]
    fn test_complementary_keeps_alpha() {
        assert_eq!(complementary("#ff000080"), "#00ffff80");
    }

    #[test]
    fn test_split_complementary() {
        let palette = split_complementary("#ff0000");
        assert_eq!(palette.len(), 3);
        assert_eq!(palette[0], "#ff0000");
        assert_eq!(hex_to_hsl(&palette[1]).h, 150);
        assert_eq!(hex_to_hsl(&palette[2]).h, 210);
    }

    #[test]
    fn test_analogous_odd_count() {
        assert_eq!(
            analogous("#ff0000", 3, 30).unwrap(),
            vec!["#ff0000", "#ff0080", "#ff8000"]
        );
    }

    #[test]
    fn test_analogous_even_count_appends_clockwise_step() {
        let palette = analogous("#ff0000", 4, 30).unwrap();
        assert_eq!(palette, vec!["#ff0000", "#ff0080", "#ff8000", "#ffff00"]);
    }

    #[test]
    fn test_analogous_ordering() {
        let hues: Vec<u16> = analogous("#ff0000", 6, 20)
            .unwrap()
            .iter()
            .map(|hex| hex_to_hsl(hex).h)
            .collect();
        assert_eq!(hues, vec![0, 340, 20, 320, 40, 60]);
    }

    #[test]
    fn test_analogous_single_and_empty() {
        assert_eq!(analogous("#FF0000", 1, 30).unwrap(), vec!["#ff0000"]);
        assert_eq!(
            analogous("#ff0000", 0, 30),
            Err(ColorError::InvalidCount { count: 0, min: 1 })
        );
    }

    #[test]
    fn test_analogous_negative_angle_mirrors() {
        let palette = analogous("#ff0000", 3, -30).unwrap();
        assert_eq!(palette, vec!["#ff0000", "#ff8000", "#ff0080"]);
    }

    #[test]
    fn test_triad() {
        assert_eq!(triad("#ff0000"), vec!["#ff0000", "#00ff00", "#0000ff"]);
    }

    #[test]
    fn test_tetrad() {
        assert_eq!(
            tetrad("#ff0000"),
            vec!["#ff0000", "#80ff00", "#00ffff", "#7f00ff"]
        );
    }

    #[test]
    fn test_seed_is_normalized() {
        assert_eq!(triad("#F00")[0], "#ff0000");
        assert_eq!(tetrad("ff0000")[0], "#ff0000");
    }

    #[test]
    fn test_shades() {
        assert_eq!(
            shades("#ff0000", 5).unwrap(),
            vec!["#ffffff", "#ff8080", "#ff0000", "#800000", "#000000"]
        );
        assert_eq!(shades("#ff0000", 2).unwrap(), vec!["#ffffff", "#000000"]);
    }

    #[test]
    fn test_tints() {
        assert_eq!(
            tints("#ff0000", 3).unwrap(),
            vec!["#ff0000", "#ff8080", "#ffffff"]
        );
    }

    #[test]
    fn test_single_shade_or_tint_is_rejected() {
        assert_eq!(
            shades("#ff0000", 1),
            Err(ColorError::InvalidCount { count: 1, min: 2 })
        );
        assert_eq!(
            tints("#ff0000", 1),
            Err(ColorError::InvalidCount { count: 1, min: 2 })
        );
        assert!(shades("#ff0000", 0).is_err());
        assert!(tints("#ff0000", 0).is_err());
    }

    #[test]
    fn test_generate_dispatch() {
        let options = HarmonyOptions::default();
        assert_eq!(
            generate("#ff0000", Harmony::Complementary, &options).unwrap(),
            vec!["#ff0000", "#00ffff"]
        );
        assert_eq!(
            generate("#ff0000", Harmony::Analogous, &options)
                .unwrap()
                .len(),
            3
        );
        assert_eq!(
            generate("#ff0000", Harmony::Shades, &options)
                .unwrap()
                .len(),
            5
        );

        let single = HarmonyOptions {
            tint_count: 1,
            ..HarmonyOptions::default()
        };
        assert!(generate("#ff0000", Harmony::Tints, &single).is_err());
    }

    #[test]
    fn test_harmony_names_round_trip() {
        for harmony in Harmony::ALL {
            assert_eq!(harmony.to_string().parse::<Harmony>(), Ok(harmony));
        }
        assert_eq!(
            "Split_Complementary".parse::<Harmony>(),
            Ok(Harmony::SplitComplementary)
        );
        assert_eq!(
            "pentad".parse::<Harmony>(),
            Err(ColorError::UnknownHarmony("pentad".to_string()))
        );
    }
}
