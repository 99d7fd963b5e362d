//! RGB <-> HSL, HSV and CMYK transforms.

use super::{normalize_alpha, Cmyk, Hsl, Hsv, Rgb};

fn unit(channel: u8) -> f64 {
    f64::from(channel) / 255.0
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

fn to_percent(value: f64) -> u8 {
    (value * 100.0).round().clamp(0.0, 100.0) as u8
}

fn from_percent(value: u8) -> f64 {
    f64::from(value.min(100)) / 100.0
}

fn to_degrees(value: f64) -> u16 {
    // 359.6 rounds to 360, which is the same angle as 0
    (value.round() as i64).rem_euclid(360) as u16
}

/// Hue in degrees for a chromatic color (`delta > 0`).
fn hue(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    sector * 60.0
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = (unit(rgb.r), unit(rgb.g), unit(rgb.b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let (h, s) = if delta == 0.0 {
        (0.0, 0.0)
    } else {
        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        (hue(r, g, b, max, delta), s)
    };

    Hsl {
        h: to_degrees(h),
        s: to_percent(s),
        l: to_percent(l),
        a: normalize_alpha(rgb.a),
    }
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = f64::from(hsl.h % 360) / 360.0;
    let s = from_percent(hsl.s);
    let l = from_percent(hsl.l);

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
        a: normalize_alpha(hsl.a),
    }
}

pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = (unit(rgb.r), unit(rgb.g), unit(rgb.b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };
    let h = if delta == 0.0 {
        0.0
    } else {
        hue(r, g, b, max, delta)
    };

    Hsv {
        h: to_degrees(h),
        s: to_percent(s),
        v: to_percent(max),
        a: normalize_alpha(rgb.a),
    }
}

pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = f64::from(hsv.h % 360) / 360.0;
    let s = from_percent(hsv.s);
    let v = from_percent(hsv.v);

    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as u8) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
        a: normalize_alpha(hsv.a),
    }
}

pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let (r, g, b) = (unit(rgb.r), unit(rgb.g), unit(rgb.b));
    let k = 1.0 - r.max(g).max(b);

    if k >= 1.0 {
        return Cmyk {
            c: 0,
            m: 0,
            y: 0,
            k: 100,
        };
    }

    Cmyk {
        c: to_percent((1.0 - r - k) / (1.0 - k)),
        m: to_percent((1.0 - g - k) / (1.0 - k)),
        y: to_percent((1.0 - b - k) / (1.0 - k)),
        k: to_percent(k),
    }
}

/// The result is always opaque.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let k = from_percent(cmyk.k);
    let ink = |value: u8| to_channel((1.0 - from_percent(value)) * (1.0 - k));

    Rgb::new(ink(cmyk.c), ink(cmyk.m), ink(cmyk.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hsl_primaries() {
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)), Hsl::new(0, 100, 50));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 255, 0)), Hsl::new(120, 100, 50));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 255)), Hsl::new(240, 100, 50));
    }

    #[test]
    fn test_rgb_to_hsl_achromatic() {
        assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 0)), Hsl::new(0, 0, 0));
        assert_eq!(rgb_to_hsl(Rgb::new(255, 255, 255)), Hsl::new(0, 0, 100));
        assert_eq!(rgb_to_hsl(Rgb::new(128, 128, 128)), Hsl::new(0, 0, 50));
    }

    #[test]
    fn test_rgb_to_hsl_known_values() {
        // rebeccapurple
        assert_eq!(rgb_to_hsl(Rgb::new(102, 51, 153)), Hsl::new(270, 50, 40));
        // magenta side of the wheel uses the +6 branch
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 128)), Hsl::new(330, 100, 50));
        // light colors take the l > 0.5 saturation branch
        assert_eq!(rgb_to_hsl(Rgb::new(255, 128, 128)), Hsl::new(0, 100, 75));
    }

    #[test]
    fn test_hue_rounding_wraps_to_zero() {
        // hue is 359.76 before rounding
        let hsl = rgb_to_hsl(Rgb::new(255, 0, 1));
        assert_eq!(hsl.h, 0);
    }

    #[test]
    fn test_alpha_passes_through_hsl() {
        let hsl = rgb_to_hsl(Rgb::with_alpha(255, 0, 0, 0.25));
        assert_eq!(hsl.a, 0.25);
        assert_eq!(hsl_to_rgb(hsl).a, 0.25);
    }

    #[test]
    fn test_hsl_to_rgb() {
        assert_eq!(hsl_to_rgb(Hsl::new(0, 100, 50)), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(120, 100, 25)), Rgb::new(0, 128, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(0, 0, 100)), Rgb::new(255, 255, 255));
        assert_eq!(hsl_to_rgb(Hsl::new(270, 50, 40)), Rgb::new(102, 51, 153));
    }

    #[test]
    fn test_hsl_to_rgb_tolerates_raw_out_of_range_fields() {
        let raw = Hsl {
            h: 480,
            s: 200,
            l: 50,
            a: 3.0,
        };
        assert_eq!(hsl_to_rgb(raw), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_rgb_to_hsv() {
        assert_eq!(rgb_to_hsv(Rgb::new(255, 0, 0)), Hsv::new(0, 100, 100));
        assert_eq!(rgb_to_hsv(Rgb::new(0, 0, 0)), Hsv::new(0, 0, 0));
        assert_eq!(rgb_to_hsv(Rgb::new(0, 128, 128)), Hsv::new(180, 100, 50));
    }

    #[test]
    fn test_hsv_to_rgb_every_sector() {
        assert_eq!(hsv_to_rgb(Hsv::new(0, 100, 100)), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(60, 100, 100)), Rgb::new(255, 255, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(120, 100, 100)), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(180, 100, 100)), Rgb::new(0, 255, 255));
        assert_eq!(hsv_to_rgb(Hsv::new(240, 100, 100)), Rgb::new(0, 0, 255));
        assert_eq!(hsv_to_rgb(Hsv::new(300, 100, 100)), Rgb::new(255, 0, 255));
    }

    #[test]
    fn test_rgb_to_cmyk_black_short_circuits() {
        assert_eq!(
            rgb_to_cmyk(Rgb::new(0, 0, 0)),
            Cmyk {
                c: 0,
                m: 0,
                y: 0,
                k: 100
            }
        );
    }

    #[test]
    fn test_rgb_to_cmyk() {
        assert_eq!(rgb_to_cmyk(Rgb::new(255, 255, 255)), Cmyk::new(0, 0, 0, 0));
        assert_eq!(rgb_to_cmyk(Rgb::new(255, 0, 0)), Cmyk::new(0, 100, 100, 0));
        assert_eq!(rgb_to_cmyk(Rgb::new(0, 128, 128)), Cmyk::new(100, 0, 0, 50));
    }

    #[test]
    fn test_cmyk_to_rgb() {
        assert_eq!(cmyk_to_rgb(Cmyk::new(0, 0, 0, 100)), Rgb::new(0, 0, 0));
        assert_eq!(cmyk_to_rgb(Cmyk::new(0, 0, 0, 0)), Rgb::new(255, 255, 255));
        assert_eq!(cmyk_to_rgb(Cmyk::new(0, 100, 100, 0)), Rgb::new(255, 0, 0));
        assert_eq!(cmyk_to_rgb(Cmyk::new(100, 0, 0, 50)), Rgb::new(0, 128, 128));
    }
}
