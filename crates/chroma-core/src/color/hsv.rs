//! Cylindrical RGB models: HSV and HSL
//!
//! Hue is stored as a fraction of a full turn in `[0, 1)`, not in degrees.

use super::rgb::Rgb;

/// Hue, saturation, value. All channels in `0.0..=1.0`, hue in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue as a fraction of a turn
    pub hue: f32,
    /// Saturation
    pub saturation: f32,
    /// Value (the largest RGB channel)
    pub value: f32,
}

/// Hue, saturation, lightness. All channels in `0.0..=1.0`, hue in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue as a fraction of a turn
    pub hue: f32,
    /// Saturation
    pub saturation: f32,
    /// Lightness, the midpoint of the largest and smallest RGB channel
    pub lightness: f32,
}

impl Hsv {
    /// Create a new HSV color.
    #[inline]
    pub fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

impl Hsl {
    /// Create a new HSL color.
    #[inline]
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

fn min_max(rgb: Rgb) -> (f32, f32) {
    let min = rgb.r.min(rgb.g).min(rgb.b);
    let max = rgb.r.max(rgb.g).max(rgb.b);
    (min, max)
}

/// Hexcone hue shared by HSV and HSL.
///
/// HSL deliberately reuses this formula so both models report the same hue
/// for the same RGB input. `delta` must be non-zero.
fn hexcone_hue(rgb: Rgb, max: f32, delta: f32) -> f32 {
    let mut hue = if rgb.r == max {
        (rgb.g - rgb.b) / delta
    } else if rgb.g == max {
        2.0 + (rgb.b - rgb.r) / delta
    } else {
        4.0 + (rgb.r - rgb.g) / delta
    };
    hue /= 6.0;
    if hue < 0.0 {
        hue += 1.0;
    }
    if hue >= 1.0 {
        hue -= 1.0;
    }
    hue
}

impl From<Rgb> for Hsv {
    /// Black has saturation 0 and every achromatic color has hue 0.
    fn from(rgb: Rgb) -> Self {
        let (min, max) = min_max(rgb);
        let delta = max - min;
        let saturation = if max != 0.0 { delta / max } else { 0.0 };
        let hue = if saturation == 0.0 {
            0.0
        } else {
            hexcone_hue(rgb, max, delta)
        };
        Self {
            hue,
            saturation,
            value: max,
        }
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        let v = hsv.value;
        if hsv.saturation == 0.0 {
            return Rgb::new(v, v, v);
        }

        let h = (hsv.hue - hsv.hue.floor()) * 6.0;
        let sector = h as i32;
        let f = h - h.floor();
        let x = v * (1.0 - hsv.saturation);
        let y = v * (1.0 - hsv.saturation * f);
        let z = v * (1.0 - hsv.saturation * (1.0 - f));

        match sector {
            0 => Rgb::new(v, z, x),
            1 => Rgb::new(y, v, x),
            2 => Rgb::new(x, v, z),
            3 => Rgb::new(x, y, v),
            4 => Rgb::new(z, x, v),
            _ => Rgb::new(v, x, y),
        }
    }
}

impl From<Rgb> for Hsl {
    /// Saturation and lightness are computed in f64: near white the
    /// saturation divisor `2 - max - min` is small and amplifies f32 error.
    fn from(rgb: Rgb) -> Self {
        let (min, max) = min_max(rgb);
        if max == min {
            return Self::new(0.0, 0.0, (max + min) / 2.0);
        }

        let (lo, hi) = (f64::from(min), f64::from(max));
        let delta = hi - lo;
        let lightness = (hi + lo) / 2.0;
        let saturation = if lightness < 0.5 {
            delta / (hi + lo)
        } else {
            delta / (2.0 - hi - lo)
        };
        Self {
            hue: hexcone_hue(rgb, max, max - min),
            saturation: saturation as f32,
            lightness: lightness as f32,
        }
    }
}

/// One RGB channel of the HSL to RGB mapping; `t` is the hue offset for it.
fn hsl_channel(p: f64, q: f64, t: f64) -> f64 {
    if 6.0 * t < 1.0 {
        p + (q - p) * 6.0 * t
    } else if 2.0 * t < 1.0 {
        q
    } else if 3.0 * t < 2.0 {
        p + (q - p) * ((2.0 / 3.0) - t) * 6.0
    } else {
        p
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        if hsl.saturation == 0.0 {
            let l = hsl.lightness;
            return Rgb::new(l, l, l);
        }

        let l = f64::from(hsl.lightness);
        let s = f64::from(hsl.saturation);
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let hue = f64::from(hsl.hue);
        let mut r = hue + 1.0 / 3.0;
        let mut b = hue - 1.0 / 3.0;
        if r > 1.0 {
            r -= 1.0;
        }
        if b < 0.0 {
            b += 1.0;
        }

        Rgb::new(
            hsl_channel(p, q, r) as f32,
            hsl_channel(p, q, hue) as f32,
            hsl_channel(p, q, b) as f32,
        )
    }
}

impl From<Hsl> for Hsv {
    /// Direct conversion without a detour through RGB.
    ///
    /// Black (`l + s == 0`) maps to value 0 with saturation 1.
    fn from(hsl: Hsl) -> Self {
        let l = hsl.lightness * 2.0;
        let s = hsl.saturation * if l <= 1.0 { l } else { 2.0 - l };
        if l + s == 0.0 {
            return Hsv::new(hsl.hue, 1.0, 0.0);
        }
        Hsv::new(hsl.hue, (2.0 * s) / (l + s), (l + s) / 2.0)
    }
}

impl From<Hsv> for Hsl {
    /// Direct conversion without a detour through RGB. Black and white
    /// (a zero divisor) get zero saturation.
    fn from(hsv: Hsv) -> Self {
        let l = (2.0 - hsv.saturation) * hsv.value;
        let divisor = if l <= 1.0 { l } else { 2.0 - l };
        let s = if divisor == 0.0 {
            0.0
        } else {
            (hsv.saturation * hsv.value) / divisor
        };
        Hsl::new(hsv.hue, s, l / 2.0)
    }
}
