//! Color differences and mixing

use super::lab::{Lab, Lch};
use super::linear_rgb::LinearRgb;
use super::rgb::Rgb;
use super::value::Color;

/// Chroma weight of the LCh distance.
pub const CHROMA_WEIGHT: f64 = 0.045;

/// Hue weight of the LCh distance.
pub const HUE_WEIGHT: f64 = 0.015;

/// Euclidean distance between two sRGB colors, measured in linear light.
pub fn distance(a: Rgb, b: Rgb) -> f32 {
    let a = a.linear().to_array();
    let b = b.linear().to_array();
    let sum: f64 = a.iter().zip(b.iter()).map(|(x, y)| (y - x).powi(2)).sum();
    sum.sqrt() as f32
}

/// Weighted Lab difference in the style of CIE94.
///
/// Lightness is unweighted, the chroma term is divided by
/// `1 + 0.045 * C1` and the hue term by `1 + 0.015 * C1`, where `C1` is the
/// chroma of `a`. The hue term is `da^2 + db^2 - dC`, with `dC` not squared,
/// so the result differs from textbook CIE94 and is not symmetric.
pub fn distance_lch(a: Lab, b: Lab) -> f32 {
    let al = Lch::from(a);
    let bl = Lch::from(b);
    let c1 = f64::from(al.c);
    let dl = f64::from(bl.l - al.l);
    let dc = f64::from(bl.c) - c1;
    let da = f64::from(a.a - b.a);
    let db = f64::from(a.b - b.b);

    let chroma = dc / (1.0 + CHROMA_WEIGHT * c1);
    let hue = (da * da + db * db - dc) / (1.0 + HUE_WEIGHT * c1);
    (dl * dl + chroma * chroma + hue * hue).sqrt() as f32
}

/// Blend two sRGB colors in linear light.
///
/// `ratio` 0 gives `a`, 1 gives `b`. Alpha is interpolated linearly.
pub fn mix(a: Color, b: Color, ratio: f32) -> Color {
    let la = a.rgb().linear();
    let lb = b.rgb().linear();
    let lerp = |x: f32, y: f32| x * (1.0 - ratio) + y * ratio;
    let blended = LinearRgb::new(lerp(la.r, lb.r), lerp(la.g, lb.g), lerp(la.b, lb.b));
    Color::from(blended.non_linear()).alpha_set(lerp(a.alpha(), b.alpha()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_identical_is_zero() {
        let c = Rgb::new(0.3, 0.6, 0.9);
        assert_eq!(distance(c, c), 0.0);
        assert_eq!(distance_lch(Lab::new(50.0, 20.0, -10.0), Lab::new(50.0, 20.0, -10.0)), 0.0);
    }

    #[test]
    fn test_distance_is_linear_light() {
        // black to white spans the full diagonal of the unit cube
        let d = distance(Rgb::new(0.0, 0.0, 0.0), Rgb::new(1.0, 1.0, 1.0));
        assert!((d - 3f32.sqrt()).abs() < 1e-6);

        // mid grey is only ~0.214 in linear light, not 0.5
        let d = distance(Rgb::new(0.0, 0.0, 0.0), Rgb::new(0.5, 0.0, 0.0));
        assert!((d - 0.214_041).abs() < 1e-5, "{d}");
    }

    #[test]
    fn test_distance_lch_lightness_only() {
        let d = distance_lch(Lab::new(40.0, 0.0, 0.0), Lab::new(70.0, 0.0, 0.0));
        assert!((d - 30.0).abs() < 1e-5, "{d}");
    }

    #[test]
    fn test_distance_lch_weights() {
        // a: C1 = 10 on the a axis, b: C2 = 20 on the same hue
        let a = Lab::new(50.0, 10.0, 0.0);
        let b = Lab::new(50.0, 20.0, 0.0);
        let dc = 10.0_f64;
        let chroma = dc / (1.0 + 0.045 * 10.0);
        let hue = (100.0 - dc) / (1.0 + 0.015 * 10.0);
        let expected = (chroma * chroma + hue * hue).sqrt() as f32;
        let d = distance_lch(a, b);
        assert!((d - expected).abs() < 1e-3, "{d} vs {expected}");
    }

    #[test]
    fn test_distance_lch_uses_first_chroma() {
        let a = Lab::new(50.0, 0.0, 0.0);
        let b = Lab::new(50.0, 30.0, 0.0);
        assert_ne!(distance_lch(a, b), distance_lch(b, a));
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Color::with_alpha(1.0, 0.0, 0.0, 1.0);
        let b = Color::with_alpha(0.0, 0.0, 1.0, 0.0);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
    }

    #[test]
    fn test_mix_midpoint_in_linear_light() {
        let mid = mix(Color::BLACK, Color::WHITE, 0.5);
        // 0.5 linear re-encodes to ~0.7354 sRGB
        let rgb = mid.rgb();
        for channel in [rgb.r, rgb.g, rgb.b] {
            assert!((channel - 0.735_357).abs() < 1e-4, "{mid:?}");
        }
    }
}
