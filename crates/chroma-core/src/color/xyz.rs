//! CIE XYZ tristimulus values
//!
//! The sRGB working-space matrix produces XYZ scaled so the reference
//! white has Y = 100.

use super::linear_rgb::LinearRgb;
use super::matrix::Matrix3;
use super::rgb::Rgb;

/// CIE XYZ tristimulus values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    /// X tristimulus
    pub x: f32,
    /// Y tristimulus (luminance)
    pub y: f32,
    /// Z tristimulus
    pub z: f32,
}

impl Xyz {
    /// Create new XYZ values.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub(crate) fn to_array(self) -> [f64; 3] {
        [f64::from(self.x), f64::from(self.y), f64::from(self.z)]
    }

    #[inline]
    pub(crate) fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0] as f32, v[1] as f32, v[2] as f32)
    }

    /// Apply a chromatic adaptation matrix.
    pub fn adapt(self, adaptation: &Matrix3) -> Xyz {
        Xyz::from_array(adaptation.transform(self.to_array()))
    }

    /// Back to gamma-encoded RGB through an inverted working-space matrix.
    ///
    /// The result is not clamped; check [`Rgb::is_out_of_gamut`].
    pub fn to_rgb(self, inverse_working_space: &Matrix3) -> Rgb {
        let linear = LinearRgb::from_array(inverse_working_space.transform(self.to_array()));
        Rgb::from(linear)
    }
}

impl Rgb {
    /// Linearize, then apply a working-space matrix.
    pub fn to_xyz(self, working_space: &Matrix3) -> Xyz {
        Xyz::from_array(working_space.transform(self.linear().to_array()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::context::ColorContext;

    #[test]
    fn test_white_maps_to_d65() {
        let ctx = ColorContext::global();
        let xyz = Rgb::new(1.0, 1.0, 1.0).to_xyz(ctx.srgb());
        assert!((xyz.x - 95.047).abs() < 1e-3, "{xyz:?}");
        assert!((xyz.y - 100.0).abs() < 1e-3, "{xyz:?}");
        assert!((xyz.z - 108.883).abs() < 1e-3, "{xyz:?}");
    }

    #[test]
    fn test_black_maps_to_origin() {
        let ctx = ColorContext::global();
        assert_eq!(Rgb::new(0.0, 0.0, 0.0).to_xyz(ctx.srgb()), Xyz::default());
    }

    #[test]
    fn test_round_trip() {
        let ctx = ColorContext::global();
        let samples = [
            Rgb::new(0.2, 0.4, 0.6),
            Rgb::new(1.0, 0.0, 0.0),
            Rgb::new(0.01, 0.02, 0.03),
            Rgb::new(0.5, 0.5, 0.5),
        ];
        for rgb in samples {
            let back = rgb.to_xyz(ctx.srgb()).to_rgb(ctx.srgb_inverse());
            assert!((back.r - rgb.r).abs() < 1e-5, "{rgb:?} -> {back:?}");
            assert!((back.g - rgb.g).abs() < 1e-5, "{rgb:?} -> {back:?}");
            assert!((back.b - rgb.b).abs() < 1e-5, "{rgb:?} -> {back:?}");
        }
    }

    #[test]
    fn test_matches_palette_crate() {
        use palette::{IntoColor, Srgb, Xyz as PaletteXyz};

        let ctx = ColorContext::global();
        for (r, g, b) in [(1.0, 0.0, 0.0), (0.0, 1.0, 0.0), (0.3, 0.6, 0.9)] {
            let ours = Rgb::new(r, g, b).to_xyz(ctx.srgb());
            let theirs: PaletteXyz = Srgb::new(r, g, b).into_linear().into_color();
            // palette scales white to Y = 1
            assert!((ours.x / 100.0 - theirs.x).abs() < 1e-4, "x {ours:?} {theirs:?}");
            assert!((ours.y / 100.0 - theirs.y).abs() < 1e-4, "y {ours:?} {theirs:?}");
            assert!((ours.z / 100.0 - theirs.z).abs() < 1e-4, "z {ours:?} {theirs:?}");
        }
    }
}
