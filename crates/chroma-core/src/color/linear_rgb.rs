//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate.
//! Mixing and the RGB distance metric work here, and it is the input to the
//! XYZ working-space matrix.

use super::rgb::Rgb;
use super::transfer::srgb_to_linear;

/// A color in linear RGB color space.
///
/// Values are typically in the range 0.0..=1.0, but may exceed this range
/// for intermediate calculations (for example after an inverse XYZ matrix).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Re-encode with the sRGB transfer curve.
    #[inline]
    pub fn non_linear(self) -> Rgb {
        Rgb::from(self)
    }

    /// Channels widened to f64 for matrix work.
    #[inline]
    pub(crate) fn to_array(self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }

    #[inline]
    pub(crate) fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0] as f32, v[1] as f32, v[2] as f32)
    }
}

impl From<Rgb> for LinearRgb {
    /// Decode the sRGB transfer curve channel by channel.
    fn from(rgb: Rgb) -> Self {
        Self {
            r: srgb_to_linear(rgb.r),
            g: srgb_to_linear(rgb.g),
            b: srgb_to_linear(rgb.b),
        }
    }
}
