//! Gamma-encoded sRGB color type
//!
//! This is the space colors arrive in from widgets, text and image bytes.
//! All other spaces are reached from here.

use std::fmt;
use std::str::FromStr;

use super::linear_rgb::LinearRgb;
use super::transfer::linear_to_srgb;
use crate::error::ParseColorError;

/// A color in gamma-encoded sRGB.
///
/// Channels are nominally in `0.0..=1.0`. Values outside that range are
/// kept as-is so out-of-gamut results of conversions stay observable
/// through [`Rgb::is_out_of_gamut`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red channel (gamma-corrected, 0.0..=1.0)
    pub r: f32,
    /// Green channel (gamma-corrected, 0.0..=1.0)
    pub g: f32,
    /// Blue channel (gamma-corrected, 0.0..=1.0)
    pub b: f32,
}

impl Rgb {
    /// Create a new Rgb color from float values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create an Rgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use chroma_core::Rgb;
    /// let red = Rgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create an Rgb color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Rounds and clamps values to the 0..=255 range.
    ///
    /// # Example
    /// ```
    /// use chroma_core::Rgb;
    /// let color = Rgb::new(1.0, 0.5, 0.0);
    /// let bytes = color.to_bytes();
    /// assert_eq!(bytes[0], 255);
    /// assert_eq!(bytes[2], 0);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Format as `#rrggbb` (lowercase), clamping out-of-gamut channels.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// True if any channel lies outside `0.0..=1.0`.
    pub fn is_out_of_gamut(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .any(|c| !(0.0..=1.0).contains(c))
    }

    /// Clamp every channel into `0.0..=1.0`.
    pub fn normalize(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Decode the sRGB transfer curve.
    #[inline]
    pub fn linear(self) -> LinearRgb {
        LinearRgb::from(self)
    }
}

impl From<LinearRgb> for Rgb {
    /// Re-apply the sRGB transfer curve to linear light values.
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: linear_to_srgb(linear.r),
            g: linear_to_srgb(linear.g),
            b: linear_to_srgb(linear.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma_core::Rgb;
    ///
    /// let white: Rgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.r, 1.0);
    ///
    /// let red: Rgb = "#F00".parse().unwrap();
    /// assert_eq!(red.r, 1.0);
    /// assert_eq!(red.g, 0.0);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_u8(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
