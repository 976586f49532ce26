//! Four-channel color storage
//!
//! A [`Color`] is a plain `[f32; 4]`. What the channels mean depends on the
//! space the caller has in mind: the view methods ([`Color::rgb`],
//! [`Color::lab`], ...) read the same slots under different names and never
//! convert. Conversions happen on the typed structs and come back through
//! `From<T> for Color`.
//!
//! Slot 3 is alpha for every 3-channel space. Three-channel conversions do
//! not carry it, so re-attach it with [`Color::with_alpha`] when round
//! tripping. CMYK is the exception and stores K in slot 3.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, Mul, MulAssign, Sub};
use std::str::FromStr;

use super::cmyk::{Cmy, Cmyk};
use super::hsv::{Hsl, Hsv};
use super::lab::{Lab, Lch};
use super::rgb::Rgb;
use super::xyz::Xyz;
use crate::error::{ColorError, ParseColorError};

/// Absolute per-channel tolerance used by `==`.
pub const EQUALITY_TOLERANCE: f32 = 1e-6;

/// Number of channels in a [`Color`].
pub const CHANNEL_COUNT: usize = 4;

/// A color value with four float channels.
///
/// Equality compares all four channels within [`EQUALITY_TOLERANCE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Color {
    data: [f32; CHANNEL_COUNT],
}

impl Color {
    /// White with alpha 0.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    /// Black with alpha 0.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    /// Three channels with alpha 0.
    pub const fn new(c0: f32, c1: f32, c2: f32) -> Self {
        Self {
            data: [c0, c1, c2, 0.0],
        }
    }

    /// All four channels.
    pub const fn from_channels(data: [f32; CHANNEL_COUNT]) -> Self {
        Self { data }
    }

    /// Three channels plus an explicit alpha.
    pub const fn with_alpha(c0: f32, c1: f32, c2: f32, alpha: f32) -> Self {
        Self {
            data: [c0, c1, c2, alpha],
        }
    }

    /// Every channel, alpha included, set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self {
            data: [value; CHANNEL_COUNT],
        }
    }

    /// 8-bit RGB, alpha 0.
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Rgb::from_u8(r, g, b).into()
    }

    /// 8-bit RGB from a byte array, alpha 0.
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Rgb::from_bytes(bytes).into()
    }

    /// Raw channels.
    pub fn channels(&self) -> [f32; CHANNEL_COUNT] {
        self.data
    }

    /// Checked channel read.
    pub fn get(&self, index: usize) -> Result<f32, ColorError> {
        self.data
            .get(index)
            .copied()
            .ok_or(ColorError::IndexOutOfRange { index })
    }

    /// Checked channel write.
    pub fn set(&mut self, index: usize, value: f32) -> Result<(), ColorError> {
        let slot = self
            .data
            .get_mut(index)
            .ok_or(ColorError::IndexOutOfRange { index })?;
        *slot = value;
        Ok(())
    }

    /// Slot 3.
    pub fn alpha(&self) -> f32 {
        self.data[3]
    }

    /// The same channels with slot 3 replaced.
    pub fn alpha_set(mut self, alpha: f32) -> Self {
        self.data[3] = alpha;
        self
    }

    /// Clamp the RGB channels into `0.0..=1.0`; alpha is kept.
    pub fn normalize_rgb(self) -> Self {
        Color::from(self.rgb().normalize()).alpha_set(self.alpha())
    }

    /// Absolute value of every channel.
    pub fn absolute(self) -> Self {
        Self {
            data: self.data.map(f32::abs),
        }
    }

    /// True if any RGB channel lies outside `0.0..=1.0`.
    pub fn is_out_of_rgb_gamut(&self) -> bool {
        self.rgb().is_out_of_gamut()
    }

    /// `#rrggbb` of the RGB view.
    pub fn to_hex(&self) -> String {
        self.rgb().to_hex()
    }

    /// Slots 0..2 as RGB.
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.data[0], self.data[1], self.data[2])
    }

    /// Slots 0..2 as HSV.
    pub fn hsv(&self) -> Hsv {
        Hsv::new(self.data[0], self.data[1], self.data[2])
    }

    /// Slots 0..2 as HSL.
    pub fn hsl(&self) -> Hsl {
        Hsl::new(self.data[0], self.data[1], self.data[2])
    }

    /// Slots 0..2 as CMY.
    pub fn cmy(&self) -> Cmy {
        Cmy::new(self.data[0], self.data[1], self.data[2])
    }

    /// All four slots as CMYK.
    pub fn cmyk(&self) -> Cmyk {
        Cmyk::new(self.data[0], self.data[1], self.data[2], self.data[3])
    }

    /// Slots 0..2 as XYZ.
    pub fn xyz(&self) -> Xyz {
        Xyz::new(self.data[0], self.data[1], self.data[2])
    }

    /// Slots 0..2 as Lab.
    pub fn lab(&self) -> Lab {
        Lab::new(self.data[0], self.data[1], self.data[2])
    }

    /// Slots 0..2 as LCh.
    pub fn lch(&self) -> Lch {
        Lch::new(self.data[0], self.data[1], self.data[2])
    }

    /// Black or white, whichever reads better on top of this RGB color.
    ///
    /// Decided on D50 Lab lightness: above 50 gets black text.
    pub fn contrasting(&self) -> Color {
        if self.rgb().to_lab_d50().l > 50.0 {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= EQUALITY_TOLERANCE)
    }
}

impl Index<usize> for Color {
    type Output = f32;

    /// Unchecked-by-type access; panics like a slice outside `0..4`.
    /// Use [`Color::get`] for a `Result`.
    fn index(&self, index: usize) -> &f32 {
        match self.data.get(index) {
            Some(value) => value,
            None => panic!("{}", ColorError::IndexOutOfRange { index }),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.data;
        write!(f, "({a}, {b}, {c}, {d})")
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Hex RGB, alpha 1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rgb: Rgb = s.parse()?;
        Ok(Color::from(rgb).alpha_set(1.0))
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color {
            data: std::array::from_fn(|i| self.data[i] + rhs.data[i]),
        }
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        Color {
            data: std::array::from_fn(|i| self.data[i] - rhs.data[i]),
        }
    }
}

impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color {
            data: std::array::from_fn(|i| self.data[i] * rhs.data[i]),
        }
    }
}

impl MulAssign for Color {
    fn mul_assign(&mut self, rhs: Color) {
        *self = *self * rhs;
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, rhs: f32) -> Color {
        Color {
            data: self.data.map(|c| c * rhs),
        }
    }
}

impl Div<f32> for Color {
    type Output = Color;

    fn div(self, rhs: f32) -> Color {
        Color {
            data: self.data.map(|c| c / rhs),
        }
    }
}

macro_rules! three_channel_into_color {
    ($($ty:ty => $a:ident, $b:ident, $c:ident);* $(;)?) => {
        $(
            impl From<$ty> for Color {
                fn from(v: $ty) -> Self {
                    Color::new(v.$a, v.$b, v.$c)
                }
            }
        )*
    };
}

three_channel_into_color! {
    Rgb => r, g, b;
    Hsv => hue, saturation, value;
    Hsl => hue, saturation, lightness;
    Cmy => c, m, y;
    Xyz => x, y, z;
    Lab => l, a, b;
    Lch => l, c, h;
}

impl From<Cmyk> for Color {
    fn from(v: Cmyk) -> Self {
        Color::from_channels([v.c, v.m, v.y, v.k])
    }
}
