//! Color values and conversions between color spaces
//!
//! [`Color`] is the untyped four-channel value handed between components.
//! The typed structs ([`Rgb`], [`Hsv`], [`Lab`], ...) carry one space each
//! and implement the conversions:
//!
//! ```
//! use chroma_core::{Color, Hsv, Rgb};
//!
//! let color = Color::from_u8(255, 128, 0);
//! let hsv = Hsv::from(color.rgb());
//! let back = Color::from(Rgb::from(hsv));
//! assert_eq!(back, color);
//! ```
//!
//! # Spaces
//!
//! - [`Rgb`] / [`LinearRgb`]: gamma-encoded sRGB and linear light
//! - [`Hsv`], [`Hsl`]: hexcone models, hue in `[0, 1)`
//! - [`Cmy`], [`Cmyk`]: subtractive
//! - [`Xyz`]: CIE tristimulus, white at Y = 100
//! - [`Lab`], [`Lch`]: CIE L*a*b* and its polar form, hue in degrees
//!
//! Lab needs a reference white ([`reference_white`]) and, when the white
//! differs from sRGB's D65, a Bradford adaptation matrix. The shared
//! matrices live in [`ColorContext`].

mod cmyk;
mod context;
mod distance;
mod hsv;
mod lab;
mod linear_rgb;
mod matrix;
mod reference;
mod rgb;
mod transfer;
mod value;
mod xyz;

pub use cmyk::{Cmy, Cmyk};
pub use context::ColorContext;
pub use distance::{distance, distance_lch, mix, CHROMA_WEIGHT, HUE_WEIGHT};
pub use hsv::{Hsl, Hsv};
pub use lab::{Lab, Lch, EPSILON, KAPPA};
pub use linear_rgb::LinearRgb;
pub use matrix::{Matrix3, Primaries, BRADFORD, SRGB_PRIMARIES};
pub use reference::{reference_white, Illuminant, Observer};
pub use rgb::Rgb;
pub use transfer::{linear_to_srgb, srgb_to_linear};
pub use value::{Color, CHANNEL_COUNT, EQUALITY_TOLERANCE};
pub use xyz::Xyz;
