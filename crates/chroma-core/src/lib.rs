//! chroma-core: color space conversions and octree palette quantization
//!
//! The crate has two parts:
//!
//! - [`color`]: a four-channel [`Color`] value, typed structs for each
//!   supported space and the conversions between them, reference whites,
//!   Bradford chromatic adaptation and color distances.
//! - [`quantize`]: an [`Octree`] that clusters a stream of colors and
//!   reduces them to a small palette.
//!
//! # Quick Start
//!
//! ```
//! use chroma_core::{Color, Hsl, Rgb};
//!
//! let orange: Color = "#ff8000".parse().unwrap();
//! let hsl = Hsl::from(orange.rgb());
//! assert!(hsl.hue > 0.08 && hsl.hue < 0.09);
//!
//! let lab = orange.rgb().to_lab_d50();
//! assert!(lab.l > 60.0);
//! assert_eq!(Rgb::from(hsl).to_hex(), "#ff8000");
//! ```
//!
//! Extracting a palette:
//!
//! ```
//! use chroma_core::{Color, PaletteExtractor};
//!
//! let pixels = vec![Color::from_u8(250, 10, 10); 100]
//!     .into_iter()
//!     .chain(vec![Color::from_u8(10, 10, 250); 50]);
//! let palette = PaletteExtractor::new().max_colors(4).extract(pixels);
//! assert_eq!(palette.len(), 2);
//! ```
//!
//! # Numeric conventions
//!
//! Channels are `f32`. Matrix products, gamma curves and the Lab transform
//! run in `f64` internally. XYZ is scaled so the reference white has
//! Y = 100. Hue is a fraction of a turn in HSV/HSL and degrees in LCh.
//!
//! The sRGB working-space and D65/D50 adaptation matrices are computed once
//! per process by [`ColorContext`]. Everything else is a pure function.

pub mod color;
pub mod error;
pub mod quantize;


pub use color::{
    distance, distance_lch, linear_to_srgb, mix, reference_white, srgb_to_linear, Cmy, Cmyk,
    Color, ColorContext, Hsl, Hsv, Illuminant, Lab, Lch, LinearRgb, Matrix3, Observer, Primaries,
    Rgb, Xyz,
};
pub use error::{ColorError, ParseColorError, ParseReferenceError};
pub use quantize::{Octree, PaletteExtractor, Reduction, ReductionPass};
