//! sRGB transfer function (IEC 61966-2-1)
//!
//! Exact piecewise formulas. The linear segment near black avoids the
//! infinite slope of the pure power curve at zero.

/// Encoded values at or below this use the linear segment when decoding.
pub const DECODE_BREAKPOINT: f64 = 0.04045;

/// Linear values at or below this use the linear segment when encoding.
pub const ENCODE_BREAKPOINT: f64 = 0.0031308;

/// Convert one gamma-encoded sRGB channel to linear light.
#[inline]
pub fn srgb_to_linear(value: f32) -> f32 {
    let v = f64::from(value);
    let linear = if v > DECODE_BREAKPOINT {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    };
    linear as f32
}

/// Convert one linear-light channel back to gamma-encoded sRGB.
#[inline]
pub fn linear_to_srgb(value: f32) -> f32 {
    let v = f64::from(value);
    let encoded = if v > ENCODE_BREAKPOINT {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    } else {
        v * 12.92
    };
    encoded as f32
}
