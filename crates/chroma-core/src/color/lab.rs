//! CIE L*a*b* and its polar form LCh
//!
//! # Lab
//!
//! The XYZ to Lab transform uses the exact CIE constants
//! `epsilon = 216 / 24389` and `kappa = 24389 / 27`. Below epsilon the cube
//! root is replaced by a straight line so the curve stays smooth at black.
//!
//! The reference white is always passed explicitly. The D50 helpers use the
//! process-wide [`ColorContext`] matrices and Bradford adaptation from the
//! sRGB (D65) white.

use super::context::ColorContext;
use super::matrix::Matrix3;
use super::reference::{reference_white, Illuminant, Observer};
use super::rgb::Rgb;
use super::xyz::Xyz;

/// CIE epsilon: the breakpoint between the linear and cube-root segments.
pub const EPSILON: f64 = 216.0 / 24389.0;

/// CIE kappa: slope of the linear segment.
pub const KAPPA: f64 = 24389.0 / 27.0;

/// CIE L*a*b* color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness, 0 (black) to 100 (reference white)
    pub l: f32,
    /// Green (-) to red (+), unbounded
    pub a: f32,
    /// Blue (-) to yellow (+), unbounded
    pub b: f32,
}

/// CIE LCh(ab): Lab in polar coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lch {
    /// Lightness, same as Lab L
    pub l: f32,
    /// Chroma, distance from the neutral axis (>= 0)
    pub c: f32,
    /// Hue angle in degrees, `[0, 360)`
    pub h: f32,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Inverse of [`Xyz::to_lab`] for the same reference white.
    pub fn to_xyz(self, white: Xyz) -> Xyz {
        let l = f64::from(self.l);
        let fy = (l + 16.0) / 116.0;
        let fx = f64::from(self.a) / 500.0 + fy;
        let fz = fy - f64::from(self.b) / 200.0;

        let x = if fx.powi(3) > EPSILON {
            fx.powi(3)
        } else {
            (116.0 * fx - 16.0) / KAPPA
        };
        let y = if l > KAPPA * EPSILON {
            fy.powi(3)
        } else {
            l / KAPPA
        };
        let z = if fz.powi(3) > EPSILON {
            fz.powi(3)
        } else {
            (116.0 * fz - 16.0) / KAPPA
        };

        let w = white.to_array();
        Xyz::from_array([x * w[0], y * w[1], z * w[2]])
    }

    /// Lab to RGB: XYZ, undo the adaptation, then the inverse working space.
    pub fn to_rgb(
        self,
        white: Xyz,
        inverse_working_space: &Matrix3,
        adaptation_inverse: &Matrix3,
    ) -> Rgb {
        self.to_xyz(white)
            .adapt(adaptation_inverse)
            .to_rgb(inverse_working_space)
    }

    /// Lab relative to D50 (2 degree) back to sRGB.
    pub fn to_rgb_d50(self) -> Rgb {
        let ctx = ColorContext::global();
        self.to_rgb(
            reference_white(Illuminant::D50, Observer::Two),
            ctx.srgb_inverse(),
            ctx.d50_to_d65(),
        )
    }
}

impl Lch {
    /// Create a new LCh color.
    #[inline]
    pub fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    /// LCh to RGB through Lab.
    pub fn to_rgb(
        self,
        white: Xyz,
        inverse_working_space: &Matrix3,
        adaptation_inverse: &Matrix3,
    ) -> Rgb {
        Lab::from(self).to_rgb(white, inverse_working_space, adaptation_inverse)
    }

    /// LCh relative to D50 (2 degree) back to sRGB.
    pub fn to_rgb_d50(self) -> Rgb {
        Lab::from(self).to_rgb_d50()
    }
}

impl Xyz {
    /// XYZ to Lab relative to `white`.
    pub fn to_lab(self, white: Xyz) -> Lab {
        let f = |t: f64| {
            if t > EPSILON {
                t.cbrt()
            } else {
                (KAPPA * t + 16.0) / 116.0
            }
        };
        let v = self.to_array();
        let w = white.to_array();
        let fx = f(v[0] / w[0]);
        let fy = f(v[1] / w[1]);
        let fz = f(v[2] / w[2]);

        Lab::new(
            (116.0 * fy - 16.0) as f32,
            (500.0 * (fx - fy)) as f32,
            (200.0 * (fy - fz)) as f32,
        )
    }
}

impl Rgb {
    /// RGB to Lab: working space to XYZ, adapt to `white`, then Lab.
    ///
    /// `adaptation` must take the working space's own white to `white`; pass
    /// [`Matrix3::identity`] when they are the same.
    pub fn to_lab(self, white: Xyz, working_space: &Matrix3, adaptation: &Matrix3) -> Lab {
        self.to_xyz(working_space).adapt(adaptation).to_lab(white)
    }

    /// RGB to LCh through Lab.
    pub fn to_lch(self, white: Xyz, working_space: &Matrix3, adaptation: &Matrix3) -> Lch {
        Lch::from(self.to_lab(white, working_space, adaptation))
    }

    /// sRGB to Lab relative to D50 (2 degree), Bradford-adapted from D65.
    pub fn to_lab_d50(self) -> Lab {
        let ctx = ColorContext::global();
        self.to_lab(
            reference_white(Illuminant::D50, Observer::Two),
            ctx.srgb(),
            ctx.d65_to_d50(),
        )
    }

    /// sRGB to LCh relative to D50 (2 degree).
    pub fn to_lch_d50(self) -> Lch {
        Lch::from(self.to_lab_d50())
    }
}

impl From<Lab> for Lch {
    /// Polar form. The neutral axis (`a == b == 0`) gets hue 0.
    fn from(lab: Lab) -> Self {
        let (a, b) = (f64::from(lab.a), f64::from(lab.b));
        let h = if lab.a == 0.0 && lab.b == 0.0 {
            0.0
        } else {
            b.atan2(a).to_degrees()
        };
        let h = if h < 0.0 { h + 360.0 } else { h };
        let mut h = h as f32;
        // a hue just below 360 can round up when narrowed
        if h >= 360.0 {
            h -= 360.0;
        }
        Lch::new(lab.l, a.hypot(b) as f32, h)
    }
}

impl From<Lch> for Lab {
    fn from(lch: Lch) -> Self {
        let c = f64::from(lch.c);
        let h = f64::from(lch.h).to_radians();
        Lab::new(lch.l, (c * h.cos()) as f32, (c * h.sin()) as f32)
    }
}
