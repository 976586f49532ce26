//! Process-wide conversion constants
//!
//! The sRGB working-space matrix, its inverse and the Bradford D65/D50
//! adaptation pair depend only on fixed primaries and whites, so they are
//! computed once and shared read-only by every thread.

use std::sync::OnceLock;

use super::matrix::{Matrix3, Primaries, SRGB_PRIMARIES};
use super::reference::{reference_white, Illuminant, Observer};
use super::xyz::Xyz;
use crate::error::ColorError;

/// Immutable matrices used by the sRGB <-> XYZ <-> Lab conversions.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorContext {
    srgb: Matrix3,
    srgb_inverse: Matrix3,
    d65_to_d50: Matrix3,
    d50_to_d65: Matrix3,
}

static CONTEXT: OnceLock<ColorContext> = OnceLock::new();

impl ColorContext {
    /// Build a context for an arbitrary RGB working space.
    ///
    /// The D65/D50 adaptation pair is always computed between those two
    /// 2 degree whites, independent of `white`.
    pub fn try_new(primaries: Primaries, white: Xyz) -> Result<Self, ColorError> {
        let srgb = Matrix3::working_space(primaries, white)
            .ok_or(ColorError::SingularMatrix("working space"))?;
        let srgb_inverse = srgb
            .inverse()
            .ok_or(ColorError::SingularMatrix("working space"))?;

        let d65 = reference_white(Illuminant::D65, Observer::Two);
        let d50 = reference_white(Illuminant::D50, Observer::Two);
        let d65_to_d50 = Matrix3::chromatic_adaptation(d65, d50)
            .ok_or(ColorError::SingularMatrix("chromatic adaptation"))?;
        let d50_to_d65 = Matrix3::chromatic_adaptation(d50, d65)
            .ok_or(ColorError::SingularMatrix("chromatic adaptation"))?;

        Ok(Self {
            srgb,
            srgb_inverse,
            d65_to_d50,
            d50_to_d65,
        })
    }

    /// Explicit one-time initialization.
    ///
    /// Safe to call repeatedly and from several threads; the first caller
    /// computes the tables and later callers get the same instance.
    pub fn initialize() -> Result<&'static ColorContext, ColorError> {
        if let Some(ctx) = CONTEXT.get() {
            return Ok(ctx);
        }
        let ctx = Self::try_new(
            SRGB_PRIMARIES,
            reference_white(Illuminant::D65, Observer::Two),
        )?;
        tracing::debug!("color context initialized");
        Ok(CONTEXT.get_or_init(|| ctx))
    }

    /// The shared context, initializing it on first use.
    ///
    /// # Panics
    ///
    /// Panics if the built-in sRGB constants produce a singular matrix,
    /// which would be a programming error in the constant tables.
    pub fn global() -> &'static ColorContext {
        match Self::initialize() {
            Ok(ctx) => ctx,
            Err(e) => panic!("built-in sRGB constants are invalid: {e}"),
        }
    }

    /// Linear sRGB to XYZ (D65, Y = 100).
    pub fn srgb(&self) -> &Matrix3 {
        &self.srgb
    }

    /// XYZ (D65, Y = 100) to linear sRGB.
    pub fn srgb_inverse(&self) -> &Matrix3 {
        &self.srgb_inverse
    }

    /// Bradford adaptation from D65 to D50.
    pub fn d65_to_d50(&self) -> &Matrix3 {
        &self.d65_to_d50
    }

    /// Bradford adaptation from D50 to D65.
    pub fn d50_to_d65(&self) -> &Matrix3 {
        &self.d50_to_d65
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_is_idempotent() {
        let a = ColorContext::initialize().unwrap();
        let b = ColorContext::initialize().unwrap();
        assert!(std::ptr::eq(a, b));
        assert!(std::ptr::eq(a, ColorContext::global()));
    }

    #[test]
    fn test_inverse_pairs() {
        let ctx = ColorContext::global();
        let id = *ctx.srgb() * *ctx.srgb_inverse();
        let round = *ctx.d65_to_d50() * *ctx.d50_to_d65();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((id.rows()[i][j] - expected).abs() < 1e-12);
                assert!((round.rows()[i][j] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_degenerate_primaries_fail_fast() {
        let collinear = Primaries {
            red: (0.2, 0.2),
            green: (0.2, 0.2),
            blue: (0.2, 0.2),
        };
        let err = ColorContext::try_new(collinear, reference_white(Illuminant::D65, Observer::Two))
            .unwrap_err();
        assert_eq!(err, ColorError::SingularMatrix("working space"));
    }

    #[test]
    fn test_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| ColorContext::global() as *const ColorContext as usize))
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }
}
