//! 3x3 matrices for working-space and chromatic adaptation transforms
//!
//! Matrices are row-major and act on column vectors: `m * v`.

use std::ops::Mul;

use super::xyz::Xyz;

/// Bradford cone response matrix (Lam, 1985).
pub const BRADFORD: Matrix3 = Matrix3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// xy chromaticities of the red, green and blue primaries of an RGB space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y)
    pub red: (f64, f64),
    /// Green primary (x, y)
    pub green: (f64, f64),
    /// Blue primary (x, y)
    pub blue: (f64, f64),
}

/// sRGB / Rec. 709 primaries.
pub const SRGB_PRIMARIES: Primaries = Primaries {
    red: (0.6400, 0.3300),
    green: (0.3000, 0.6000),
    blue: (0.1500, 0.0600),
};

/// A row-major 3x3 matrix of f64.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    rows: [[f64; 3]; 3],
}

impl Matrix3 {
    /// Build from rows.
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// The identity transform.
    pub const fn identity() -> Self {
        Self::diagonal([1.0, 1.0, 1.0])
    }

    /// A diagonal scaling matrix.
    pub const fn diagonal(d: [f64; 3]) -> Self {
        Self::from_rows([[d[0], 0.0, 0.0], [0.0, d[1], 0.0], [0.0, 0.0, d[2]]])
    }

    /// Row-major elements.
    pub fn rows(&self) -> &[[f64; 3]; 3] {
        &self.rows
    }

    /// Apply to a column vector.
    #[inline]
    pub fn transform(&self, v: [f64; 3]) -> [f64; 3] {
        let m = &self.rows;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f64 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Inverse via the adjugate, or `None` for a singular matrix.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows;
        let inv = 1.0 / det;
        Some(Self::from_rows([
            [(e * i - f * h) * inv, (c * h - b * i) * inv, (b * f - c * e) * inv],
            [(f * g - d * i) * inv, (a * i - c * g) * inv, (c * d - a * f) * inv],
            [(d * h - e * g) * inv, (b * g - a * h) * inv, (a * e - b * d) * inv],
        ]))
    }

    /// RGB to XYZ matrix for a working space with the given primaries and
    /// reference white.
    ///
    /// Returns `None` when the primaries are collinear.
    pub fn working_space(primaries: Primaries, white: Xyz) -> Option<Self> {
        // XYZ of each primary at Y = 1, one primary per column
        let column = |(x, y): (f64, f64)| [x / y, 1.0, (1.0 - x - y) / y];
        let r = column(primaries.red);
        let g = column(primaries.green);
        let b = column(primaries.blue);
        let p = Self::from_rows([[r[0], g[0], b[0]], [r[1], g[1], b[1]], [r[2], g[2], b[2]]]);

        let s = p.inverse()?.transform(white.to_array());
        Some(p * Self::diagonal(s))
    }

    /// Bradford transform taking XYZ under `source` white to XYZ under
    /// `destination` white.
    pub fn chromatic_adaptation(source: Xyz, destination: Xyz) -> Option<Self> {
        let bradford_inverse = BRADFORD.inverse()?;
        let src = BRADFORD.transform(source.to_array());
        let dst = BRADFORD.transform(destination.to_array());
        let scale = Self::diagonal([dst[0] / src[0], dst[1] / src[1], dst[2] / src[2]]);
        Some(bradford_inverse * scale * BRADFORD)
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: Matrix3) -> Matrix3 {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.rows[i][k] * rhs.rows[k][j]).sum();
            }
        }
        Matrix3::from_rows(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::reference::{reference_white, Illuminant, Observer};

    fn assert_matrix_close(a: &Matrix3, b: &Matrix3, tol: f64) {
        for i in 0..3 {
            for j in 0..3 {
                let (x, y) = (a.rows()[i][j], b.rows()[i][j]);
                assert!((x - y).abs() < tol, "[{i}][{j}]: {x} vs {y}");
            }
        }
    }

    #[test]
    fn test_inverse_matches_nalgebra() {
        let m = Matrix3::from_rows([[2.0, -1.0, 0.5], [0.3, 4.0, 1.0], [1.5, 0.2, 3.0]]);
        let ours = m.inverse().unwrap();

        let na = nalgebra::Matrix3::new(2.0, -1.0, 0.5, 0.3, 4.0, 1.0, 1.5, 0.2, 3.0);
        let theirs = na.try_inverse().unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert!((ours.rows()[i][j] - theirs[(i, j)]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_inverse_of_singular_is_none() {
        let m = Matrix3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_product_with_inverse_is_identity() {
        let inv = BRADFORD.inverse().unwrap();
        assert_matrix_close(&(BRADFORD * inv), &Matrix3::identity(), 1e-12);
    }

    #[test]
    fn test_srgb_working_space_matrix() {
        let d65 = reference_white(Illuminant::D65, Observer::Two);
        let m = Matrix3::working_space(SRGB_PRIMARIES, d65).unwrap();
        // Well known sRGB -> XYZ coefficients (scaled to Y = 100)
        let expected = Matrix3::from_rows([
            [41.2456, 35.7576, 18.0437],
            [21.2673, 71.5152, 7.2175],
            [1.9334, 11.9192, 95.0304],
        ]);
        assert_matrix_close(&m, &expected, 1e-3);

        // White maps to the reference white
        let white = m.transform([1.0, 1.0, 1.0]);
        let target = d65.to_array();
        for k in 0..3 {
            assert!((white[k] - target[k]).abs() < 1e-9, "{white:?}");
        }
    }

    #[test]
    fn test_collinear_primaries_rejected() {
        let d65 = reference_white(Illuminant::D65, Observer::Two);
        let flat = Primaries {
            red: (0.3, 0.3),
            green: (0.3, 0.3),
            blue: (0.3, 0.3),
        };
        assert!(Matrix3::working_space(flat, d65).is_none());
    }

    #[test]
    fn test_adaptation_maps_white_to_white() {
        let d65 = reference_white(Illuminant::D65, Observer::Two);
        let d50 = reference_white(Illuminant::D50, Observer::Two);
        let m = Matrix3::chromatic_adaptation(d65, d50).unwrap();
        let adapted = m.transform(d65.to_array());
        let target = d50.to_array();
        for k in 0..3 {
            assert!((adapted[k] - target[k]).abs() < 1e-9, "{adapted:?}");
        }
    }

    #[test]
    fn test_adaptation_inverse_pair() {
        let d65 = reference_white(Illuminant::D65, Observer::Two);
        let d50 = reference_white(Illuminant::D50, Observer::Two);
        let forward = Matrix3::chromatic_adaptation(d65, d50).unwrap();
        let back = Matrix3::chromatic_adaptation(d50, d65).unwrap();
        assert_matrix_close(&(forward * back), &Matrix3::identity(), 1e-12);
    }

    #[test]
    fn test_same_white_adaptation_is_identity() {
        let d50 = reference_white(Illuminant::D50, Observer::Two);
        let m = Matrix3::chromatic_adaptation(d50, d50).unwrap();
        assert_matrix_close(&m, &Matrix3::identity(), 1e-12);
    }

    #[test]
    fn test_known_bradford_d65_to_d50() {
        let d65 = reference_white(Illuminant::D65, Observer::Two);
        let d50 = reference_white(Illuminant::D50, Observer::Two);
        let m = Matrix3::chromatic_adaptation(d65, d50).unwrap();
        // Lindbloom's published Bradford D65 -> D50 matrix
        let expected = Matrix3::from_rows([
            [1.0478112, 0.0228866, -0.0501270],
            [0.0295424, 0.9904844, -0.0170491],
            [-0.0092345, 0.0150436, 0.7521316],
        ]);
        assert_matrix_close(&m, &expected, 1e-5);
    }
}
