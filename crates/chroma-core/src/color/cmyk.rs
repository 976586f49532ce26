//! Subtractive models: CMY and CMYK

use super::rgb::Rgb;

/// Cyan, magenta, yellow in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cmy {
    /// Cyan
    pub c: f32,
    /// Magenta
    pub m: f32,
    /// Yellow
    pub y: f32,
}

/// Cyan, magenta, yellow and key (black) in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cmyk {
    /// Cyan
    pub c: f32,
    /// Magenta
    pub m: f32,
    /// Yellow
    pub y: f32,
    /// Key (black)
    pub k: f32,
}

impl Cmy {
    /// Create a new CMY color.
    #[inline]
    pub fn new(c: f32, m: f32, y: f32) -> Self {
        Self { c, m, y }
    }
}

impl Cmyk {
    /// Create a new CMYK color.
    #[inline]
    pub fn new(c: f32, m: f32, y: f32, k: f32) -> Self {
        Self { c, m, y, k }
    }
}

impl From<Rgb> for Cmy {
    fn from(rgb: Rgb) -> Self {
        Self::new(1.0 - rgb.r, 1.0 - rgb.g, 1.0 - rgb.b)
    }
}

impl From<Cmy> for Rgb {
    fn from(cmy: Cmy) -> Self {
        Rgb::new(1.0 - cmy.c, 1.0 - cmy.m, 1.0 - cmy.y)
    }
}

impl From<Cmy> for Cmyk {
    /// Pull the shared component out into K.
    ///
    /// Pure black (`k == 1`) leaves C, M and Y at zero instead of `0 / 0`.
    fn from(cmy: Cmy) -> Self {
        let k = 1.0f32.min(cmy.c).min(cmy.m).min(cmy.y);
        if k == 1.0 {
            return Self::new(0.0, 0.0, 0.0, k);
        }
        Self::new(
            (cmy.c - k) / (1.0 - k),
            (cmy.m - k) / (1.0 - k),
            (cmy.y - k) / (1.0 - k),
            k,
        )
    }
}

impl From<Cmyk> for Cmy {
    fn from(cmyk: Cmyk) -> Self {
        let k = cmyk.k;
        Self::new(
            cmyk.c * (1.0 - k) + k,
            cmyk.m * (1.0 - k) + k,
            cmyk.y * (1.0 - k) + k,
        )
    }
}

impl From<Rgb> for Cmyk {
    fn from(rgb: Rgb) -> Self {
        Cmyk::from(Cmy::from(rgb))
    }
}

impl From<Cmyk> for Rgb {
    fn from(cmyk: Cmyk) -> Self {
        Rgb::from(Cmy::from(cmyk))
    }
}
