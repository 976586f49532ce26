//! Reference whites for the CIE standard illuminants
//!
//! Tristimulus values are scaled so that Y = 100, matching the scale the
//! working-space matrices produce.

use std::fmt;
use std::str::FromStr;

use super::xyz::Xyz;
use crate::error::ParseReferenceError;

/// CIE standard illuminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Illuminant {
    /// Incandescent / tungsten
    A,
    /// Average daylight (obsolete)
    C,
    /// Horizon light, ICC profile connection space
    #[default]
    D50,
    /// Mid-morning daylight
    D55,
    /// Noon daylight, sRGB white
    D65,
    /// North sky daylight
    D75,
    /// Cool white fluorescent
    F2,
    /// D65 simulator fluorescent
    F7,
    /// Philips TL84 fluorescent
    F11,
}

/// CIE standard observer field of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Observer {
    /// CIE 1931 2 degree observer
    #[default]
    Two,
    /// CIE 1964 10 degree observer
    Ten,
}

impl Illuminant {
    /// Every illuminant in catalog order.
    pub const ALL: [Illuminant; 9] = [
        Illuminant::A,
        Illuminant::C,
        Illuminant::D50,
        Illuminant::D55,
        Illuminant::D65,
        Illuminant::D75,
        Illuminant::F2,
        Illuminant::F7,
        Illuminant::F11,
    ];

    /// Canonical label, e.g. `"D65"`.
    pub fn label(self) -> &'static str {
        match self {
            Illuminant::A => "A",
            Illuminant::C => "C",
            Illuminant::D50 => "D50",
            Illuminant::D55 => "D55",
            Illuminant::D65 => "D65",
            Illuminant::D75 => "D75",
            Illuminant::F2 => "F2",
            Illuminant::F7 => "F7",
            Illuminant::F11 => "F11",
        }
    }

    /// Lenient lookup: unrecognized labels fall back to D50.
    ///
    /// ```
    /// use chroma_core::Illuminant;
    /// assert_eq!(Illuminant::from_label("D65"), Illuminant::D65);
    /// assert_eq!(Illuminant::from_label("bogus"), Illuminant::D50);
    /// ```
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl Observer {
    /// Both observers in catalog order.
    pub const ALL: [Observer; 2] = [Observer::Two, Observer::Ten];

    /// Canonical label, `"2"` or `"10"`.
    pub fn label(self) -> &'static str {
        match self {
            Observer::Two => "2",
            Observer::Ten => "10",
        }
    }

    /// Lenient lookup: unrecognized labels fall back to the 2 degree observer.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl FromStr for Illuminant {
    type Err = ParseReferenceError;

    /// Exact, case-sensitive match against the canonical labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Illuminant::ALL
            .into_iter()
            .find(|i| i.label() == s)
            .ok_or_else(|| ParseReferenceError::UnknownIlluminant(s.to_string()))
    }
}

impl FromStr for Observer {
    type Err = ParseReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Observer::ALL
            .into_iter()
            .find(|o| o.label() == s)
            .ok_or_else(|| ParseReferenceError::UnknownObserver(s.to_string()))
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// (2 degree, 10 degree) white points, indexed in `Illuminant::ALL` order.
const WHITES: [[[f32; 3]; 2]; 9] = [
    [[109.850, 100.000, 35.585], [111.144, 100.000, 35.200]],
    [[98.074, 100.000, 118.232], [97.285, 100.000, 116.145]],
    [[96.422, 100.000, 82.521], [96.720, 100.000, 81.427]],
    [[95.682, 100.000, 92.149], [95.799, 100.000, 90.926]],
    [[95.047, 100.000, 108.883], [94.811, 100.000, 107.304]],
    [[94.972, 100.000, 122.638], [94.416, 100.000, 120.641]],
    [[99.187, 100.000, 67.395], [103.280, 100.000, 69.026]],
    [[95.044, 100.000, 108.755], [95.792, 100.000, 107.687]],
    [[100.966, 100.000, 64.370], [103.866, 100.000, 65.627]],
];

/// Reference white for an illuminant / observer pair.
pub fn reference_white(illuminant: Illuminant, observer: Observer) -> Xyz {
    let [x, y, z] = WHITES[illuminant as usize][observer as usize];
    Xyz::new(x, y, z)
}
