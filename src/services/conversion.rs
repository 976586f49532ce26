use chroma_core::{
    distance, distance_lch, mix, reference_white, Cmyk, Color, ColorContext, ColorError, Hsl, Hsv,
    Illuminant, Lab, Lch, Matrix3, Observer, Xyz,
};
use serde::Serialize;
use std::fmt;

use crate::error::AppError;

/// Which difference formula `distance` uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Euclidean distance in linear RGB
    #[default]
    Rgb,
    /// Weighted Lab/LCh difference under the configured white
    Lch,
}

/// Every supported view of one color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    pub hex: String,
    pub rgb: [f32; 3],
    pub hsv: [f32; 3],
    pub hsl: [f32; 3],
    pub cmyk: [f32; 4],
    pub xyz: [f32; 3],
    pub lab: [f32; 3],
    pub lch: [f32; 3],
    pub illuminant: String,
    pub observer: String,
    pub out_of_gamut: bool,
    pub contrasting: String,
}

impl fmt::Display for ColorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        let [h, s, v] = self.hsv;
        let [hl, sl, l] = self.hsl;
        let [c, m, y, k] = self.cmyk;
        let [xx, xy, xz] = self.xyz;
        let [ll, la, lb] = self.lab;
        let [cl, cc, ch] = self.lch;

        writeln!(f, "hex    {}", self.hex)?;
        writeln!(f, "rgb    {r:.4} {g:.4} {b:.4}")?;
        writeln!(f, "hsv    {:.2} {s:.4} {v:.4}", h * 360.0)?;
        writeln!(f, "hsl    {:.2} {sl:.4} {l:.4}", hl * 360.0)?;
        writeln!(f, "cmyk   {c:.4} {m:.4} {y:.4} {k:.4}")?;
        writeln!(f, "xyz    {xx:.4} {xy:.4} {xz:.4}")?;
        writeln!(
            f,
            "lab    {ll:.2} {la:.2} {lb:.2}  ({}/{})",
            self.illuminant, self.observer
        )?;
        writeln!(f, "lch    {cl:.2} {cc:.2} {ch:.2}")?;
        if self.out_of_gamut {
            writeln!(f, "gamut  out of sRGB gamut")?;
        }
        write!(f, "text   {}", self.contrasting)
    }
}

/// Converts colors under one configured reference white.
///
/// Lab and LCh are computed from sRGB (D65) with a Bradford adaptation to
/// the configured white.
#[derive(Debug, Clone)]
pub struct ConversionService {
    illuminant: Illuminant,
    observer: Observer,
    white: Xyz,
    to_white: Matrix3,
    from_white: Matrix3,
    context: &'static ColorContext,
}

impl ConversionService {
    pub fn new(illuminant: Illuminant, observer: Observer) -> Result<Self, AppError> {
        let context = ColorContext::initialize()?;
        let d65 = reference_white(Illuminant::D65, Observer::Two);
        let white = reference_white(illuminant, observer);
        let to_white = Matrix3::chromatic_adaptation(d65, white)
            .ok_or(ColorError::SingularMatrix("chromatic adaptation"))?;
        let from_white = Matrix3::chromatic_adaptation(white, d65)
            .ok_or(ColorError::SingularMatrix("chromatic adaptation"))?;

        tracing::debug!(%illuminant, %observer, "Conversion service ready");

        Ok(Self {
            illuminant,
            observer,
            white,
            to_white,
            from_white,
            context,
        })
    }

    /// Parse a hex color (`#rgb` or `#rrggbb`).
    pub fn parse(input: &str) -> Result<Color, AppError> {
        input
            .parse()
            .map_err(|e| AppError::parse_color(input, e))
    }

    pub fn illuminant(&self) -> Illuminant {
        self.illuminant
    }

    pub fn observer(&self) -> Observer {
        self.observer
    }

    /// Lab of an sRGB color under the configured white.
    pub fn lab(&self, color: Color) -> Lab {
        color
            .rgb()
            .to_lab(self.white, self.context.srgb(), &self.to_white)
    }

    /// Back from Lab under the configured white to sRGB.
    pub fn lab_to_color(&self, lab: Lab) -> Color {
        Color::from(lab.to_rgb(self.white, self.context.srgb_inverse(), &self.from_white))
    }

    pub fn report(&self, color: Color) -> ColorReport {
        let rgb = color.rgb();
        let hsv = Hsv::from(rgb);
        let hsl = Hsl::from(rgb);
        let cmyk = Cmyk::from(rgb);
        let xyz = rgb.to_xyz(self.context.srgb());
        let lab = self.lab(color);
        let lch = Lch::from(lab);

        ColorReport {
            hex: color.to_hex(),
            rgb: [rgb.r, rgb.g, rgb.b],
            hsv: [hsv.hue, hsv.saturation, hsv.value],
            hsl: [hsl.hue, hsl.saturation, hsl.lightness],
            cmyk: [cmyk.c, cmyk.m, cmyk.y, cmyk.k],
            xyz: [xyz.x, xyz.y, xyz.z],
            lab: [lab.l, lab.a, lab.b],
            lch: [lch.l, lch.c, lch.h],
            illuminant: self.illuminant.to_string(),
            observer: self.observer.to_string(),
            out_of_gamut: color.is_out_of_rgb_gamut(),
            contrasting: color.contrasting().to_hex(),
        }
    }

    pub fn distance(&self, a: Color, b: Color, metric: DistanceMetric) -> f32 {
        match metric {
            DistanceMetric::Rgb => distance(a.rgb(), b.rgb()),
            DistanceMetric::Lch => distance_lch(self.lab(a), self.lab(b)),
        }
    }

    /// Linear-light blend, `ratio` clamped to `[0, 1]`.
    pub fn mix(&self, a: Color, b: Color, ratio: f32) -> Color {
        mix(a, b, ratio.clamp(0.0, 1.0))
    }
}
