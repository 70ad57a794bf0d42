//! Filter settings and color filtering.
//!
//! [`FilterConfig`] carries the user's adjustments. [`ColorFilter`] maps a
//! color through them; [`ColorMatrixFilter`] is the default implementation,
//! composing brightness, contrast, sepia, grayscale and (in dark mode) an
//! invert-and-rotate-hue step into one 5×5 color matrix.
//!
//! # Configuration
//!
//! `FilterConfig` deserializes from YAML or JSON. Every field is optional:
//!
//! ```yaml
//! mode: dark        # light | dark
//! brightness: 110   # percent, 100 = unchanged
//! contrast: 90      # percent, 100 = unchanged
//! sepia: 10         # percent, 0 = unchanged
//! grayscale: 0      # percent, 0 = unchanged
//! use_font: true
//! font_family: Open Sans
//! text_stroke: 0.3  # px
//! ```

use serde::{Deserialize, Serialize};

use crate::color::{Color, Rgb};

/// Whether the target page should end up light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Keep polarity; no inversion.
    Light,
    /// Dark background, light text.
    #[default]
    Dark,
}

impl FilterMode {
    /// Returns `true` for dark mode.
    pub fn is_dark(self) -> bool {
        matches!(self, FilterMode::Dark)
    }
}

/// User-facing filter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub mode: FilterMode,
    pub brightness: f64,
    pub contrast: f64,
    pub grayscale: f64,
    pub sepia: f64,
    pub use_font: bool,
    pub font_family: String,
    pub text_stroke: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            mode: FilterMode::Dark,
            brightness: 100.0,
            contrast: 100.0,
            grayscale: 0.0,
            sepia: 0.0,
            use_font: false,
            font_family: String::new(),
            text_stroke: 0.0,
        }
    }
}

impl FilterConfig {
    /// Returns a copy with a different mode.
    pub fn with_mode(&self, mode: FilterMode) -> Self {
        Self {
            mode,
            ..self.clone()
        }
    }

    /// Returns `true` if font overrides should be emitted.
    pub fn wants_font(&self) -> bool {
        self.use_font || self.text_stroke > 0.0
    }
}

/// Maps a color through filter settings.
///
/// Implementations must pass alpha through unchanged. Any
/// `Fn(Color, &FilterConfig) -> Color` is a filter.
pub trait ColorFilter {
    fn apply(&self, color: Color, config: &FilterConfig) -> Color;
}

impl<F> ColorFilter for F
where
    F: Fn(Color, &FilterConfig) -> Color,
{
    fn apply(&self, color: Color, config: &FilterConfig) -> Color {
        self(color, config)
    }
}

/// Default filter: a composed 5×5 color matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorMatrixFilter;

impl ColorFilter for ColorMatrixFilter {
    fn apply(&self, color: Color, config: &FilterConfig) -> Color {
        let matrix = filter_matrix(config);
        color.with_rgb(apply_matrix(color.rgb, &matrix))
    }
}

/// A 5×5 color matrix operating on `[r, g, b, a, 1]`.
pub type Matrix = [[f64; 5]; 5];

const IDENTITY: Matrix = [
    [1.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 1.0],
];

const INVERT_HUE: Matrix = [
    [0.333, -0.667, -0.667, 0.0, 1.0],
    [-0.667, 0.333, -0.667, 0.0, 1.0],
    [-0.667, -0.667, 0.333, 0.0, 1.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 1.0],
];

fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    let mut out = [[0.0; 5]; 5];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..5).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    out
}

fn brightness(v: f64) -> Matrix {
    [
        [v, 0.0, 0.0, 0.0, 0.0],
        [0.0, v, 0.0, 0.0, 0.0],
        [0.0, 0.0, v, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 1.0],
    ]
}

fn contrast(v: f64) -> Matrix {
    let t = (1.0 - v) / 2.0;
    [
        [v, 0.0, 0.0, 0.0, t],
        [0.0, v, 0.0, 0.0, t],
        [0.0, 0.0, v, 0.0, t],
        [0.0, 0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 1.0],
    ]
}

fn sepia(v: f64) -> Matrix {
    let w = 1.0 - v;
    [
        [0.393 + 0.607 * w, 0.769 - 0.769 * w, 0.189 - 0.189 * w, 0.0, 0.0],
        [0.349 - 0.349 * w, 0.686 + 0.314 * w, 0.168 - 0.168 * w, 0.0, 0.0],
        [0.272 - 0.272 * w, 0.534 - 0.534 * w, 0.131 + 0.869 * w, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 1.0],
    ]
}

fn grayscale(v: f64) -> Matrix {
    let w = 1.0 - v;
    [
        [0.2126 + 0.7874 * w, 0.7152 - 0.7152 * w, 0.0722 - 0.0722 * w, 0.0, 0.0],
        [0.2126 - 0.2126 * w, 0.7152 + 0.2848 * w, 0.0722 - 0.0722 * w, 0.0, 0.0],
        [0.2126 - 0.2126 * w, 0.7152 - 0.7152 * w, 0.0722 + 0.9278 * w, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 1.0],
    ]
}

/// Builds the composed matrix for a config.
///
/// Steps at their neutral value are skipped, so the identity config yields
/// the identity matrix exactly.
pub fn filter_matrix(config: &FilterConfig) -> Matrix {
    let mut m = IDENTITY;
    if config.sepia != 0.0 {
        m = multiply(&m, &sepia(config.sepia / 100.0));
    }
    if config.grayscale != 0.0 {
        m = multiply(&m, &grayscale(config.grayscale / 100.0));
    }
    if config.contrast != 100.0 {
        m = multiply(&m, &contrast(config.contrast / 100.0));
    }
    if config.brightness != 100.0 {
        m = multiply(&m, &brightness(config.brightness / 100.0));
    }
    if config.mode.is_dark() {
        m = multiply(&m, &INVERT_HUE);
    }
    m
}

/// Applies a matrix to an RGB color, rounding and clamping each channel.
pub fn apply_matrix(rgb: Rgb, m: &Matrix) -> Rgb {
    let v = [
        f64::from(rgb.0) / 255.0,
        f64::from(rgb.1) / 255.0,
        f64::from(rgb.2) / 255.0,
        1.0,
        1.0,
    ];
    let channel = |row: &[f64; 5]| {
        let value: f64 = row.iter().zip(v.iter()).map(|(a, b)| a * b).sum();
        (value * 255.0).round().clamp(0.0, 255.0) as u8
    };
    Rgb(channel(&m[0]), channel(&m[1]), channel(&m[2]))
}
