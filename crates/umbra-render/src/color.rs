//! Color values and linear mixing.

use serde::Serialize;

/// A simple RGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Pure white, the hover/active accent of neutral roles.
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Blends `self` toward `other` by `t` (0.0 keeps `self`, 1.0 yields
    /// `other`), rounding each channel to the nearest integer.
    pub fn mix(self, other: Rgb, t: f64) -> Rgb {
        Rgb(
            mix_channel(self.0, other.0, t),
            mix_channel(self.1, other.1, t),
            mix_channel(self.2, other.2, t),
        )
    }
}

fn mix_channel(base: u8, accent: u8, t: f64) -> u8 {
    let value = f64::from(base) * (1.0 - t) + f64::from(accent) * t;
    value.round().clamp(0.0, 255.0) as u8
}

/// An RGB color with optional alpha (0.0–1.0).
///
/// Displays as CSS: `rgb(r, g, b)` without alpha, `rgba(r, g, b, a)` with it.
///
/// ```rust
/// use umbra_render::Color;
///
/// assert_eq!(Color::rgb(16, 20, 23).to_string(), "rgb(16, 20, 23)");
/// assert_eq!(Color::rgba(0, 0, 0, 0.5).to_string(), "rgba(0, 0, 0, 0.5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub rgb: Rgb,
    pub alpha: Option<f64>,
}

impl Color {
    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: Rgb(r, g, b),
            alpha: None,
        }
    }

    /// A color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self {
            rgb: Rgb(r, g, b),
            alpha: Some(alpha),
        }
    }

    /// Replaces the RGB channels, keeping alpha.
    pub fn with_rgb(self, rgb: Rgb) -> Self {
        Self { rgb, ..self }
    }

    /// Blends the RGB channels toward `accent`, keeping alpha.
    pub fn mix(self, accent: Rgb, t: f64) -> Self {
        self.with_rgb(self.rgb.mix(accent, t))
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self { rgb, alpha: None }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Rgb(r, g, b) = self.rgb;
        match self.alpha {
            Some(a) => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
            None => write!(f, "rgb({}, {}, {})", r, g, b),
        }
    }
}
