//! Theme color palettes.
//!
//! A palette assigns a concrete color to each [`PaletteRole`]. Two built-in
//! base palettes encode the target polarity: [`ThemePalette::DARK`] for dark
//! mode and [`ThemePalette::LIGHT`] for light mode. The palette used for a
//! stylesheet is derived from one of them by passing every color through the
//! user's filter settings.

use serde::Serialize;

use crate::color::Color;
use crate::filter::{ColorFilter, FilterConfig, FilterMode};

/// A named color slot of the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PaletteRole {
    NeutralBg,
    NeutralText,
    RedBg,
    RedText,
    GreenBg,
    GreenText,
    BlueBg,
    BlueText,
    FadeBg,
    FadeText,
}

impl PaletteRole {
    /// Every role, in storage order.
    pub const ALL: [PaletteRole; 10] = [
        PaletteRole::NeutralBg,
        PaletteRole::NeutralText,
        PaletteRole::RedBg,
        PaletteRole::RedText,
        PaletteRole::GreenBg,
        PaletteRole::GreenText,
        PaletteRole::BlueBg,
        PaletteRole::BlueText,
        PaletteRole::FadeBg,
        PaletteRole::FadeText,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// A complete role → color mapping.
///
/// Every role always has a color; the palette is immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    colors: [Color; 10],
}

impl ThemePalette {
    /// Base palette for dark mode.
    pub const DARK: ThemePalette = ThemePalette {
        colors: [
            Color::rgb(16, 20, 23),
            Color::rgb(167, 158, 139),
            Color::rgb(64, 12, 32),
            Color::rgb(247, 142, 102),
            Color::rgb(32, 64, 48),
            Color::rgb(128, 204, 148),
            Color::rgb(32, 48, 64),
            Color::rgb(128, 182, 204),
            Color::rgba(16, 20, 23, 0.5),
            Color::rgba(167, 158, 139, 0.5),
        ],
    };

    /// Base palette for light mode.
    pub const LIGHT: ThemePalette = ThemePalette {
        colors: [
            Color::rgb(255, 242, 228),
            Color::rgb(0, 0, 0),
            Color::rgb(255, 85, 170),
            Color::rgb(140, 14, 48),
            Color::rgb(192, 255, 170),
            Color::rgb(0, 128, 0),
            Color::rgb(173, 215, 229),
            Color::rgb(28, 16, 171),
            Color::rgba(0, 0, 0, 0.5),
            Color::rgba(0, 0, 0, 0.5),
        ],
    };

    /// Returns the base palette for a mode.
    pub fn base(mode: FilterMode) -> &'static ThemePalette {
        match mode {
            FilterMode::Dark => &Self::DARK,
            FilterMode::Light => &Self::LIGHT,
        }
    }

    /// Derives the palette for a stylesheet.
    ///
    /// The base palette is picked by `config.mode`, then every color goes
    /// through `filter` with the mode forced to light: the base palette
    /// already has the target polarity, so filtering in dark mode would
    /// invert it a second time.
    pub fn derive<F>(config: &FilterConfig, filter: &F) -> ThemePalette
    where
        F: ColorFilter + ?Sized,
    {
        let neutral = config.with_mode(FilterMode::Light);
        Self::base(config.mode).map(|color| filter.apply(color, &neutral))
    }

    /// Applies `f` to every color.
    pub fn map(&self, mut f: impl FnMut(Color) -> Color) -> ThemePalette {
        let mut colors = self.colors;
        for color in &mut colors {
            *color = f(*color);
        }
        ThemePalette { colors }
    }

    /// Returns the color of a role.
    pub fn get(&self, role: PaletteRole) -> Color {
        self.colors[role.index()]
    }

    /// Iterates roles with their colors.
    pub fn iter(&self) -> impl Iterator<Item = (PaletteRole, Color)> + '_ {
        PaletteRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ColorMatrixFilter;

    #[test]
    fn base_follows_mode() {
        assert_eq!(ThemePalette::base(FilterMode::Dark), &ThemePalette::DARK);
        assert_eq!(ThemePalette::base(FilterMode::Light), &ThemePalette::LIGHT);
        assert_eq!(
            ThemePalette::DARK.get(PaletteRole::NeutralBg),
            Color::rgb(16, 20, 23)
        );
    }

    #[test]
    fn fade_roles_carry_alpha() {
        for palette in [ThemePalette::DARK, ThemePalette::LIGHT] {
            assert_eq!(palette.get(PaletteRole::FadeBg).alpha, Some(0.5));
            assert_eq!(palette.get(PaletteRole::FadeText).alpha, Some(0.5));
            assert_eq!(palette.get(PaletteRole::RedBg).alpha, None);
        }
    }

    #[test]
    fn derive_with_identity_settings_keeps_base() {
        let derived = ThemePalette::derive(&FilterConfig::default(), &ColorMatrixFilter);
        assert_eq!(derived, ThemePalette::DARK);
    }

    #[test]
    fn derive_does_not_invert_twice() {
        let seen = std::cell::RefCell::new(Vec::new());
        let spy = |color: Color, config: &FilterConfig| {
            seen.borrow_mut().push(config.mode);
            color
        };
        ThemePalette::derive(&FilterConfig::default(), &spy);

        let seen = seen.into_inner();
        assert_eq!(seen.len(), PaletteRole::ALL.len());
        assert!(seen.iter().all(|mode| *mode == FilterMode::Light));
    }

    #[test]
    fn derive_applies_adjustments() {
        let config = FilterConfig {
            brightness: 50.0,
            ..FilterConfig::default()
        };
        let derived = ThemePalette::derive(&config, &ColorMatrixFilter);
        assert_eq!(derived.get(PaletteRole::RedBg), Color::rgb(32, 6, 16));
        assert_eq!(derived.get(PaletteRole::GreenBg), Color::rgb(16, 32, 24));
        assert_eq!(derived.get(PaletteRole::FadeText).alpha, Some(0.5));
    }

    #[test]
    fn iter_visits_every_role() {
        let roles: Vec<PaletteRole> = ThemePalette::LIGHT.iter().map(|(r, _)| r).collect();
        assert_eq!(roles, PaletteRole::ALL.to_vec());
    }
}
