//! # Umbra Render - Theme Stylesheets from Catalogues
//!
//! `umbra-render` turns a theme catalogue (see [`umbra_catalogue`]) and a set
//! of color filter settings into a CSS stylesheet that recolors a page's
//! chrome: backgrounds, text, borders and their hover/active states.
//!
//! ## Core Concepts
//!
//! - [`FilterConfig`]: the user's brightness/contrast/sepia/grayscale, mode
//!   and font settings
//! - [`ThemePalette`]: concrete colors for each [`PaletteRole`], derived from
//!   a built-in dark or light base palette through a [`ColorFilter`]
//! - [`RuleTable`]: the ordered table of [`Rule`]s mapping record properties
//!   to CSS declarations
//! - [`StylesheetGenerator`]: resolves records for a URL and runs the table
//!
//! ## Quick Start
//!
//! ```rust
//! use umbra_render::{generate_stylesheet, Catalogue, FilterConfig};
//!
//! let catalogue = Catalogue::parse(r#"
//! *
//!
//! NEUTRAL BG
//! body
//!
//! ================================
//!
//! example.com
//!
//! NEUTRAL BG
//! header
//! "#).unwrap();
//!
//! let css = generate_stylesheet(&FilterConfig::default(), "https://example.com", &catalogue);
//!
//! assert!(css.starts_with("/* Common theme */\nbody {"));
//! assert!(css.contains("/* Theme for example.com */\nheader {"));
//! ```
//!
//! ## Collaborators
//!
//! URL matching, color filtering and font rules are traits ([`UrlMatcher`],
//! [`ColorFilter`], [`TextRule`]) implemented for plain closures, so any of
//! them can be swapped out:
//!
//! ```rust
//! use umbra_render::{Catalogue, Color, FilterConfig, StylesheetGenerator};
//!
//! let generator = StylesheetGenerator::new()
//!     .with_filter(|color: Color, _: &FilterConfig| color)
//!     .with_matcher(|url: &str, patterns: &[String]| patterns.iter().any(|p| p == url));
//! ```

mod color;
mod filter;
mod font;
mod palette;
mod rules;
mod stylesheet;

pub use color::{Color, Rgb};
pub use filter::{
    apply_matrix, filter_matrix, ColorFilter, ColorMatrixFilter, FilterConfig, FilterMode, Matrix,
};
pub use font::{FontRule, TextRule};
pub use palette::{PaletteRole, ThemePalette};
pub use rules::{
    Declaration, Rule, RuleTable, State, BG_ACTIVE, BG_HOVER, BORDER, FG_ACTIVE, FG_HOVER,
};
pub use stylesheet::{generate_stylesheet, StylesheetGenerator};

// Catalogue types used in this crate's API
pub use umbra_catalogue::{Catalogue, GlobMatcher, Property, ThemeRecord, UrlMatcher};
