//! Umbra Catalogue - per-site theme overrides for page recoloring.
//!
//! A catalogue is a plain-text list of records. Each record names the pages
//! it applies to and, for every theme role, the CSS selectors that should be
//! painted with that role's color. The first record is the common record
//! (pattern `*`), applied everywhere unless a site record opts out.
//!
//! This crate provides:
//!
//! - [`parse_catalogue`] / [`format_catalogue`]: the text codec
//! - [`resolve_for_url`]: picking the site record for a page
//! - [`UrlMatcher`] and its default [`GlobMatcher`]
//!
//! # Quick Start
//!
//! ```rust
//! use umbra_catalogue::{Catalogue, GlobMatcher, Property};
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
//! NO COMMON
//!
//! NEUTRAL BG
//! header
//! "#).unwrap();
//!
//! let site = catalogue.resolve("https://www.example.com/", &GlobMatcher).unwrap();
//! assert!(site.no_common);
//! assert_eq!(site.selectors(Property::NeutralBg).unwrap(), &["header".to_string()]);
//!
//! // Formatting produces canonical text that parses back to the same records.
//! let again = Catalogue::parse(&catalogue.format()).unwrap();
//! assert_eq!(again, catalogue);
//! ```
//!
//! # Specificity
//!
//! When several site records match, the one with the longest primary
//! pattern wins, so `mail.google.com` beats `google.com`. Equal lengths are
//! resolved in favor of the record listed first.

mod error;
mod formatter;
mod matcher;
mod parser;
mod property;
mod record;
mod resolve;

pub use error::{CatalogueError, Result};
pub use formatter::{format_catalogue, sort_key, SEPARATOR};
pub use matcher::{pattern_regex, GlobMatcher, UrlMatcher};
pub use parser::parse_catalogue;
pub use property::{camel_to_header, header_to_camel, is_section_header, Property, NO_COMMON};
pub use record::{Catalogue, ThemeRecord, COMMON_PATTERN};
pub use resolve::{resolve_common, resolve_for_url};
