//! Theme records and the catalogue that owns them.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{CatalogueError, Result};
use crate::matcher::UrlMatcher;
use crate::property::Property;

/// The primary pattern that marks the common record.
pub const COMMON_PATTERN: &str = "*";

/// One catalogue entry: the common record or a per-site override.
///
/// # Example
///
/// ```rust
/// use umbra_catalogue::{Property, ThemeRecord};
///
/// let record = ThemeRecord::new(["example.com"])
///     .with(Property::NeutralBg, ["header", ".sidebar"])
///     .with_no_common(true);
///
/// assert_eq!(record.primary_url(), "example.com");
/// assert_eq!(record.selectors(Property::NeutralBg).unwrap().len(), 2);
/// assert!(record.no_common);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRecord {
    /// URL patterns; the first one is the primary pattern.
    pub url: Vec<String>,
    /// Whether this record opts out of the common record's rules.
    pub no_common: bool,
    #[serde(flatten)]
    selectors: BTreeMap<Property, Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extras: Vec<(String, Vec<String>)>,
}

impl ThemeRecord {
    /// Creates a record with the given URL patterns and no properties.
    pub fn new<I, S>(url: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            url: url.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Creates the common record (`url = ["*"]`).
    pub fn common() -> Self {
        Self::new([COMMON_PATTERN])
    }

    /// Sets a selector list, returning `self` for chaining.
    pub fn with<I, S>(mut self, property: Property, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(property, selectors.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the `noCommon` flag, returning `self` for chaining.
    pub fn with_no_common(mut self, no_common: bool) -> Self {
        self.no_common = no_common;
        self
    }

    /// Adds a section outside the fixed property set, returning `self` for
    /// chaining.
    pub fn with_extra<I, S>(mut self, name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_extra(name.into(), lines.into_iter().map(Into::into).collect());
        self
    }

    /// The primary pattern, or `""` for a record without patterns.
    pub fn primary_url(&self) -> &str {
        self.url.first().map(String::as_str).unwrap_or("")
    }

    /// Returns `true` if this is the common record.
    pub fn is_common(&self) -> bool {
        self.primary_url() == COMMON_PATTERN
    }

    /// Specificity score used to rank matching records: the length of the
    /// primary pattern in characters.
    pub fn specificity(&self) -> usize {
        self.primary_url().chars().count()
    }

    /// Returns the selector list stored for a property, if any.
    ///
    /// A present but empty list means the section was declared without body
    /// lines.
    pub fn selectors(&self, property: Property) -> Option<&[String]> {
        self.selectors.get(&property).map(Vec::as_slice)
    }

    /// Iterates the stored selector lists in canonical property order.
    pub fn properties(&self) -> impl Iterator<Item = (Property, &[String])> {
        self.selectors.iter().map(|(p, s)| (*p, s.as_slice()))
    }

    /// Sections whose names are outside the fixed property set, in the order
    /// they were first declared.
    pub fn extras(&self) -> &[(String, Vec<String>)] {
        &self.extras
    }

    /// Replaces the selector list of a property.
    pub fn set(&mut self, property: Property, selectors: Vec<String>) {
        self.selectors.insert(property, selectors);
    }

    pub(crate) fn selectors_mut(&mut self, property: Property) -> &mut Vec<String> {
        self.selectors.entry(property).or_default()
    }

    /// Replaces an extra section, keeping its original position if it
    /// already exists. Returns the index of the section.
    pub fn set_extra(&mut self, name: String, lines: Vec<String>) -> usize {
        match self.extras.iter().position(|(n, _)| *n == name) {
            Some(index) => {
                self.extras[index].1 = lines;
                index
            }
            None => {
                self.extras.push((name, lines));
                self.extras.len() - 1
            }
        }
    }

    pub(crate) fn extra_mut(&mut self, index: usize) -> &mut Vec<String> {
        &mut self.extras[index].1
    }
}

/// An ordered collection of theme records whose first element is the common
/// record.
///
/// The invariant is checked on construction, so [`common`](Catalogue::common)
/// never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalogue {
    records: Vec<ThemeRecord>,
}

impl Catalogue {
    /// Builds a catalogue from records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::MissingCommon`] if `records` is empty or its
    /// first element is not the common record.
    pub fn from_records(records: Vec<ThemeRecord>) -> Result<Self> {
        match records.first() {
            Some(first) if first.is_common() => Ok(Self { records }),
            _ => Err(CatalogueError::MissingCommon),
        }
    }

    /// All records, common record first.
    pub fn records(&self) -> &[ThemeRecord] {
        &self.records
    }

    /// The per-site records (everything after the common record).
    pub fn sites(&self) -> &[ThemeRecord] {
        &self.records[1..]
    }

    /// The common record. Always index 0.
    pub fn common(&self) -> &ThemeRecord {
        &self.records[0]
    }

    /// Number of records, including the common record.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`: a catalogue holds at least the common record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the catalogue and returns its records.
    pub fn into_records(self) -> Vec<ThemeRecord> {
        self.records
    }

    /// Parses catalogue text. See [`parse_catalogue`](crate::parse_catalogue).
    pub fn parse(text: &str) -> Result<Self> {
        crate::parser::parse_catalogue(text)
    }

    /// Formats the catalogue as canonical text. See
    /// [`format_catalogue`](crate::format_catalogue).
    pub fn format(&self) -> String {
        crate::formatter::format_catalogue(&self.records)
    }

    /// Returns the most specific per-site record for `url`. See
    /// [`resolve_for_url`](crate::resolve_for_url).
    pub fn resolve<M>(&self, url: &str, matcher: &M) -> Option<&ThemeRecord>
    where
        M: UrlMatcher + ?Sized,
    {
        crate::resolve::resolve_for_url(url, self, matcher)
    }
}

impl FromStr for Catalogue {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
