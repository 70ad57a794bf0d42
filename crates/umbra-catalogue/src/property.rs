//! The fixed set of selector-list properties a record can carry.
//!
//! Property names travel in two spellings: camelCase inside the program
//! (`neutralBgActive`) and upper case with spaces in catalogue text
//! (`NEUTRAL BG ACTIVE`). [`header_to_camel`] and [`camel_to_header`] convert
//! between them.

use serde::Serialize;

/// Name of the boolean opt-out flag. It is not a selector list and therefore
/// not a [`Property`] variant.
pub const NO_COMMON: &str = "noCommon";

/// A selector-list property of a theme record.
///
/// Declaration order is the canonical serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    NeutralBg,
    NeutralBgActive,
    NeutralText,
    NeutralTextActive,
    NeutralBorder,
    RedBg,
    RedBgActive,
    RedText,
    RedTextActive,
    RedBorder,
    GreenBg,
    GreenBgActive,
    GreenText,
    GreenTextActive,
    GreenBorder,
    BlueBg,
    BlueBgActive,
    BlueText,
    BlueTextActive,
    BlueBorder,
    FadeBg,
    FadeText,
    TransparentBg,
    NoImage,
    Invert,
}

impl Property {
    /// Every property, in canonical order.
    pub const ALL: [Property; 25] = [
        Property::NeutralBg,
        Property::NeutralBgActive,
        Property::NeutralText,
        Property::NeutralTextActive,
        Property::NeutralBorder,
        Property::RedBg,
        Property::RedBgActive,
        Property::RedText,
        Property::RedTextActive,
        Property::RedBorder,
        Property::GreenBg,
        Property::GreenBgActive,
        Property::GreenText,
        Property::GreenTextActive,
        Property::GreenBorder,
        Property::BlueBg,
        Property::BlueBgActive,
        Property::BlueText,
        Property::BlueTextActive,
        Property::BlueBorder,
        Property::FadeBg,
        Property::FadeText,
        Property::TransparentBg,
        Property::NoImage,
        Property::Invert,
    ];

    /// Returns the camelCase name of this property.
    pub fn name(self) -> &'static str {
        match self {
            Property::NeutralBg => "neutralBg",
            Property::NeutralBgActive => "neutralBgActive",
            Property::NeutralText => "neutralText",
            Property::NeutralTextActive => "neutralTextActive",
            Property::NeutralBorder => "neutralBorder",
            Property::RedBg => "redBg",
            Property::RedBgActive => "redBgActive",
            Property::RedText => "redText",
            Property::RedTextActive => "redTextActive",
            Property::RedBorder => "redBorder",
            Property::GreenBg => "greenBg",
            Property::GreenBgActive => "greenBgActive",
            Property::GreenText => "greenText",
            Property::GreenTextActive => "greenTextActive",
            Property::GreenBorder => "greenBorder",
            Property::BlueBg => "blueBg",
            Property::BlueBgActive => "blueBgActive",
            Property::BlueText => "blueText",
            Property::BlueTextActive => "blueTextActive",
            Property::BlueBorder => "blueBorder",
            Property::FadeBg => "fadeBg",
            Property::FadeText => "fadeText",
            Property::TransparentBg => "transparentBg",
            Property::NoImage => "noImage",
            Property::Invert => "invert",
        }
    }

    /// Looks up a property by its camelCase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Returns the section header used for this property in catalogue text.
    pub fn header(self) -> String {
        camel_to_header(self.name())
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns `true` if a trimmed line is a section header: non-empty and made
/// only of ASCII upper-case letters and spaces.
pub fn is_section_header(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_uppercase() || b == b' ')
}

/// Converts `NEUTRAL BG ACTIVE` to `neutralBgActive`.
///
/// Words are split on single spaces, so runs of spaces produce empty words
/// that contribute nothing.
pub fn header_to_camel(header: &str) -> String {
    let mut out = String::with_capacity(header.len());
    for (i, word) in header.split(' ').enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out
}

/// Converts `neutralBgActive` to `NEUTRAL BG ACTIVE`.
pub fn camel_to_header(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_uppercase() {
            out.push(' ');
        }
        out.extend(c.to_uppercase());
    }
    out.trim().to_string()
}
