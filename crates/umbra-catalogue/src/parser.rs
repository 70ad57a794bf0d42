//! Catalogue text parsing.
//!
//! # Format
//!
//! ```text
//! *
//!
//! NEUTRAL BG
//! body
//!
//! ================================
//!
//! example.com
//! www.example.org
//!
//! NO COMMON
//!
//! INVERT
//! .logo
//! ```
//!
//! Records are separated by a line of two or more `=`. Inside a record,
//! lines are trimmed and blank lines are ignored. Every line before the first
//! section header is a URL pattern. A section header is a line made of
//! upper-case letters and spaces; its body is every following line up to the
//! next header. `NO COMMON` takes no body.

use tracing::{debug, warn};

use crate::error::{CatalogueError, Result};
use crate::property::{header_to_camel, is_section_header, Property, NO_COMMON};
use crate::record::{Catalogue, ThemeRecord};

/// Parses catalogue text.
///
/// # Errors
///
/// - [`CatalogueError::MissingCommon`] if the first record is not the common
///   record (primary pattern `*`) or there are no records.
/// - [`CatalogueError::MissingUrl`] if a record has a section header before
///   any URL pattern.
pub fn parse_catalogue(text: &str) -> Result<Catalogue> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut records = Vec::new();
    for block in split_blocks(&text) {
        if block.is_empty() {
            continue;
        }
        let record = parse_record(&block, records.len())?;
        records.push(record);
    }

    debug!(records = records.len(), "parsed catalogue");
    Catalogue::from_records(records)
}

fn is_separator(line: &str) -> bool {
    line.len() >= 2 && line.bytes().all(|b| b == b'=')
}

/// Splits text into blocks of trimmed, non-blank lines.
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = vec![Vec::new()];
    for line in text.lines().map(str::trim) {
        if is_separator(line) {
            blocks.push(Vec::new());
        } else if !line.is_empty() {
            if let Some(block) = blocks.last_mut() {
                block.push(line);
            }
        }
    }
    blocks
}

/// Where body lines of the current section go.
enum Section {
    Known(Property),
    NoCommon,
    Extra(usize),
}

fn parse_record(lines: &[&str], index: usize) -> Result<ThemeRecord> {
    let first_header = lines
        .iter()
        .position(|line| is_section_header(line))
        .unwrap_or(lines.len());
    if first_header == 0 {
        return Err(CatalogueError::MissingUrl { record: index });
    }

    let mut record = ThemeRecord::new(lines[..first_header].iter().copied());
    let mut section = Section::NoCommon;

    for &line in &lines[first_header..] {
        if is_section_header(line) {
            let name = header_to_camel(line);
            section = if name == NO_COMMON {
                record.no_common = true;
                Section::NoCommon
            } else if let Some(property) = Property::from_name(&name) {
                record.set(property, Vec::new());
                Section::Known(property)
            } else {
                warn!(record = index, section = %name, "unknown section kept as extra");
                Section::Extra(record.set_extra(name, Vec::new()))
            };
            continue;
        }

        match section {
            Section::Known(property) => record.selectors_mut(property).push(line.to_string()),
            Section::Extra(slot) => record.extra_mut(slot).push(line.to_string()),
            Section::NoCommon => {
                warn!(record = index, line, "ignoring body line under NO COMMON");
            }
        }
    }

    Ok(record)
}
