//! Canonical catalogue text output.

use crate::property::{camel_to_header, Property, NO_COMMON};
use crate::record::ThemeRecord;

/// The line written between records.
pub const SEPARATOR: &str = "================================";

/// Sort key for a primary URL pattern: lower-cased, keeping only ASCII
/// digits, lower-case letters and periods.
///
/// The common pattern `*` maps to the empty key and sorts first.
pub fn sort_key(pattern: &str) -> String {
    pattern
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_digit() || c.is_ascii_lowercase() || *c == '.')
        .collect()
}

/// Formats records as canonical catalogue text.
///
/// Records are ordered by [`sort_key`] of their primary pattern; ties keep
/// their input order. Properties follow the fixed [`Property`] order, and
/// empty selector lists are omitted. Sections outside the fixed set follow
/// in the order they were declared.
pub fn format_catalogue(records: &[ThemeRecord]) -> String {
    let mut sorted: Vec<&ThemeRecord> = records.iter().collect();
    sorted.sort_by_cached_key(|record| sort_key(record.primary_url()));

    let mut lines: Vec<String> = Vec::new();
    for (i, record) in sorted.into_iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
            lines.push(SEPARATOR.to_string());
            lines.push(String::new());
        }
        format_record(record, &mut lines);
    }
    lines.push(String::new());

    lines.join("\n")
}

fn format_record(record: &ThemeRecord, lines: &mut Vec<String>) {
    lines.extend(record.url.iter().cloned());

    if record.no_common {
        lines.push(String::new());
        lines.push(camel_to_header(NO_COMMON));
    }

    for property in Property::ALL {
        match record.selectors(property) {
            Some(selectors) if !selectors.is_empty() => {
                lines.push(String::new());
                lines.push(property.header());
                lines.extend(selectors.iter().cloned());
            }
            _ => {}
        }
    }

    for (name, body) in record.extras() {
        lines.push(String::new());
        lines.push(camel_to_header(name));
        lines.extend(body.iter().cloned());
    }
}
