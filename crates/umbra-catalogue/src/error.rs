//! Error types for the catalogue crate.

use thiserror::Error;

/// Errors that can occur while parsing or assembling a catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    /// The first record is not the common record (primary pattern `*`),
    /// or the text contains no records at all.
    #[error("Common theme is missing")]
    MissingCommon,

    /// A record block starts with a section header, leaving it without
    /// any URL patterns.
    #[error("record {record} has no URL patterns before its first section")]
    MissingUrl {
        /// Zero-based index of the offending record.
        record: usize,
    },
}

/// Result type for catalogue operations.
pub type Result<T> = std::result::Result<T, CatalogueError>;
