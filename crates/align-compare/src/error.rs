use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading alignment offsets.
#[derive(Debug, Error)]
pub enum CompareError {
    /// The alignment file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not well-formed XML.
    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// An `<offset>` element lacks a coordinate attribute.
    #[error("offset #{index} has no `{attribute}` attribute")]
    MissingAttribute {
        /// Position of the element among all offsets, from 0.
        index: usize,
        /// Name of the missing attribute.
        attribute: &'static str,
    },

    /// A coordinate attribute is not a number.
    #[error("offset #{index} has non-numeric `{attribute}` value {value:?}")]
    InvalidNumber {
        /// Position of the element among all offsets, from 0.
        index: usize,
        /// Name of the attribute.
        attribute: &'static str,
        /// The attribute text.
        value: String,
    },
}

/// Result type alias for alignment comparison.
pub type Result<T> = std::result::Result<T, CompareError>;
