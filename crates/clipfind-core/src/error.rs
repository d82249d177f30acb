use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while finding an episode and building its clip command.
#[derive(Debug, Error)]
pub enum FinderError {
    /// The input string is empty or contains only whitespace.
    #[error("input is empty or whitespace-only")]
    EmptyInput,

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// The directory walk could not continue.
    #[error("failed to scan {root}: {source}")]
    Walk {
        /// Root directory of the scan.
        root: PathBuf,
        /// Underlying walk error.
        #[source]
        source: walkdir::Error,
    },

    /// No file matched the search, so there is nothing to select.
    #[error("no matching files to select from")]
    NoMatches,

    /// The interactive selection was not a number.
    #[error("invalid selection {input:?}: expected a file index")]
    InvalidSelection {
        /// The line the user entered (trimmed).
        input: String,
    },

    /// The interactive selection does not name a listed file.
    #[error("selection {index} is out of range (found {count} files)")]
    SelectionOutOfRange {
        /// The index the user entered.
        index: i64,
        /// Number of listed files.
        count: usize,
    },

    /// Reading the selection from the terminal failed.
    #[error("failed to read selection: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for episode finder operations.
pub type Result<T> = std::result::Result<T, FinderError>;
