//! Title and episode filtering over scanned files.

use crate::types::FoundFile;

/// What the user is looking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Case-insensitive title substring.
    pub search: String,
    /// Episode number to match. Without one nothing matches.
    pub episode: Option<u32>,
}

impl Query {
    pub fn new(search: impl Into<String>, episode: Option<u32>) -> Self {
        Self {
            search: search.into(),
            episode,
        }
    }

    /// Returns `true` if `file` carries the searched title and exactly the
    /// requested episode.
    ///
    /// The episode number must be purely numeric: batches such as `"1-2"`
    /// are never selected, even when they contain the requested digit.
    #[must_use]
    pub fn is_match(&self, file: &FoundFile) -> bool {
        let title_hit = file
            .title()
            .to_lowercase()
            .contains(&self.search.to_lowercase());
        if !title_hit {
            return false;
        }

        let Some(wanted) = self.episode else {
            return false;
        };
        file.name
            .episode_number()
            .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|n| n.parse::<u64>().ok())
            .is_some_and(|n| n == u64::from(wanted))
    }
}

/// Keeps the files matching `query`, in scan order.
pub fn matches<'a>(found: &'a [FoundFile], query: &Query) -> Vec<&'a FoundFile> {
    found.iter().filter(|file| query.is_match(file)).collect()
}
