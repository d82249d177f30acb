use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::episode::EpisodeSpec;

/// Metadata extracted from a single release file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedName {
    /// The file name that was parsed.
    pub file_name: String,

    /// Extracted anime title.
    pub anime_title: Option<String>,

    /// Episode specification.
    pub episode: Option<EpisodeSpec>,

    /// Release group name (e.g., "SubsPlease", "Erai-raws").
    pub release_group: Option<String>,

    /// Season number.
    pub anime_season: Option<u32>,

    /// Release year.
    pub anime_year: Option<u16>,

    /// Video resolution as written in the name (e.g., "1080p").
    pub video_resolution: Option<String>,

    /// Release version (e.g., v2 = 2).
    pub release_version: Option<u8>,

    /// CRC32 checksum (uppercase hex string).
    pub file_checksum: Option<String>,

    /// File extension (without leading dot).
    pub file_extension: Option<String>,
}

impl ParsedName {
    /// Creates an empty record for the given file name.
    #[must_use]
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            anime_title: None,
            episode: None,
            release_group: None,
            anime_season: None,
            anime_year: None,
            video_resolution: None,
            release_version: None,
            file_checksum: None,
            file_extension: None,
        }
    }

    /// Returns `true` if a non-empty title was extracted.
    #[must_use]
    pub fn has_title(&self) -> bool {
        self.anime_title.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// The episode number as text, e.g. `"5"` or `"1-2"` for a batch.
    #[must_use]
    pub fn episode_number(&self) -> Option<String> {
        self.episode.as_ref().map(EpisodeSpec::number_text)
    }
}

impl fmt::Display for ParsedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParsedName({:?}", self.file_name)?;
        if let Some(ref title) = self.anime_title {
            write!(f, ", title={title:?}")?;
        }
        if let Some(ref ep) = self.episode {
            write!(f, ", ep={ep}")?;
        }
        if let Some(ref group) = self.release_group {
            write!(f, ", group={group:?}")?;
        }
        write!(f, ")")
    }
}

/// A titled file discovered during a directory scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundFile {
    /// Directory containing the file.
    pub dir: PathBuf,

    /// Metadata parsed from the file name.
    pub name: ParsedName,
}

impl FoundFile {
    /// Wraps a parsed name, keeping it only if it carries a title.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, name: ParsedName) -> Option<Self> {
        name.has_title().then(|| Self {
            dir: dir.into(),
            name,
        })
    }

    /// The title; always present for a `FoundFile`.
    #[must_use]
    pub fn title(&self) -> &str {
        self.name.anime_title.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.name.file_name
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.name.file_name)
    }
}
