use std::fmt;

use serde::{Deserialize, Serialize};

/// Episode specification supporting the numbering schemes
/// found in anime release file names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpisodeSpec {
    /// Single episode: "01", "12", "1084"
    Single(u32),

    /// Episode range: "01-12", "01~12"
    Range(u32, u32),

    /// Multiple discrete episodes: "01, 03, 05"
    Multi(Vec<u32>),

    /// Versioned episode: "12v2"
    Version {
        /// The episode number.
        episode: u32,
        /// The version number (e.g., v2 = 2).
        version: u8,
    },
}

impl EpisodeSpec {
    /// The episode number as plain text, without padding.
    ///
    /// Only a single episode (versioned or not) is purely numeric;
    /// ranges and lists keep their separators so they never compare
    /// equal to a lone episode number.
    #[must_use]
    pub fn number_text(&self) -> String {
        match self {
            Self::Single(ep) | Self::Version { episode: ep, .. } => ep.to_string(),
            Self::Range(start, end) => format!("{start}-{end}"),
            Self::Multi(eps) => eps
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl fmt::Display for EpisodeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(ep) => write!(f, "{ep:02}"),
            Self::Range(start, end) => write!(f, "{start:02}-{end:02}"),
            Self::Multi(eps) => {
                let formatted: Vec<String> = eps.iter().map(|e| format!("{e:02}")).collect();
                write!(f, "{}", formatted.join(", "))
            }
            Self::Version { episode, version } => write!(f, "{episode:02}v{version}"),
        }
    }
}
