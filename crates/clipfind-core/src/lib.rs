//! # Clipfind Core
//!
//! Finds an anime episode on disk from its release file name and builds the
//! ffmpeg command that copies a short clip out of it.
//!
//! ## Quick Start
//!
//! ```rust
//! use clipfind_core::parser::HeuristicParser;
//!
//! let parser = HeuristicParser::new().unwrap();
//! let name = parser.parse("[SubsPlease] Jujutsu Kaisen - 24 (1080p) [A1B2C3D4].mkv").unwrap();
//!
//! assert_eq!(name.anime_title.as_deref(), Some("Jujutsu Kaisen"));
//! assert_eq!(name.episode_number().as_deref(), Some("24"));
//! ```
pub mod command;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod scan;
pub mod select;
pub mod types;

// Re-export primary API
pub use command::{ffmpeg_command, output_name, ClipConfig, ClipRequest};
pub use error::{FinderError, Result};
pub use matcher::{matches, Query};
pub use parser::HeuristicParser;
pub use scan::scan;
pub use select::{choose, write_listing};
pub use types::{EpisodeSpec, FoundFile, ParsedName};
