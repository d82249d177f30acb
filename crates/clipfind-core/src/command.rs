//! # ffmpeg Clip Command
//!
//! Builds the stream-copy invocation that cuts a short clip out of an episode.

use std::fmt;

use crate::types::FoundFile;

/// Where the clip starts, as given on the command line.
///
/// Values are passed through as-is: `75` seconds is written as `75`, not
/// carried into the minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipRequest {
    pub minutes: u32,
    pub seconds: u32,
}

impl ClipRequest {
    pub fn new(minutes: u32, seconds: u32) -> Self {
        Self { minutes, seconds }
    }
}

impl fmt::Display for ClipRequest {
    /// Seek position in `00:MM:SS.0` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "00:{:02}:{:02}.0", self.minutes, self.seconds)
    }
}

/// Settings for the generated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipConfig {
    /// Clip length in seconds.
    pub duration_secs: u32,
    /// Take number, written as the two-digit suffix of the output name.
    pub take: u32,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            duration_secs: 10,
            take: 1,
        }
    }
}

impl ClipConfig {
    /// Create a configuration with the default 10 second clip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the clip length. Zero is raised to one second.
    pub fn with_duration(mut self, secs: u32) -> Self {
        self.duration_secs = secs.max(1);
        self
    }

    /// Set the take number. Zero is raised to one.
    pub fn with_take(mut self, take: u32) -> Self {
        self.take = take.max(1);
        self
    }

    /// Clip length in `HH:MM:SS.0` form.
    fn duration(&self) -> String {
        let secs = self.duration_secs;
        format!("{:02}:{:02}:{:02}.0", secs / 3600, secs / 60 % 60, secs % 60)
    }
}

/// Name of the clip file, e.g. `Show-ep5-01.mkv`.
#[must_use]
pub fn output_name(file: &FoundFile, config: &ClipConfig) -> String {
    format!(
        "{}-ep{}-{:02}.mkv",
        file.title(),
        file.name.episode_number().unwrap_or_default(),
        config.take
    )
}

/// Builds the ffmpeg command copying a clip of `file` starting at `request`.
///
/// # Examples
///
/// ```
/// use clipfind_core::{ClipConfig, ClipRequest, FoundFile, HeuristicParser};
///
/// let parser = HeuristicParser::new().unwrap();
/// let name = parser.parse("Show.S01E05.mkv").unwrap();
/// let file = FoundFile::new("/media", name).unwrap();
///
/// let cmd = clipfind_core::ffmpeg_command(&file, &ClipRequest::new(1, 5), &ClipConfig::default());
/// assert_eq!(
///     cmd,
///     r#"ffmpeg -i "/media/Show.S01E05.mkv" -c copy -an -sn -t 00:00:10.0 -ss 00:01:05.0 "Show-ep5-01.mkv""#
/// );
/// ```
#[must_use]
pub fn ffmpeg_command(file: &FoundFile, request: &ClipRequest, config: &ClipConfig) -> String {
    format!(
        r#"ffmpeg -i "{}/{}" -c copy -an -sn -t {} -ss {} "{}""#,
        file.dir().display(),
        file.file_name(),
        config.duration(),
        request,
        output_name(file, config)
    )
}
