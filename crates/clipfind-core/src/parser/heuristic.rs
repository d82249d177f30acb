use regex::Regex;

use crate::error::{FinderError, Result};
use crate::types::{EpisodeSpec, ParsedName};

/// Release file name parser built on regex patterns and scene naming rules.
///
/// Recognizes the common fansub layouts (`[Group] Title - 01 (1080p).mkv`),
/// dot-separated scene names (`Title.S01E05.1080p.WEB.x264.mkv`) and batch
/// ranges. Anything it cannot place ends up outside the title.
pub struct HeuristicParser {
    re_resolution: Regex,
    re_release_info: Regex,
    re_crc32: Regex,
    re_season_episode: Regex,
    re_dash_episode: Regex,
    re_episode_range: Regex,
    re_episode_version: Regex,
    re_episode: Regex,
    re_season: Regex,
    re_version: Regex,
    re_year: Regex,
    re_extension: Regex,
    re_group: Regex,
    re_brackets: Regex,
}

impl HeuristicParser {
    /// Constructs a new `HeuristicParser` with pre-compiled regex patterns.
    ///
    /// # Errors
    ///
    /// Returns `FinderError::RegexError` if any pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_resolution: Regex::new(
                r"(?i)\b((?:2160|1080|720|576|480)[pi]|\d{3,4}x\d{3,4})\b",
            )?,
            re_release_info: Regex::new(
                r"(?i)\b(x\.?26[45]|h\.?26[45]|hevc|av1|vp9|mpeg4|xvid|flac|aac|opus|ac3|dts(?:-?hd)?|truehd|mp3|vorbis|e-?aac\+?|blu-?ray(?:\s*remux)?|bd-?remux|bdrip|web-?dl|web-?rip|hdtv|dvd(?:rip)?|vhs)\b",
            )?,
            re_crc32: Regex::new(r"\[([0-9A-Fa-f]{8})\]")?,
            re_season_episode: Regex::new(r"(?i)\bS(\d{1,2})E(\d{1,4})(?:v(\d))?\b")?,
            re_dash_episode: Regex::new(
                r"(?i)\s-\s+(?:ep?\.?\s*)?(\d{1,4})(?:[-~](\d{1,4})|v(\d))?\b",
            )?,
            re_episode_range: Regex::new(
                r"(?i)(?:[\s\-_\.]|(?:^|[\s\-_\.\[\(])ep?\.?\s*)(\d{1,4})[-~](\d{1,4})\b",
            )?,
            re_episode_version: Regex::new(
                r"(?i)(?:[\s\-_\.]|(?:^|[\s\-_\.\[\(])ep?\.?\s*)(\d{1,4})v(\d)\b",
            )?,
            re_episode: Regex::new(
                r"(?i)(?:[\s\-_\.]|(?:^|[\s\-_\.\[\(])(?:ep?\.?|episode)\s*)(\d{1,4})(?:\b|[^0-9v\-~])",
            )?,
            re_season: Regex::new(r"(?i)(?:\bS|season\s*)(\d{1,2})\b")?,
            re_version: Regex::new(r"(?i)\[v(\d)\]|\bv(\d)\b")?,
            re_year: Regex::new(r"\b((?:19|20)\d{2})\b")?,
            re_extension: Regex::new(r"\.(\w{2,4})$")?,
            re_group: Regex::new(r"^\[([^\]]+)\]")?,
            re_brackets: Regex::new(r"\[[^\]]*\]|\([^\)]*\)")?,
        })
    }

    /// Parses a release file name into a [`ParsedName`].
    ///
    /// # Errors
    ///
    /// Returns `FinderError::EmptyInput` if the input is empty or whitespace-only.
    pub fn parse(&self, input: &str) -> Result<ParsedName> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(FinderError::EmptyInput);
        }

        // The record keeps the name exactly as it sits on disk.
        let mut name = ParsedName::new(input);

        // Order matters for disambiguation
        name.release_group = self.extract_group(trimmed);
        name.file_extension = self.extract_extension(trimmed);
        name.file_checksum = self.extract_crc32(trimmed);
        name.video_resolution = self.extract_resolution(trimmed);
        name.anime_season = self.extract_season(trimmed);
        name.anime_year = self.extract_year(trimmed);
        name.episode = self.extract_episode(trimmed);
        name.release_version = self.extract_version(trimmed, &name.episode);

        name.anime_title = self.extract_title(trimmed, &name);

        Ok(name)
    }

    fn extract_group(&self, input: &str) -> Option<String> {
        self.re_group
            .captures(input)
            .map(|c| c[1].trim().to_string())
    }

    fn extract_extension(&self, input: &str) -> Option<String> {
        self.re_extension
            .captures(input)
            .map(|c| c[1].to_lowercase())
    }

    fn extract_crc32(&self, input: &str) -> Option<String> {
        self.re_crc32
            .captures(input)
            .map(|c| c[1].to_uppercase())
    }

    fn extract_resolution(&self, input: &str) -> Option<String> {
        self.re_resolution
            .captures(input)
            .map(|c| c[1].to_lowercase())
    }

    fn extract_season(&self, input: &str) -> Option<u32> {
        if let Some(caps) = self.re_season_episode.captures(input) {
            return caps[1].parse().ok();
        }
        self.re_season
            .captures(input)
            .and_then(|c| c[1].parse().ok())
    }

    fn extract_year(&self, input: &str) -> Option<u16> {
        self.re_year.captures(input).and_then(|c| {
            let year: u16 = c[1].parse().ok()?;
            (1980..=2030).contains(&year).then_some(year)
        })
    }

    fn extract_episode(&self, input: &str) -> Option<EpisodeSpec> {
        // Scene style: "S01E05", "S01E05v2"
        if let Some(caps) = self.re_season_episode.captures(input) {
            let episode: u32 = caps[2].parse().ok()?;
            return match caps.get(3).and_then(|m| m.as_str().parse().ok()) {
                Some(version) => Some(EpisodeSpec::Version { episode, version }),
                None => Some(EpisodeSpec::Single(episode)),
            };
        }

        // Fansub style: the last " - 05", " - 05v2" or " - 01-12" block.
        // Numbers before it belong to the title or the season.
        if let Some(caps) = self.re_dash_episode.captures_iter(input).last() {
            let episode: u32 = caps[1].parse().ok()?;
            if let Some(end) = caps.get(2).and_then(|m| m.as_str().parse::<u32>().ok()) {
                if episode < end {
                    return Some(EpisodeSpec::Range(episode, end));
                }
            }
            return match caps.get(3).and_then(|m| m.as_str().parse().ok()) {
                Some(version) => Some(EpisodeSpec::Version { episode, version }),
                None => Some(EpisodeSpec::Single(episode)),
            };
        }

        // Batch: "01-12"
        if let Some(caps) = self.re_episode_range.captures(input) {
            let start: u32 = caps[1].parse().ok()?;
            let end: u32 = caps[2].parse().ok()?;
            if start < end {
                return Some(EpisodeSpec::Range(start, end));
            }
        }

        // Versioned: "12v2"
        if let Some(caps) = self.re_episode_version.captures(input) {
            let episode: u32 = caps[1].parse().ok()?;
            let version: u8 = caps[2].parse().ok()?;
            return Some(EpisodeSpec::Version { episode, version });
        }

        if let Some(caps) = self.re_episode.captures(input) {
            let ep: u32 = caps[1].parse().ok()?;
            return Some(EpisodeSpec::Single(ep));
        }

        None
    }

    fn extract_version(&self, input: &str, episode: &Option<EpisodeSpec>) -> Option<u8> {
        if let Some(EpisodeSpec::Version { version, .. }) = episode {
            return Some(*version);
        }

        self.re_version.captures(input).and_then(|c| {
            c.get(1)
                .or_else(|| c.get(2))
                .and_then(|m| m.as_str().parse().ok())
        })
    }

    /// Extracts the title: the text between the group tag (if any) and
    /// the first metadata token.
    fn extract_title(&self, input: &str, name: &ParsedName) -> Option<String> {
        let mut work = input.to_string();

        if name.release_group.is_some() {
            if let Some(end) = work.find(']') {
                work = work[end + 1..].to_string();
            }
        }

        if let Some(ref ext) = name.file_extension {
            if let Some(pos) = work.rfind(&format!(".{ext}")) {
                work.truncate(pos);
            }
        }

        // Everything after a " - 05" block is episode metadata; bare numbers
        // before it stay in the title ("Mob Psycho 100", "Steins;Gate 0").
        let dash_cut = self.re_dash_episode.find_iter(&work).last().map(|m| m.start());
        if let Some(pos) = dash_cut {
            work.truncate(pos);
        }

        // Metadata tokens become a NUL sentinel; the title is whatever
        // precedes the first one.
        let mut patterns_to_strip = vec![
            &self.re_season_episode,
            &self.re_resolution,
            &self.re_release_info,
            &self.re_crc32,
            &self.re_season,
            &self.re_version,
        ];
        if dash_cut.is_none() {
            patterns_to_strip.extend([
                &self.re_episode_range,
                &self.re_episode_version,
                &self.re_episode,
            ]);
        }
        for pattern in patterns_to_strip {
            work = pattern.replace_all(&work, "\x00").into_owned();
        }

        if let Some(year) = name.anime_year {
            work = work.replace(&format!("({year})"), "\x00");
            work = work.replace(&format!("[{year}]"), "\x00");
        }

        // Leftover tags such as [Multiple Subtitle]
        work = self.re_brackets.replace_all(&work, " ").into_owned();

        let title_region = work.split('\x00').next().unwrap_or("");

        let cleaned = title_region
            .replace(['.', '_'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .trim_matches(|c: char| c == '-' || c == ' ')
            .to_string();

        (!cleaned.is_empty()).then_some(cleaned)
    }
}
