//! Episode clip command tool
//!
//! Searches a directory tree for a given anime episode and copies an ffmpeg
//! command that cuts a short clip out of it to the clipboard.

mod clipboard;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clipfind_core::{
    choose, ffmpeg_command, matches, scan, write_listing, ClipConfig, ClipRequest,
    HeuristicParser, Query,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "get-ffmpeg-cmd")]
#[command(
    about = "Searches for video files with a specific anime title, and copies a ffmpeg command to copy a section of it"
)]
#[command(version)]
struct Cli {
    /// Episode number to look for
    #[arg(long)]
    ep: Option<u32>,

    /// Directory to search
    #[arg(long, env = "CLIPFIND_ROOT", default_value = ".")]
    root: PathBuf,

    /// Part of the anime title, case-insensitive
    search: String,

    /// Clip start, minutes
    minutes: u32,

    /// Clip start, seconds
    seconds: u32,

    /// List matches with their directory
    #[arg(long)]
    full_path: bool,

    /// Clip length in seconds
    #[arg(long, default_value_t = ClipConfig::default().duration_secs)]
    duration: u32,

    /// Take number, the two-digit suffix of the clip name
    #[arg(long, default_value_t = ClipConfig::default().take)]
    take: u32,

    /// Only print the command
    #[arg(long)]
    no_clipboard: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Some(served) = clipboard::serve_if_requested() {
        return served;
    }

    let cli = Cli::parse();

    let parser = HeuristicParser::new().context("Failed to create file name parser")?;
    let found = scan(&cli.root, &parser)
        .with_context(|| format!("Failed to search {}", cli.root.display()))?;

    let query = Query::new(cli.search, cli.ep);
    let hits = matches(&found, &query);
    info!(found = found.len(), matches = hits.len(), "search finished");

    let mut out = io::stdout().lock();
    write_listing(&mut out, &hits, cli.full_path)?;
    let id = choose(hits.len(), &mut io::stdin().lock(), &mut out)
        .context("Could not pick a file")?;

    let config = ClipConfig::new()
        .with_duration(cli.duration)
        .with_take(cli.take);
    let cmd = ffmpeg_command(hits[id], &ClipRequest::new(cli.minutes, cli.seconds), &config);
    writeln!(out, "{cmd}")?;

    if !cli.no_clipboard {
        clipboard::copy(&cmd)?;
        writeln!(out, "FFMPEG command copied to clipboard")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_arguments() {
        let cli = Cli::try_parse_from([
            "get-ffmpeg-cmd",
            "--ep",
            "5",
            "--root",
            "/media/anime",
            "Show",
            "1",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.ep, Some(5));
        assert_eq!(cli.root, PathBuf::from("/media/anime"));
        assert_eq!(cli.search, "Show");
        assert_eq!((cli.minutes, cli.seconds), (1, 5));
        assert_eq!(cli.duration, 10);
        assert_eq!(cli.take, 1);
        assert!(!cli.full_path);
        assert!(!cli.no_clipboard);
    }

    #[test]
    fn timestamp_is_required() {
        assert!(Cli::try_parse_from(["get-ffmpeg-cmd", "Show", "1"]).is_err());
    }

    #[test]
    fn take_sets_the_clip_suffix() {
        let cli =
            Cli::try_parse_from(["get-ffmpeg-cmd", "--take", "3", "Show", "1", "5"]).unwrap();
        assert_eq!(cli.take, 3);

        let config = ClipConfig::new().with_take(cli.take);
        assert_eq!(config.take, 3);
    }

    #[test]
    fn episode_is_optional() {
        let cli = Cli::try_parse_from(["get-ffmpeg-cmd", "--root", ".", "Show", "0", "0"]).unwrap();
        assert_eq!(cli.ep, None);
    }
}
