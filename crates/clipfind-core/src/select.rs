//! Match listing and interactive selection.

use std::io::{BufRead, Write};

use crate::error::{FinderError, Result};
use crate::types::FoundFile;

/// Writes the numbered list of matches.
///
/// The header is written even when there are no matches. With `full_path`
/// each line shows the containing directory as well.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_listing<W: Write>(out: &mut W, matches: &[&FoundFile], full_path: bool) -> Result<()> {
    writeln!(out, "Found following files:")?;
    for (id, file) in matches.iter().enumerate() {
        if full_path {
            writeln!(out, "{id}:\t{}/{}", file.dir().display(), file.file_name())?;
        } else {
            writeln!(out, "{id}:\t{}", file.file_name())?;
        }
    }
    Ok(())
}

/// Picks the index of the file to use among `count` listed matches.
///
/// A single match is taken without asking. With several, a prompt is written
/// to `out` and one line is read from `input`.
///
/// # Errors
///
/// - `FinderError::NoMatches` when `count` is zero.
/// - `FinderError::InvalidSelection` when the line is not an integer.
/// - `FinderError::SelectionOutOfRange` when the integer names no listed file.
pub fn choose<R: BufRead, W: Write>(count: usize, input: &mut R, out: &mut W) -> Result<usize> {
    match count {
        0 => Err(FinderError::NoMatches),
        1 => Ok(0),
        _ => {
            writeln!(out, "\nPick a file:")?;
            out.flush()?;

            let mut line = String::new();
            input.read_line(&mut line)?;
            let line = line.trim();

            let index: i64 = line.parse().map_err(|_| FinderError::InvalidSelection {
                input: line.to_string(),
            })?;
            usize::try_from(index)
                .ok()
                .filter(|&i| i < count)
                .ok_or(FinderError::SelectionOutOfRange { index, count })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParsedName;
    use std::io::Cursor;

    fn found(dir: &str, file_name: &str) -> FoundFile {
        let mut name = ParsedName::new(file_name);
        name.anime_title = Some("Show".into());
        FoundFile::new(dir, name).unwrap()
    }

    fn listing(matches: &[&FoundFile], full_path: bool) -> String {
        let mut out = Vec::new();
        write_listing(&mut out, matches, full_path).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn listing_numbers_from_zero() {
        let a = found("/media", "Show.S01E05.mkv");
        let b = found("/media", "Show.S01E05.v2.mkv");
        assert_eq!(
            listing(&[&a, &b], false),
            "Found following files:\n0:\tShow.S01E05.mkv\n1:\tShow.S01E05.v2.mkv\n"
        );
    }

    #[test]
    fn empty_listing_prints_header_only() {
        assert_eq!(listing(&[], false), "Found following files:\n");
    }

    #[test]
    fn full_path_listing_includes_dir() {
        let a = found("/media/show", "Show.S01E05.mkv");
        assert_eq!(
            listing(&[&a], true),
            "Found following files:\n0:\t/media/show/Show.S01E05.mkv\n"
        );
    }

    #[test]
    fn zero_matches_is_an_error() {
        let mut input = Cursor::new("0\n");
        let mut out = Vec::new();
        let err = choose(0, &mut input, &mut out).unwrap_err();
        assert!(matches!(err, FinderError::NoMatches));
    }

    #[test]
    fn single_match_is_chosen_without_prompt() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        assert_eq!(choose(1, &mut input, &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn several_matches_prompt_for_index() {
        let mut input = Cursor::new(" 2 \n");
        let mut out = Vec::new();
        assert_eq!(choose(3, &mut input, &mut out).unwrap(), 2);
        assert_eq!(String::from_utf8(out).unwrap(), "\nPick a file:\n");
    }

    #[test]
    fn non_numeric_selection_is_rejected() {
        let mut input = Cursor::new("first\n");
        let mut out = Vec::new();
        let err = choose(2, &mut input, &mut out).unwrap_err();
        assert!(matches!(err, FinderError::InvalidSelection { ref input } if input == "first"));
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        for line in ["2\n", "-1\n"] {
            let mut input = Cursor::new(line);
            let mut out = Vec::new();
            let err = choose(2, &mut input, &mut out).unwrap_err();
            assert!(matches!(err, FinderError::SelectionOutOfRange { count: 2, .. }));
        }
    }

    #[test]
    fn end_of_input_is_rejected() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        let err = choose(2, &mut input, &mut out).unwrap_err();
        assert!(matches!(err, FinderError::InvalidSelection { .. }));
    }
}
