//! Recursive directory scan that parses every file name it meets.

use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{FinderError, Result};
use crate::parser::HeuristicParser;
use crate::types::FoundFile;

/// Walks `root` and returns every file whose name parses to a titled record.
///
/// Names the parser rejects, and names without a title, are skipped.
/// Symlinked directories are skipped rather than followed. Within each
/// directory the files come first, in file name order, then the
/// subdirectories, so a directory's own files are listed before anything
/// nested below it.
///
/// # Errors
///
/// Returns `FinderError::Walk` if the root or any directory below it cannot
/// be read.
pub fn scan(root: &Path, parser: &HeuristicParser) -> Result<Vec<FoundFile>> {
    let mut found = Vec::new();
    let mut seen = 0usize;

    let walker = WalkDir::new(root).sort_by(|a, b| {
        a.file_type()
            .is_dir()
            .cmp(&b.file_type().is_dir())
            .then_with(|| a.file_name().cmp(b.file_name()))
    });
    for entry in walker {
        let entry = entry.map_err(|source| FinderError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if entry.path().is_dir() {
            continue;
        }
        seen += 1;

        let Some(file_name) = entry.file_name().to_str() else {
            warn!(path = %entry.path().display(), "skipping file name that is not valid UTF-8");
            continue;
        };

        let parsed = match parser.parse(file_name) {
            Ok(parsed) => parsed,
            Err(err) => {
                debug!(file_name, %err, "skipping unparseable file name");
                continue;
            }
        };

        let dir = entry.path().parent().unwrap_or(root);
        match FoundFile::new(dir, parsed) {
            Some(file) => found.push(file),
            None => debug!(file_name, "no title in file name"),
        }
    }

    info!(root = %root.display(), files = seen, titled = found.len(), "scan finished");
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn parser() -> HeuristicParser {
        HeuristicParser::new().unwrap()
    }

    #[test]
    fn finds_files_in_nested_directories() {
        let temp = tempfile::tempdir().unwrap();
        let season = temp.path().join("Show").join("Season 1");
        fs::create_dir_all(&season).unwrap();
        fs::write(temp.path().join("Show.S01E05.mkv"), b"").unwrap();
        fs::write(season.join("[Group] Other Show - 03 (720p).mkv"), b"").unwrap();

        let found = scan(temp.path(), &parser()).unwrap();
        assert_eq!(found.len(), 2);

        let nested = found
            .iter()
            .find(|f| f.title() == "Other Show")
            .expect("nested file should be found");
        assert_eq!(nested.dir(), season.as_path());
        assert_eq!(nested.name.episode_number().as_deref(), Some("3"));
    }

    #[test]
    fn skips_names_without_title() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("[A1B2C3D4].mkv"), b"").unwrap();
        fs::write(temp.path().join("Show - 01.mkv"), b"").unwrap();

        let found = scan(temp.path(), &parser()).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title(), "Show");
    }

    #[test]
    fn directories_are_not_parsed() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("Show - 01")).unwrap();

        let found = scan(temp.path(), &parser()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn order_is_by_file_name() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("Show.S01E06.mkv"), b"").unwrap();
        fs::write(temp.path().join("Show.S01E05.mkv"), b"").unwrap();

        let found = scan(temp.path(), &parser()).unwrap();
        let names: Vec<_> = found.iter().map(FoundFile::file_name).collect();
        assert_eq!(names, ["Show.S01E05.mkv", "Show.S01E06.mkv"]);
    }

    #[test]
    fn files_come_before_subdirectories() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("a");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("Show - 01.mkv"), b"").unwrap();
        fs::write(temp.path().join("Show - 02.mkv"), b"").unwrap();
        fs::write(temp.path().join("b.mkv"), b"").unwrap();

        let found = scan(temp.path(), &parser()).unwrap();
        let names: Vec<_> = found.iter().map(FoundFile::file_name).collect();
        assert_eq!(names, ["Show - 02.mkv", "b.mkv", "Show - 01.mkv"]);
        assert_eq!(found[2].dir(), nested.as_path());
    }

    #[test]
    fn missing_root_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("nope");

        let err = scan(&missing, &parser()).unwrap_err();
        assert!(matches!(err, FinderError::Walk { .. }));
    }
}
