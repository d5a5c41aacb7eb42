use crate::selection::{FilenameMatch, FilenamePattern, SelectionError};
use chrono::NaiveDate;
use glob::{Pattern, glob};
use std::fs;
use std::path::{Path, PathBuf};

/// A file whose name carries a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedFile {
    pub path: PathBuf,
    pub date: NaiveDate,
}

/// Lists the regular files directly inside `dir` whose names match `pattern`.
///
/// Files that match the pattern but carry an impossible date (e.g. `20170632`)
/// are logged and skipped. The result is sorted by path.
///
/// # Errors
///
/// Returns `SelectionError::ReadDir` if `dir` does not exist or is not a directory.
pub fn discover_dated(
    dir: &Path,
    pattern: &FilenamePattern,
) -> Result<Vec<DatedFile>, SelectionError> {
    let meta = fs::metadata(dir).map_err(|source| SelectionError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(SelectionError::ReadDir {
            path: dir.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    let glob_pattern = resolve_glob(dir);
    let mut paths: Vec<PathBuf> = glob(&glob_pattern)
        .map_err(|source| SelectionError::Glob {
            pattern: glob_pattern.clone(),
            source,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    let mut dated = Vec::new();
    for path in paths {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        match pattern.match_name(name) {
            FilenameMatch::Dated(date) => dated.push(DatedFile { path, date }),
            FilenameMatch::BadDate(raw) => {
                tracing::error!(file = %path.display(), date = %raw, "file date parsing error");
            }
            FilenameMatch::Unrelated => {}
        }
    }

    Ok(dated)
}

/// Newest file in `dir` by the calendar date in its name.
///
/// A missing directory is treated as empty.
pub fn latest(dir: &Path, pattern: &FilenamePattern) -> Result<Option<DatedFile>, SelectionError> {
    match discover_dated(dir, pattern) {
        Ok(files) => Ok(newest(files)),
        Err(SelectionError::ReadDir { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

pub(crate) fn newest(files: Vec<DatedFile>) -> Option<DatedFile> {
    // Keep the first of equal dates (paths are sorted).
    files.into_iter().fold(None, |best, file| match best {
        Some(b) if b.date >= file.date => Some(b),
        _ => Some(file),
    })
}

/// Glob matching every entry directly inside `dir`, with `dir` itself escaped.
pub fn resolve_glob(dir: &Path) -> String {
    let escaped = Pattern::escape(&dir.to_string_lossy());
    Path::new(&escaped).join("*").to_string_lossy().into_owned()
}
