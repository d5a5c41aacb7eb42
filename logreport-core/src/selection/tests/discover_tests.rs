use crate::selection::{
    DEFAULT_LOG_FILEDATE_FORMAT, DEFAULT_LOG_FILENAME_TEMPLATE, DatedFile, FilenameMatch,
    FilenamePattern, SelectionError, discover_dated, latest, resolve_glob,
};
use crate::test_support::capture;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use regex::Regex;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use tracing::Level;

fn log_pattern() -> FilenamePattern {
    FilenamePattern::new(
        Regex::new(DEFAULT_LOG_FILENAME_TEMPLATE).unwrap(),
        DEFAULT_LOG_FILEDATE_FORMAT,
    )
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), "").unwrap();
    }
}

#[test]
fn match_name_accepts_log_and_gz() {
    let p = log_pattern();

    assert_eq!(
        p.match_name("nginx-access-ui.log-20170630.log"),
        FilenameMatch::Dated(date(2017, 6, 30))
    );
    assert_eq!(
        p.match_name("nginx-access-ui.log-20230130.gz"),
        FilenameMatch::Dated(date(2023, 1, 30))
    );
}

#[test]
fn match_name_rejects_foreign_names() {
    let p = log_pattern();

    for name in [
        "nginx-access-ui.log-201730.log",
        "nginx-access-ui.log-20170701.txt",
        "nginx-access-ui.log-20170630.bz",
        "nginx-access-ui.log-20230130.logtx",
        "nginx-access-ui.log-deeffb12.gz",
        "nginx-access-ui.log",
        "apache-access-ui.log-20170625.log",
        "log-20170623.log",
        "nu pogodi.avi",
    ] {
        assert_eq!(p.match_name(name), FilenameMatch::Unrelated, "{name}");
    }
}

#[test]
fn match_name_flags_impossible_dates() {
    let p = log_pattern();

    assert_eq!(
        p.match_name("nginx-access-ui.log-20170632.log"),
        FilenameMatch::BadDate("20170632".into())
    );
    assert_eq!(
        p.match_name("nginx-access-ui.log-20171730.log"),
        FilenameMatch::BadDate("20171730".into())
    );
}

#[test]
fn discover_lists_only_matching_files() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();
    touch(
        root,
        &[
            "nginx-access-ui.log-20170630.log",
            "nginx-access-ui.log-20170701.gz",
            "nginx-access-ui.log-20170701.txt",
            "access-ui.log-20170623.log",
        ],
    );
    fs::create_dir(root.join("nginx-access-ui.log-20170801.log")).unwrap();

    // Act
    let files = discover_dated(root, &log_pattern()).unwrap();

    // Assert
    assert_eq!(
        files,
        vec![
            DatedFile {
                path: root.join("nginx-access-ui.log-20170630.log"),
                date: date(2017, 6, 30),
            },
            DatedFile {
                path: root.join("nginx-access-ui.log-20170701.gz"),
                date: date(2017, 7, 1),
            },
        ]
    );
}

#[test]
fn discover_logs_and_skips_bad_dates() {
    let dir = tempdir().unwrap();
    touch(
        dir.path(),
        &["nginx-access-ui.log-20170632.log", "nginx-access-ui.log-20170030.log"],
    );

    let (files, events) = capture(|| discover_dated(dir.path(), &log_pattern()).unwrap());

    assert!(files.is_empty());
    let errors: Vec<_> = events.iter().filter(|e| e.level == Level::ERROR).collect();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].message(), "file date parsing error");
}

#[test]
fn discover_missing_dir_is_an_error() {
    let dir = tempdir().unwrap();

    let err = discover_dated(&dir.path().join("missing"), &log_pattern()).unwrap_err();

    assert!(matches!(err, SelectionError::ReadDir { .. }));
}

#[test]
fn discover_handles_glob_metacharacters_in_dir() {
    let dir = tempdir().unwrap();
    let weird = dir.path().join("logs [prod]");
    fs::create_dir(&weird).unwrap();
    touch(&weird, &["nginx-access-ui.log-20170630.log"]);

    let files = discover_dated(&weird, &log_pattern()).unwrap();

    assert_eq!(files.len(), 1);
}

#[test]
fn latest_picks_newest_calendar_date() {
    // Arrange
    let dir = tempdir().unwrap();
    touch(
        dir.path(),
        &[
            "nginx-access-ui.log-20170122.log",
            "nginx-access-ui.log-20170701.log",
            "nginx-access-ui.log-20170630.gz",
            "nginx-access-ui.log-20170629.log",
        ],
    );

    // Act
    let newest = latest(dir.path(), &log_pattern()).unwrap().unwrap();

    // Assert
    assert_eq!(newest.path, dir.path().join("nginx-access-ui.log-20170701.log"));
    assert_eq!(newest.date, date(2017, 7, 1));
}

#[test]
fn latest_of_empty_or_missing_dir_is_none() {
    let dir = tempdir().unwrap();

    assert_eq!(latest(dir.path(), &log_pattern()).unwrap(), None);
    assert_eq!(latest(&dir.path().join("missing"), &log_pattern()).unwrap(), None);
}

#[test]
fn resolve_glob_appends_wildcard() {
    assert_eq!(resolve_glob(Path::new("/var/log/nginx")), "/var/log/nginx/*");
}

#[test]
fn resolve_glob_escapes_dir() {
    assert_eq!(resolve_glob(Path::new("/tmp/a[1]")), "/tmp/a[[]1[]]/*");
}
