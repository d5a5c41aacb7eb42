use crate::selection::{
    DEFAULT_LOG_FILEDATE_FORMAT, DEFAULT_LOG_FILENAME_TEMPLATE, DEFAULT_REPORT_FILEDATE_FORMAT,
    DEFAULT_REPORT_FILENAME_ROOT, DEFAULT_REPORT_FILENAME_TEMPLATE, FilenamePattern, RunPlan,
    SelectionConfig, SelectionError, plan_run,
};
use chrono::NaiveDate;
use regex::Regex;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

struct Dirs {
    _root: TempDir,
    cfg: SelectionConfig,
}

fn dirs() -> Dirs {
    let root = tempdir().unwrap();
    let log_dir = root.path().join("logs");
    let report_dir = root.path().join("reports");
    fs::create_dir(&log_dir).unwrap();

    let cfg = SelectionConfig {
        log_dir,
        log_pattern: FilenamePattern::new(
            Regex::new(DEFAULT_LOG_FILENAME_TEMPLATE).unwrap(),
            DEFAULT_LOG_FILEDATE_FORMAT,
        ),
        report_dir,
        report_pattern: FilenamePattern::new(
            Regex::new(DEFAULT_REPORT_FILENAME_TEMPLATE).unwrap(),
            DEFAULT_REPORT_FILEDATE_FORMAT,
        ),
        report_filename_root: DEFAULT_REPORT_FILENAME_ROOT.to_string(),
    };

    Dirs { _root: root, cfg }
}

fn touch(dir: &Path, names: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for name in names {
        fs::write(dir.join(name), "").unwrap();
    }
}

#[test]
fn analyze_newest_log_when_no_reports_exist() {
    // Arrange
    let d = dirs();
    touch(
        &d.cfg.log_dir,
        &["nginx-access-ui.log-20170630.log", "nginx-access-ui.log-20170701.log"],
    );

    // Act
    let plan = plan_run(&d.cfg).unwrap();

    // Assert
    match plan {
        RunPlan::Analyze { log, report_path } => {
            assert_eq!(log.path, d.cfg.log_dir.join("nginx-access-ui.log-20170701.log"));
            assert_eq!(log.date, NaiveDate::from_ymd_opt(2017, 7, 1).unwrap());
            assert_eq!(report_path, d.cfg.report_dir.join("report-2017.07.01.html"));
        }
        other => panic!("unexpected plan: {other:?}"),
    }
}

#[test]
fn analyze_when_reports_are_older() {
    let d = dirs();
    touch(&d.cfg.log_dir, &["nginx-access-ui.log-20170701.log"]);
    touch(
        &d.cfg.report_dir,
        &["report-2017.06.01.html", "report-2017.06.03.html"],
    );

    let plan = plan_run(&d.cfg).unwrap();

    assert!(matches!(plan, RunPlan::Analyze { .. }));
}

#[test]
fn up_to_date_when_report_is_newer() {
    let d = dirs();
    touch(&d.cfg.log_dir, &["nginx-access-ui.log-20170701.log"]);
    touch(
        &d.cfg.report_dir,
        &["report-2017.06.01.html", "report-2017.07.02.html"],
    );

    let plan = plan_run(&d.cfg).unwrap();

    match plan {
        RunPlan::UpToDate { report, .. } => {
            assert_eq!(report.path, d.cfg.report_dir.join("report-2017.07.02.html"));
        }
        other => panic!("unexpected plan: {other:?}"),
    }
}

#[test]
fn up_to_date_when_report_for_same_day_exists() {
    let d = dirs();
    touch(&d.cfg.log_dir, &["nginx-access-ui.log-20170701.gz"]);
    touch(&d.cfg.report_dir, &["report-2017.07.01.html"]);

    assert!(matches!(plan_run(&d.cfg).unwrap(), RunPlan::UpToDate { .. }));
}

#[test]
fn no_logs_when_log_dir_has_no_matches() {
    let d = dirs();
    touch(&d.cfg.log_dir, &["nginx-access-ui.log-201806.log", "readme.txt"]);

    assert_eq!(plan_run(&d.cfg).unwrap(), RunPlan::NoLogs);
}

#[test]
fn missing_log_dir_is_an_error() {
    let mut d = dirs();
    d.cfg.log_dir = d.cfg.log_dir.join("missing");

    assert!(matches!(
        plan_run(&d.cfg).unwrap_err(),
        SelectionError::ReadDir { .. }
    ));
}
