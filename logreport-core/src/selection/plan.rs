use crate::selection::{DatedFile, FilenamePattern, SelectionError, discover_dated, latest, newest};
use std::path::PathBuf;

/// Where to look for logs and reports, and how to name a new report.
#[derive(Debug, Clone)]
pub struct SelectionConfig {
    pub log_dir: PathBuf,
    pub log_pattern: FilenamePattern,
    pub report_dir: PathBuf,
    pub report_pattern: FilenamePattern,
    /// File name with a `{}` placeholder for the formatted date.
    pub report_filename_root: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunPlan {
    /// No rotated log in the log directory.
    NoLogs,
    /// A report at least as new as the newest log already exists.
    UpToDate { log: DatedFile, report: DatedFile },
    /// `log` needs a report at `report_path`.
    Analyze { log: DatedFile, report_path: PathBuf },
}

/// Decide what this run has to do.
///
/// # Errors
///
/// Fails when the log directory cannot be listed. A missing report directory
/// only means no report has been produced yet.
pub fn plan_run(cfg: &SelectionConfig) -> Result<RunPlan, SelectionError> {
    let Some(log) = newest(discover_dated(&cfg.log_dir, &cfg.log_pattern)?) else {
        return Ok(RunPlan::NoLogs);
    };

    if let Some(report) = latest(&cfg.report_dir, &cfg.report_pattern)? {
        if report.date >= log.date {
            return Ok(RunPlan::UpToDate { log, report });
        }
    }

    let report_path = cfg.report_dir.join(report_file_name(
        &cfg.report_filename_root,
        &cfg.report_pattern,
        &log,
    ));

    Ok(RunPlan::Analyze { log, report_path })
}

/// `report-{}.html` + 2017-07-01 -> `report-2017.07.01.html`
pub fn report_file_name(root: &str, report_pattern: &FilenamePattern, log: &DatedFile) -> String {
    let date = log.date.format(report_pattern.date_format()).to_string();
    root.replacen("{}", &date, 1)
}
