use crate::conf::ResolvedConfig;
use crate::decode::{DecodeError, LinePattern, LogRecordReader, ParseQuality};
use crate::report::{ReportRow, create_report, write_report};
use crate::selection::{DatedFile, RunPlan, plan_run};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    NoLogs,
    UpToDate {
        log: DatedFile,
        report: DatedFile,
    },
    Generated {
        log: DatedFile,
        report: PathBuf,
        rows: usize,
        quality: ParseQuality,
    },
}

/// One analyzer run: pick the newest log, aggregate it, write its report.
pub fn run(cfg: &ResolvedConfig) -> Result<RunOutcome> {
    let plan = plan_run(&cfg.selection).context("failed to select log file")?;

    match plan {
        RunPlan::NoLogs => {
            tracing::info!(
                log_dir = %cfg.selection.log_dir.display(),
                "no log files found, nothing to do"
            );
            Ok(RunOutcome::NoLogs)
        }

        RunPlan::UpToDate { log, report } => {
            tracing::info!(
                log = %log.path.display(),
                report = %report.path.display(),
                "report is up to date, nothing to do"
            );
            Ok(RunOutcome::UpToDate { log, report })
        }

        RunPlan::Analyze { log, report_path } => {
            tracing::info!(
                log = %log.path.display(),
                report = %report_path.display(),
                "analyzing log"
            );

            let (rows, quality) =
                analyze_log(&log.path, cfg.report_size, cfg.log_parse_error_threshold)
                    .with_context(|| format!("failed to analyze {}", log.path.display()))?;

            write_report(&cfg.report_template_path, &report_path, &rows)
                .context("failed to write report")?;

            Ok(RunOutcome::Generated {
                log,
                report: report_path,
                rows: rows.len(),
                quality,
            })
        }
    }
}

/// Decode `path` and aggregate it into at most `limit` rows.
///
/// The file is released and the parse quality reported before returning,
/// whether or not decoding succeeded.
pub fn analyze_log(
    path: &Path,
    limit: usize,
    threshold: f64,
) -> Result<(Vec<ReportRow>, ParseQuality), DecodeError> {
    let mut reader = LogRecordReader::open(path, LinePattern::default(), threshold)?;
    let rows = create_report(reader.by_ref(), limit);
    let quality = reader.finish()?;
    Ok((rows, quality))
}
