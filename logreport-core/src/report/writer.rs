use crate::report::{ReportError, ReportRow, render_template};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Render `rows` into the template at `template_path` and publish the result
/// at `report_path`.
///
/// The report is staged in a temp file next to its destination and renamed
/// into place, so a failed run never leaves a half-written report behind.
pub fn write_report(
    template_path: &Path,
    report_path: &Path,
    rows: &[ReportRow],
) -> Result<(), ReportError> {
    let template =
        fs::read_to_string(template_path).map_err(|source| ReportError::ReadTemplate {
            path: template_path.to_path_buf(),
            source,
        })?;

    let table_json = serde_json::to_string(rows)?;
    let rendered = render_template(&template, &table_json);

    let dir = report_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(|e| ReportError::write_report(dir, e))?;

    let mut staged =
        NamedTempFile::new_in(dir).map_err(|e| ReportError::write_report(report_path, e))?;
    staged
        .write_all(rendered.as_bytes())
        .and_then(|_| staged.flush())
        .map_err(|e| ReportError::write_report(report_path, e))?;
    staged
        .persist(report_path)
        .map_err(|e| ReportError::write_report(report_path, e.error))?;

    tracing::info!(
        report = %report_path.display(),
        rows = rows.len(),
        "report written"
    );

    Ok(())
}
