use crate::conf::{AnalyzerConfig, ConfigError, ResolvedConfig};
use crate::selection::{FILE_DATE_GROUP, FilenamePattern, SelectionConfig};
use chrono::NaiveDate;
use regex::Regex;
use std::path::{Path, PathBuf};

const DATE_PLACEHOLDER: &str = "${date}";

impl AnalyzerConfig {
    /// Resolve against today's local date.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        self.resolve_at(chrono::Local::now().date_naive())
    }

    pub fn resolve_at(&self, today: NaiveDate) -> Result<ResolvedConfig, ConfigError> {
        let threshold = self.log_parse_error_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold { value: threshold });
        }

        if !self.report_filename_root.contains("{}") {
            return Err(ConfigError::InvalidFilenameRoot {
                root: self.report_filename_root.clone(),
            });
        }

        let log_pattern = FilenamePattern::new(
            compile_filename_regex("log_filename_template", &self.log_filename_template)?,
            &self.log_filedate_format,
        );
        let report_pattern = FilenamePattern::new(
            compile_filename_regex("report_filename_template", &self.report_filename_template)?,
            &self.report_filedate_format,
        );

        let internal_log_path = self
            .internal_log_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| {
                let date = today.format("%Y-%m-%d").to_string();
                absolute(Path::new(&p.replace(DATE_PLACEHOLDER, &date)))
            })
            .transpose()?;

        Ok(ResolvedConfig {
            report_size: self.report_size,
            report_template_path: absolute(&self.report_template_path)?,
            selection: SelectionConfig {
                log_dir: absolute(&self.log_dir)?,
                log_pattern,
                report_dir: absolute(&self.report_dir)?,
                report_pattern,
                report_filename_root: self.report_filename_root.clone(),
            },
            log_parse_error_threshold: threshold,
            internal_log_path,
            internal_log_json: self.internal_log_json,
        })
    }
}

fn compile_filename_regex(field: &'static str, expr: &str) -> Result<Regex, ConfigError> {
    let regex = Regex::new(expr).map_err(|source| ConfigError::InvalidPattern { field, source })?;

    if !regex.capture_names().flatten().any(|n| n == FILE_DATE_GROUP) {
        return Err(ConfigError::MissingDateGroup { field });
    }

    Ok(regex)
}

fn absolute(path: &Path) -> Result<PathBuf, ConfigError> {
    std::path::absolute(path).map_err(|source| ConfigError::ResolvePath {
        path: path.to_path_buf(),
        source,
    })
}
