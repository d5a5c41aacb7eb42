use crate::selection::{
    DEFAULT_LOG_FILEDATE_FORMAT, DEFAULT_LOG_FILENAME_TEMPLATE, DEFAULT_REPORT_FILEDATE_FORMAT,
    DEFAULT_REPORT_FILENAME_ROOT, DEFAULT_REPORT_FILENAME_TEMPLATE, SelectionConfig,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Analyzer settings as written in a JSON config file.
///
/// Every key is optional; missing keys keep their default. Relative paths are
/// resolved against the working directory by [`AnalyzerConfig::resolve`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum number of endpoints in the report.
    pub report_size: usize,
    pub report_dir: PathBuf,
    pub report_template_path: PathBuf,
    pub report_filename_template: String,
    pub report_filename_root: String,
    pub report_filedate_format: String,

    pub log_dir: PathBuf,
    pub log_filename_template: String,
    pub log_filedate_format: String,
    pub log_parse_error_threshold: f64,

    /// Analyzer's own log file. `${date}` expands to today's `%Y-%m-%d`.
    /// `null` logs to stderr.
    pub internal_log_path: Option<String>,
    pub internal_log_json: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            report_size: 1000,
            report_dir: PathBuf::from("./data/reports"),
            report_template_path: PathBuf::from("./data/templates/report.html"),
            report_filename_template: DEFAULT_REPORT_FILENAME_TEMPLATE.to_string(),
            report_filename_root: DEFAULT_REPORT_FILENAME_ROOT.to_string(),
            report_filedate_format: DEFAULT_REPORT_FILEDATE_FORMAT.to_string(),
            log_dir: PathBuf::from("./data/logs"),
            log_filename_template: DEFAULT_LOG_FILENAME_TEMPLATE.to_string(),
            log_filedate_format: DEFAULT_LOG_FILEDATE_FORMAT.to_string(),
            log_parse_error_threshold: 0.01,
            internal_log_path: Some("./data/analyzer_logs/log_module_${date}.log".to_string()),
            internal_log_json: false,
        }
    }
}

/// Validated configuration with absolute paths and compiled patterns.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub report_size: usize,
    pub report_template_path: PathBuf,
    pub selection: SelectionConfig,
    pub log_parse_error_threshold: f64,
    pub internal_log_path: Option<PathBuf>,
    pub internal_log_json: bool,
}
