use chrono::NaiveDate;
use logreport_core::conf::{AnalyzerConfig, ResolvedConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const REPORT_TEMPLATE: &str =
    "<html><script>var table = $table_json;</script><p>cost: $$5</p></html>\n";

/// Scratch analyzer layout: `logs/`, `reports/` and a report template.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp workspace");
        fs::create_dir_all(dir.path().join("logs")).expect("create logs dir");
        fs::write(dir.path().join("report.html"), REPORT_TEMPLATE).expect("write template");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn log_dir(&self) -> PathBuf {
        self.root().join("logs")
    }

    pub fn report_dir(&self) -> PathBuf {
        self.root().join("reports")
    }

    pub fn template_path(&self) -> PathBuf {
        self.root().join("report.html")
    }

    pub fn write_log(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.log_dir().join(name);
        fs::write(&path, contents).expect("write log file");
        path
    }

    pub fn write_report(&self, name: &str) -> PathBuf {
        fs::create_dir_all(self.report_dir()).expect("create report dir");
        let path = self.report_dir().join(name);
        fs::write(&path, "<html></html>").expect("write report file");
        path
    }

    pub fn config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            report_size: 3,
            report_dir: self.report_dir(),
            report_template_path: self.template_path(),
            log_dir: self.log_dir(),
            log_parse_error_threshold: 0.05,
            internal_log_path: None,
            ..AnalyzerConfig::default()
        }
    }

    pub fn resolved(&self) -> ResolvedConfig {
        self.config()
            .resolve_at(NaiveDate::from_ymd_opt(2017, 7, 1).unwrap())
            .expect("resolve workspace config")
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
