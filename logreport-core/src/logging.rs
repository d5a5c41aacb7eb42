use crate::conf::ResolvedConfig;
use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Keeps the background log writer alive; flushes on drop.
#[must_use = "dropping the guard stops the log writer"]
pub struct LoggingGuard {
    _writer: Option<WorkerGuard>,
}

/// Initialize the logging system for one analyzer run.
///
/// - Uses `RUST_LOG` for level filtering (defaults to "info" if not set)
/// - Appends to `internal_log_path` when configured, stderr otherwise
/// - Plain text lines by default, flattened JSON events with `internal_log_json`
pub fn init_logging(cfg: &ResolvedConfig) -> Result<LoggingGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(path) = &cfg.internal_log_path else {
        let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
        let installed = if cfg.internal_log_json {
            builder.json().flatten_event(true).try_init()
        } else {
            builder.try_init()
        };
        installed.map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

        return Ok(LoggingGuard { _writer: None });
    };

    let appender = file_appender(path)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false);
    let installed = if cfg.internal_log_json {
        builder.json().flatten_event(true).try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

    Ok(LoggingGuard {
        _writer: Some(guard),
    })
}

fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("invalid log file path {}", path.display()))?;

    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
