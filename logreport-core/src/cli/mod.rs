use crate::conf::{export_config, load_config};
use crate::logging::init_logging;
use crate::run::{RunOutcome, run};
use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// JSON config file; its keys override the built-in defaults
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the effective config as JSON to this path
    #[arg(long = "config-export", value_name = "PATH")]
    pub config_export: Option<PathBuf>,

    /// Do not run the analyzer (useful together with --config-export)
    #[arg(long = "no-launch")]
    pub no_launch: bool,
}

pub fn analyze(args: AnalyzeArgs) -> Result<()> {
    let cfg = load_config(args.config.as_deref())?;

    if let Some(path) = &args.config_export {
        export_config(&cfg, path)?;
        println!("✔ Config written to {}", path.display());
    }

    if args.no_launch {
        return Ok(());
    }

    let resolved = cfg.resolve()?;
    let _guard = init_logging(&resolved)?;

    match run(&resolved) {
        Ok(outcome) => {
            print_outcome(&outcome, resolved.log_parse_error_threshold);
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "analyzer failed");
            Err(err)
        }
    }
}

fn print_outcome(outcome: &RunOutcome, threshold: f64) {
    match outcome {
        RunOutcome::NoLogs => println!("No log files found, nothing to do"),
        RunOutcome::UpToDate { report, .. } => {
            println!("Report {} is up to date", report.path.display())
        }
        RunOutcome::Generated {
            report,
            rows,
            quality,
            ..
        } => {
            println!(
                "✔ Report written to {} ({} endpoints, {} lines, {} parse errors)",
                report.display(),
                rows,
                quality.lines_count,
                quality.parse_errors_count
            );
            if quality.exceeds(threshold) {
                println!(
                    "  {}: parse error ratio reached {:.1}%",
                    "warning".yellow().bold(),
                    threshold * 100.0
                );
            }
        }
    }
}
