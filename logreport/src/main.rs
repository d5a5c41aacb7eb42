use clap::Parser;
use logreport_core::cli::{AnalyzeArgs, analyze};

#[derive(Parser, Debug)]
#[command(
    name = "logreport",
    version,
    about = "Parse the latest nginx access log and build a slowest-endpoints report"
)]
struct Cli {
    #[command(flatten)]
    args: AnalyzeArgs,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = analyze(cli.args) {
        eprintln!("logreport error: {e:#}");
        std::process::exit(1);
    }
}
