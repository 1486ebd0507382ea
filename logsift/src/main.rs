use clap::{Parser, Subcommand};
use logsift_core::cli::{self, AnalyzeArgs};
use logsift_core::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logsift",
    version,
    about = "logsift: access log statistics and reports"
)]
struct Cli {
    /// Write diagnostics to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse access logs and render a statistics report
    Analyze(AnalyzeArgs),

    /// List the field names accepted by --filter-field
    Fields,
}

fn main() {
    let cli = Cli::parse();

    let guard = init_logging(cli.log_file.as_deref());

    let result = match cli.command {
        Command::Analyze(args) => cli::analyze::run(args),
        Command::Fields => cli::fields::run(),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        eprintln!("error: {e:#}");
        drop(guard);
        std::process::exit(1);
    }
}
