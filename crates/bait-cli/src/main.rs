//! Bait trial report CLI.

use clap::Parser;

use bait_cli::cli::{Cli, Command};
use bait_cli::commands::{ReportOutcome, run_files, run_report};
use bait_cli::logging::init_logging;
use bait_cli::summary::print_report;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config();
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Report(args) => match run_report(args) {
            Ok(outcome) => match print_outcome(&outcome) {
                Ok(()) => 0,
                Err(error) => {
                    eprintln!("error: failed to print report: {error}");
                    1
                }
            },
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Files(args) => match run_files(args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn print_outcome(outcome: &ReportOutcome) -> std::io::Result<()> {
    println!(
        "Data: {} ({} file(s) matching '{}')",
        outcome.settings.data_dir.display(),
        outcome.files.len(),
        outcome.settings.pattern
    );
    if let Some(path) = &outcome.json {
        println!("JSON: {}", path.display());
    }
    if let Some(path) = &outcome.markdown {
        println!("Markdown: {}", path.display());
    }
    println!();
    print_report(&outcome.report)
}
