use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{error, info};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use toolfix::cli::Cli;
use toolfix::config::Config;
use toolfix::patcher::{self, PatchOptions};

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolfix")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolfix.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> ExitCode {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }
    if config.dry_run {
        println!("{}", "Dry run: no files will be written".yellow());
    }

    println!("{}", "Platform toolset compatibility fix".bold());
    println!("{}", "=".repeat(60));

    let opts = PatchOptions::from(config);
    match patcher::run(&opts) {
        Ok(report) => {
            patcher::print_summary(&report);
            ExitCode::from(report.exit_code() as u8)
        }
        Err(e) => {
            error!("Run aborted: {}", e);
            println!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();

    setup_logging(cli.is_verbose()).context("Failed to setup logging")?;

    // Load configuration, then overlay flags
    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    cli.apply(&mut config);

    info!("Starting with config from: {:?}", cli.config);

    Ok(run_application(&cli, &config))
}
