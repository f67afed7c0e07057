//! # Insights Host CLI
//!
//! Scans result files and exports reports without a renderer window.

use clap::{Parser, Subcommand};
use insights_core::config::runtime::LoggingPreferences;
use insights_core::{log_error, log_info, logging};
use insights_host::{render, HostApp, HostConfig, OutputFormat};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "insights-host")]
#[command(about = "Headless host for Accessibility Insights scan results")]
#[command(version)]
struct Cli {
    /// TOML host configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize scan result files and print their cards
    Scan {
        /// Scan result file, or a directory searched for *.json files
        path: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// JSON file persisting user configuration between runs
        #[arg(long)]
        storage: Option<PathBuf>,
    },

    /// Export the automated checks report for one scan result file
    Report {
        file: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = HostConfig::load(cli.config.as_deref())?;

    env_logger::Builder::new()
        .filter_level(config.log_filter())
        .parse_env("RUST_LOG")
        .init();

    let preferences = LoggingPreferences {
        min_log_level: config.log_level,
        ..LoggingPreferences::default()
    };
    logging::init_global_logging_with_preferences(&preferences)?;
    log_info!("Insights host starting", "build" => insights_core::config::build_info::source_info());

    match cli.command {
        Commands::Scan {
            path,
            format,
            storage,
        } => {
            if storage.is_some() {
                config.storage_path = storage;
            }
            run_scan(HostApp::new(config), path, format)
        }
        Commands::Report { file, output } => run_report(HostApp::new(config), file, output),
    }
}

fn run_scan(
    app: HostApp,
    path: PathBuf,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let outcomes = app.scan_path(&path)?;

    println!("{}", render(&outcomes, format)?);
    log_info!(
        "Scan run finished",
        "files" => outcomes.len(),
        "duration_ms" => start.elapsed().as_millis()
    );

    if outcomes.iter().any(|outcome| !outcome.is_clean()) {
        std::process::exit(1);
    }
    Ok(())
}

fn run_report(
    app: HostApp,
    file: PathBuf,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(output) => {
            app.write_report(&file, &output).map_err(|e| {
                log_error!(
                    insights_core::logging::codes::results::REPORT_SERIALIZATION_FAILED,
                    "Report export failed",
                    "file" => file.display(),
                    "error" => &e
                );
                e
            })?;
            println!("[OK] Report saved to: {}", output.display());
        }
        None => println!("{}", app.export_report(&file)?),
    }
    Ok(())
}
