use anyhow::Context;
use clap::Parser;
use configuration::OutputFormat;
use database::Database;
use reports::{PopulationReporter, Report};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the population report tool.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Settings may come from the environment or config.toml instead.
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries nothing but the reports.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install the log subscriber: {e}");
    }

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("An error occurred: {e:#}");
            ExitCode::FAILURE
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Population, city and language reports over a world database.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Reports to run, in order. Without any, runs top-countries,
    /// continent-breakdown and language-stats.
    #[arg(value_enum)]
    reports: Vec<Report>,

    /// Path to a TOML configuration file (default: ./config.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// How tables are printed.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// How many countries the top-countries report lists.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    top: Option<u32>,
}

// ==============================================================================
// Report Runner
// ==============================================================================

/// Runs the selected reports one after another, stopping at the first failure.
///
/// Each report is queried before its heading is printed, so a failure leaves no
/// partial report on stdout.
async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = configuration::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let url = config.database.connection_url()?;
    let reporter = PopulationReporter::new(Database::new(url));

    let format = cli.format.unwrap_or(config.report.format);
    let top_n = cli.top.unwrap_or(config.report.top_n);
    let selected = if cli.reports.is_empty() {
        Report::DEFAULT_SEQUENCE.to_vec()
    } else {
        cli.reports
    };

    let mut stdout = io::stdout();
    for (i, report) in selected.into_iter().enumerate() {
        let table = report.run(&reporter, top_n).await?;
        tracing::info!(report = ?report, rows = table.len(), "Report ready.");

        if i > 0 {
            writeln!(stdout)?;
        }
        writeln!(stdout, "=== {} ===", report.title(top_n))?;
        presentation::render(format, &table, &mut stdout)?;
    }
    stdout.flush()?;

    Ok(())
}
