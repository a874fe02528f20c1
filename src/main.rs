use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use keyword_class_finder::cli::Cli;
use keyword_class_finder::config::ReportConfig;
use keyword_class_finder::output::Artifacts;
use keyword_class_finder::report::build_report;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let Some(config) = ReportConfig::from_cli(&cli) else {
        print_usage()?;
        return Ok(());
    };

    let model = build_report(&config)
        .with_context(|| format!("report failed for workspace {}", config.workspace.display()))?;
    let artifacts = Artifacts::render(&model, &config.render_options())?;
    for path in artifacts.write_to(Path::new("."))? {
        println!("{}", path.display());
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_usage() -> Result<()> {
    Cli::command()
        .print_help()
        .context("failed to print usage")?;
    println!();
    Ok(())
}
