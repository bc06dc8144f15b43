// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use data_inventory::utils::logging::{format_error, format_info, format_success, format_warning};
use data_inventory::{Config, PipelineOrchestrator, RunMode, RunSummary};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(name = "data_inventory")]
#[command(version = "0.1.0")]
#[command(about = "Generate documentation, DBML and JSON from markdown data sources", long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Only validate, don't generate
    #[arg(long, action = ArgAction::SetTrue)]
    validate: bool,

    #[arg(long, value_name = "DIR", env = "DATA_INVENTORY_SOURCES")]
    sources: Option<PathBuf>,

    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    #[arg(long, value_name = "FILE")]
    schema: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    data_inventory::utils::logging::init_logger(cli.color, cli.verbose);

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if let Some(sources) = cli.sources {
        config.paths.sources_dir = sources;
    }
    if let Some(output) = cli.output {
        config.paths.output_dir = output;
    }
    if let Some(schema) = cli.schema {
        config.paths.schema_file = schema;
    }

    let mode = if cli.validate {
        RunMode::ValidateOnly
    } else {
        RunMode::Generate
    };

    info!("Reading data sources from: {}", config.paths.sources_dir.display());

    let output_dir = config.paths.output_dir.clone();
    let summary = PipelineOrchestrator::new(config)
        .run(mode)
        .context("Data inventory run failed")?;

    report(&summary, mode, &output_dir);

    if summary.is_success(mode) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn report(summary: &RunSummary, mode: RunMode, output_dir: &std::path::Path) {
    println!(
        "{}",
        format_info(&format!("Loaded {} data source(s)", summary.records_loaded))
    );

    if summary.issues.is_empty() {
        println!("{}", format_success("Validation passed"));
    } else {
        eprintln!("\nValidation errors:");
        for issue in &summary.issues {
            eprintln!("  {}", format_error(&issue.to_string()));
        }
    }

    if mode == RunMode::Generate {
        if !summary.issues.is_empty() {
            eprintln!(
                "\n{}",
                format_warning("Continuing with generation despite validation errors")
            );
        }
        for path in &summary.written {
            println!("Generated: {}", path.display());
        }
        println!(
            "\n{}",
            format_success(&format!("Done! Output is in {}", output_dir.display()))
        );
    }
}
