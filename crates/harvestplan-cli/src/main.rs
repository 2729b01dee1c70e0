//! harvestplan CLI - Harvest Labor Scheduling Engine
//!
//! Command-line interface for validating workforce data, inspecting daily
//! capacity, and computing field-work schedules.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use harvestplan_core::Renderer;
use harvestplan_render::{MermaidGantt, TextTableRenderer};
use harvestplan_solver::{expand_harvest_rounds, FieldScheduler};
use harvestplan_store::{load_config, load_field_book, load_workforce, read_field_table};

#[derive(Parser)]
#[command(name = "harvestplan")]
#[command(author, version, about = "Harvest labor scheduling engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate worker and field definition files
    Check {
        /// Worker list (YAML)
        #[arg(long, value_name = "FILE")]
        workers: PathBuf,

        /// Field catalog (YAML)
        #[arg(long, value_name = "FILE")]
        fields: Option<PathBuf>,
    },

    /// Print the daily capacity table over a date range
    Capacity {
        /// Worker list (YAML)
        #[arg(long, value_name = "FILE")]
        workers: PathBuf,

        /// First date (inclusive)
        #[arg(long)]
        from: NaiveDate,

        /// Last date (inclusive)
        #[arg(long)]
        to: NaiveDate,
    },

    /// Compute a schedule from a plan config, a worker list, and a task table
    Schedule {
        /// Plan configuration (YAML)
        #[arg(short, long, value_name = "FILE")]
        config: PathBuf,

        /// Worker list (YAML)
        #[arg(long, value_name = "FILE")]
        workers: PathBuf,

        /// Task table (YAML records)
        #[arg(long, value_name = "FILE")]
        tasks: PathBuf,

        /// Output format (text, mermaid, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { workers, fields } => check(&workers, fields.as_deref()),
        Commands::Capacity { workers, from, to } => capacity(&workers, from, to),
        Commands::Schedule {
            config,
            workers,
            tasks,
            format,
            output,
        } => schedule(&config, &workers, &tasks, &format, output.as_deref()),
    }
}

fn check(workers: &std::path::Path, fields: Option<&std::path::Path>) -> Result<()> {
    let workforce = load_workforce(workers)
        .with_context(|| format!("invalid worker file {}", workers.display()))?;
    println!("{}: {} workers", workers.display(), workforce.len());

    if let Some(fields) = fields {
        let book = load_field_book(fields)
            .with_context(|| format!("invalid field file {}", fields.display()))?;
        println!("{}: {} fields", fields.display(), book.len());
    }
    Ok(())
}

fn capacity(workers: &std::path::Path, from: NaiveDate, to: NaiveDate) -> Result<()> {
    if from > to {
        bail!("--from {from} is after --to {to}");
    }
    let workforce = load_workforce(workers)?;

    println!("{:<12}  {:>6}  {:>7}", "Date", "Hours", "Workers");
    let mut date = from;
    while date <= to {
        println!(
            "{:<12}  {:>6.1}  {:>7.2}",
            date,
            workforce.daily_work_hours(date),
            workforce.daily_worker_count(date),
        );
        date = date.succ_opt().unwrap_or(date);
    }
    Ok(())
}

fn schedule(
    config: &std::path::Path,
    workers: &std::path::Path,
    tasks: &std::path::Path,
    format: &str,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let config =
        load_config(config).with_context(|| format!("invalid plan config {}", config.display()))?;
    let workforce = load_workforce(workers)?;
    let mut table = read_field_table(tasks, &config.bindings)
        .with_context(|| format!("invalid task table {}", tasks.display()))?;

    if !config.field_order.is_empty() {
        table = expand_harvest_rounds(&table, &config.field_order, &config.harvest_rounds);
    }

    let starts = config
        .to_start_dates()
        .context("no start date configured (set start_date or start_dates in the plan config)")?;

    tracing::info!(
        tasks = table.len(),
        workers = workforce.len(),
        "computing schedule"
    );
    let outcome = FieldScheduler::new().schedule(&table, &workforce, &starts);
    for warning in &outcome.warnings {
        eprintln!("warning: {warning}");
    }

    let rendered = match format {
        "text" => TextTableRenderer::new().render(&outcome.entries)?,
        "mermaid" => MermaidGantt::new().render(&outcome.entries)?,
        "json" => {
            let mut json = serde_json::to_string_pretty(&outcome.entries)?;
            json.push('\n');
            json
        }
        other => bail!("unknown format '{other}' (expected text, mermaid, or json)"),
    };

    match output {
        Some(path) => std::fs::write(path, rendered)?,
        None => print!("{rendered}"),
    }
    Ok(())
}
