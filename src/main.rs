//! Command line entry point for the Employee Analytics Engine.
//!
//! Collects run parameters (from flags, prompting for any that are missing),
//! generates a batch of employees, runs both analytics engines and prints the
//! selected section as JSON on stdout. Prompts and logs go to stderr.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use employee_analytics::analytics::{
    compute_name_frequencies, compute_statistics, select_output, today,
};
use employee_analytics::cli::{Prompter, RunFlags, RunParameters};
use employee_analytics::config::ConfigLoader;
use employee_analytics::error::EngineResult;
use employee_analytics::generator::generate_employees;

/// Generate random employees and summarize them.
#[derive(Debug, Parser)]
#[command(name = "employee-analytics", version, about)]
struct Args {
    /// Minimum age of generated employees.
    #[arg(long)]
    min_age: Option<u32>,

    /// Maximum age of generated employees (must exceed the minimum).
    #[arg(long)]
    max_age: Option<u32>,

    /// Number of employees to generate.
    #[arg(long)]
    count: Option<usize>,

    /// Output section: 1 employees, 2 statistics, 3 names, 4 names and statistics.
    #[arg(long)]
    section: Option<u8>,

    /// Seed for reproducible batches.
    #[arg(long)]
    seed: Option<u64>,

    /// Configuration directory (defaults to the bundled configuration).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Date ages are computed against, as YYYY-MM-DD (defaults to today, UTC).
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    /// Print compact JSON instead of pretty-printed JSON.
    #[arg(long)]
    compact: bool,

    /// Log debug output to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = %err, "Run failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> EngineResult<()> {
    let run_id = Uuid::new_v4();

    let loader = match &args.config {
        Some(dir) => ConfigLoader::load(dir)?,
        None => ConfigLoader::embedded()?,
    };
    let limits = loader.age_limits();

    let flags = RunFlags {
        min_age: args.min_age,
        max_age: args.max_age,
        count: args.count,
        section: args.section,
    };
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stderr());
    let params = RunParameters::resolve(flags, &mut prompter, limits)?;

    let reference_date = args.reference_date.unwrap_or_else(today);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        run_id = %run_id,
        min_age = params.ages.min(),
        max_age = params.ages.max(),
        count = params.count,
        section = params.section.number(),
        %reference_date,
        "Starting run"
    );

    let employees = generate_employees(
        params.count,
        params.ages,
        reference_date,
        loader.names(),
        &mut rng,
    )?;
    let statistics = compute_statistics(&employees, reference_date)?;
    let name_analytics = compute_name_frequencies(&employees);
    let output = select_output(
        params.section.number(),
        &employees,
        &statistics,
        &name_analytics,
    )?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    if args.compact {
        serde_json::to_writer(&mut writer, &output).map_err(io::Error::from)?;
    } else {
        serde_json::to_writer_pretty(&mut writer, &output).map_err(io::Error::from)?;
    }
    writeln!(writer)?;
    writer.flush()?;

    info!(run_id = %run_id, employees = employees.len(), "Run completed");

    Ok(())
}
