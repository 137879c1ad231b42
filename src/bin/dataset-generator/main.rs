mod args;

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use args::Args;
use chrono::Utc;
use clap::Parser as _;
use csv::Writer;
use office_environments::{
    export::{write_employees, write_readings},
    office::Roster,
    simulation::{EnvironmentSimulator, Horizon, Readings, SimulationConfig, seeded_rng},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    if let Err(e) = run() {
        error!("{e:#}");
        return ExitCode::from(1);
    }

    ExitCode::from(0)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let args = Args::parse();

    let horizon = Horizon::new(args.start, args.end).context("invalid simulation horizon")?;
    let roster = Roster::builtin().context("failed to build roster")?;

    info!(
        start = %horizon.start(),
        end = %horizon.end(),
        minutes = horizon.minutes(),
        seed = ?args.seed,
        "generating dataset"
    );

    let exported_at = Utc::now().with_timezone(&args.timezone);
    let mut employees = Writer::from_path(&args.employees_file)
        .with_context(|| format!("failed to create file: {:?}", args.employees_file))?;
    write_employees(&mut employees, &roster, &exported_at)
        .context("failed to write employees")?;
    info!(path = ?args.employees_file, rows = roster.len(), "wrote employees");

    let rng = seeded_rng(args.seed);
    let simulator = EnvironmentSimulator::new(&roster, SimulationConfig::default(), rng)
        .context("failed to create environment simulator")?;
    let readings = Readings::new(simulator, &horizon);

    let mut writer = Writer::from_path(&args.readings_file)
        .with_context(|| format!("failed to create file: {:?}", args.readings_file))?;
    let total = write_readings(&mut writer, readings).context("failed to write readings")?;
    info!(path = ?args.readings_file, rows = total, "wrote readings");

    Ok(())
}
