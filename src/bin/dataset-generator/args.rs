use std::path::PathBuf;

use anyhow::{Context as _, Result};
use chrono::NaiveDateTime;
use chrono_tz::Tz;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long, env = "EMPLOYEES_FILE", default_value = "employees.csv")]
    pub employees_file: PathBuf,

    #[arg(long, env = "READINGS_FILE", default_value = "readings_3_years.csv")]
    pub readings_file: PathBuf,

    #[arg(
        long,
        env = "SIMULATION_START",
        default_value = "2023-01-01 00:00:00",
        value_parser = parse_timestamp
    )]
    pub start: NaiveDateTime,

    #[arg(
        long,
        env = "SIMULATION_END",
        default_value = "2026-01-01 00:00:00",
        value_parser = parse_timestamp
    )]
    pub end: NaiveDateTime,

    #[arg(long, env = "SIMULATION_SEED")]
    pub seed: Option<u64>,

    /// IANA time zone for the employee export timestamps. Falls back to `TZ`,
    /// which must then hold an IANA name (a POSIX value such as
    /// `:/etc/localtime` is rejected); pass `--timezone` to override it.
    #[arg(long, env = "TZ", default_value = "UTC")]
    pub timezone: Tz,
}

fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .with_context(|| format!("failed to parse timestamp: {s}"))
}
