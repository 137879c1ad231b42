use std::{fmt::Display, io::Write};

use anyhow::{Context as _, Result};
use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Timelike};
use csv::Writer;
use indexmap::IndexSet;
use tracing::info;

use crate::office::{BadgeToken, Reading, Roster};

pub const EMPLOYEE_HEADER: [&str; 10] = [
    "id",
    "external_id",
    "first_name",
    "last_name",
    "secret",
    "preferred_temperature",
    "preferred_light_level",
    "badge_token",
    "created_at",
    "updated_at",
];

pub const READING_HEADER: [&str; 13] = [
    "sequence_id",
    "temperature",
    "humidity",
    "light_level",
    "occupant_count",
    "present_token_count",
    "present_tokens",
    "climate_on",
    "climate_humidify",
    "climate_fan_speed",
    "manual_light_override",
    "manual_climate_override",
    "timestamp",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn write_employees<W, Tz>(
    writer: &mut Writer<W>,
    roster: &Roster,
    exported_at: &DateTime<Tz>,
) -> Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    writer
        .write_record(EMPLOYEE_HEADER)
        .context("failed to write employee header")?;

    let exported_at = exported_at.format(TIMESTAMP_FORMAT).to_string();

    for employee in roster.employees() {
        writer
            .write_record([
                employee.id.to_string(),
                employee.external_id.clone(),
                employee.first_name.clone(),
                employee.last_name.clone(),
                employee.secret.clone(),
                employee.preferred_temperature.to_string(),
                employee.preferred_light_level.to_string(),
                employee.badge_token.to_string(),
                exported_at.clone(),
                exported_at.clone(),
            ])
            .with_context(|| format!("failed to write employee {}", employee.id))?;
    }

    writer.flush().context("failed to flush employees")?;

    Ok(())
}

/// Writes one row per reading and returns the number of rows written.
pub fn write_readings<W, I>(writer: &mut Writer<W>, readings: I) -> Result<u64>
where
    W: Write,
    I: IntoIterator<Item = Reading>,
{
    writer
        .write_record(READING_HEADER)
        .context("failed to write reading header")?;

    let mut total = 0u64;

    for reading in readings {
        let ts = reading.timestamp;
        if is_progress_point(total, ts) {
            info!(month = %ts.format("%Y-%m"), rows = total, "writing readings");
        }

        writer
            .write_record(reading_record(&reading))
            .with_context(|| format!("failed to write reading {}", reading.sequence_id))?;
        total += 1;
    }

    writer.flush().context("failed to flush readings")?;

    Ok(total)
}

/// First row, then the first minute of every month.
fn is_progress_point(rows_written: u64, ts: NaiveDateTime) -> bool {
    rows_written == 0 || (ts.day() == 1 && ts.hour() == 0 && ts.minute() == 0)
}

fn reading_record(reading: &Reading) -> [String; 13] {
    let flag = |b: bool| u8::from(b).to_string();

    [
        reading.sequence_id.to_string(),
        format!("{:.1}", reading.temperature_celsius),
        format!("{:.1}", reading.humidity_percent),
        reading.light_level.to_string(),
        reading.occupant_count().to_string(),
        reading.present_tokens.len().to_string(),
        format_tokens(&reading.present_tokens),
        flag(reading.climate.on),
        flag(reading.climate.humidify),
        reading.climate.fan_speed.as_u8().to_string(),
        flag(reading.manual_light_override),
        flag(reading.manual_climate_override),
        reading.timestamp.format(TIMESTAMP_FORMAT).to_string(),
    ]
}

fn format_tokens(tokens: &IndexSet<BadgeToken>) -> String {
    let quoted: Vec<String> = tokens.iter().map(|t| format!("'{t}'")).collect();
    format!("[{}]", quoted.join(", "))
}
