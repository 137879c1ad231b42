use anyhow::{Result, bail};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

pub const DEFAULT_START: NaiveDateTime = NaiveDate::from_ymd_opt(2023, 1, 1)
    .unwrap()
    .and_hms_opt(0, 0, 0)
    .unwrap();

pub const DEFAULT_END: NaiveDateTime = NaiveDate::from_ymd_opt(2026, 1, 1)
    .unwrap()
    .and_hms_opt(0, 0, 0)
    .unwrap();

/// Simulated span: `start` inclusive, `end` exclusive, one step per minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Horizon {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Default for Horizon {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }
}

impl Horizon {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if end <= start {
            bail!("horizon end must be after start: {start} .. {end}");
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Number of minute steps, i.e. timestamps `t` with `start <= t < end`.
    pub fn minutes(&self) -> u64 {
        let span = self.end - self.start;
        let whole = span.num_minutes();
        let partial = span > TimeDelta::minutes(whole);

        (whole + i64::from(partial)) as u64
    }
}
