//! Ambient conditions derived from the time of day plus bounded noise.

use std::{f64::consts::TAU, ops::RangeInclusive};

use chrono::{NaiveDateTime, Timelike};
use rand::Rng;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Diurnal sinusoid over the minute of the day.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureModel {
    pub mean_celsius: f64,
    pub amplitude_celsius: f64,
    pub noise_celsius: f64,
}

impl Default for TemperatureModel {
    fn default() -> Self {
        Self {
            mean_celsius: 26.0,
            amplitude_celsius: 6.0,
            noise_celsius: 0.3,
        }
    }
}

impl TemperatureModel {
    pub fn baseline(&self, timestamp: NaiveDateTime) -> f64 {
        let minute_of_day = timestamp.hour() * 60 + timestamp.minute();
        let phase = minute_of_day as f64 / MINUTES_PER_DAY as f64 * TAU;

        self.mean_celsius + self.amplitude_celsius * phase.sin()
    }

    pub fn sample<R: Rng>(&self, timestamp: NaiveDateTime, rng: &mut R) -> f64 {
        let noise = rng.gen_range(-self.noise_celsius..=self.noise_celsius);
        round_tenth(self.baseline(timestamp) + noise)
    }
}

/// Relative humidity falling linearly as the temperature rises.
#[derive(Debug, Clone, PartialEq)]
pub struct HumidityModel {
    pub base_percent: f64,
    pub reference_celsius: f64,
    pub slope_percent_per_celsius: f64,
    pub noise_percent: f64,
    pub min_percent: f64,
    pub max_percent: f64,
}

impl Default for HumidityModel {
    fn default() -> Self {
        Self {
            base_percent: 75.0,
            reference_celsius: 20.0,
            slope_percent_per_celsius: 1.8,
            noise_percent: 1.5,
            min_percent: 40.0,
            max_percent: 85.0,
        }
    }
}

impl HumidityModel {
    /// `temperature_celsius` must be the already-noised value of the same minute.
    pub fn sample<R: Rng>(&self, temperature_celsius: f64, rng: &mut R) -> f64 {
        let base = self.base_percent
            - (temperature_celsius - self.reference_celsius) * self.slope_percent_per_celsius;
        let noise = rng.gen_range(-self.noise_percent..=self.noise_percent);

        round_tenth((base + noise).clamp(self.min_percent, self.max_percent))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightModel {
    /// First daytime hour (inclusive).
    pub day_start_hour: u32,
    /// First night hour after daytime (exclusive end of daytime).
    pub day_end_hour: u32,
    pub day_range: RangeInclusive<u16>,
    pub night_range: RangeInclusive<u16>,
}

impl Default for LightModel {
    fn default() -> Self {
        Self {
            day_start_hour: 6,
            day_end_hour: 18,
            day_range: 500..=900,
            night_range: 100..=400,
        }
    }
}

impl LightModel {
    pub fn is_daytime(&self, hour: u32) -> bool {
        (self.day_start_hour..self.day_end_hour).contains(&hour)
    }

    pub fn sample<R: Rng>(&self, timestamp: NaiveDateTime, rng: &mut R) -> u16 {
        if self.is_daytime(timestamp.hour()) {
            rng.gen_range(self.day_range.clone())
        } else {
            rng.gen_range(self.night_range.clone())
        }
    }
}

fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
