use crate::office::{ClimateState, FanSpeed};

/// Thresholds that turn ambient readings into an actuator decision.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimatePolicy {
    pub humidify_below_percent: f64,
    /// Humidifying is suppressed above this level, whatever the lower check says.
    pub humidify_suppressed_above_percent: f64,
    pub medium_fan_diff_celsius: f64,
    pub high_fan_diff_celsius: f64,
}

impl Default for ClimatePolicy {
    fn default() -> Self {
        Self {
            humidify_below_percent: 55.0,
            humidify_suppressed_above_percent: 65.0,
            medium_fan_diff_celsius: 3.0,
            high_fan_diff_celsius: 4.5,
        }
    }
}

impl ClimatePolicy {
    /// `mean_preferred_celsius` is `None` when nobody is in the room, which
    /// keeps the unit off.
    pub fn decide(
        &self,
        temperature_celsius: f64,
        humidity_percent: f64,
        mean_preferred_celsius: Option<f64>,
    ) -> ClimateState {
        let Some(preferred) = mean_preferred_celsius else {
            return ClimateState::OFF;
        };

        let diff = temperature_celsius - preferred;

        ClimateState {
            on: diff > 0.0,
            humidify: self.humidify(humidity_percent),
            fan_speed: self.fan_speed(diff),
        }
    }

    pub fn humidify(&self, humidity_percent: f64) -> bool {
        let dry = humidity_percent < self.humidify_below_percent;
        let suppressed = humidity_percent > self.humidify_suppressed_above_percent;

        dry && !suppressed
    }

    pub fn fan_speed(&self, diff_celsius: f64) -> FanSpeed {
        if diff_celsius >= self.high_fan_diff_celsius {
            FanSpeed::High
        } else if diff_celsius >= self.medium_fan_diff_celsius {
            FanSpeed::Medium
        } else if diff_celsius > 0.0 {
            FanSpeed::Low
        } else {
            FanSpeed::Off
        }
    }
}
