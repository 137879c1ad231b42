use chrono::NaiveDateTime;
use indexmap::IndexSet;

use crate::office::BadgeToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FanSpeed {
    Off,
    Low,
    Medium,
    High,
}

impl FanSpeed {
    pub fn as_u8(&self) -> u8 {
        match self {
            FanSpeed::Off => 0,
            FanSpeed::Low => 1,
            FanSpeed::Medium => 2,
            FanSpeed::High => 3,
        }
    }
}

/// Actuator decision of the climate unit for one minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClimateState {
    pub on: bool,

    pub humidify: bool,

    pub fan_speed: FanSpeed,
}

impl ClimateState {
    pub const OFF: ClimateState = ClimateState {
        on: false,
        humidify: false,
        fan_speed: FanSpeed::Off,
    };
}

#[derive(Debug, Clone)]
pub struct Reading {
    pub sequence_id: u64,

    pub timestamp: NaiveDateTime,

    pub temperature_celsius: f64,

    pub humidity_percent: f64,

    pub light_level: u16,

    pub present_tokens: IndexSet<BadgeToken>,

    pub manual_light_override: bool,

    pub manual_climate_override: bool,

    pub climate: ClimateState,
}

impl Reading {
    pub fn occupant_count(&self) -> usize {
        self.present_tokens.len()
    }
}
