use anyhow::{Context as _, Result, bail};
use chrono::NaiveDateTime;
use indexmap::IndexSet;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    office::{BadgeToken, Reading, Roster},
    simulation::{
        ClimatePolicy, HumidityModel, LightModel, OccupancyModel, OccupancySampler,
        TemperatureModel,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub temperature: TemperatureModel,
    pub humidity: HumidityModel,
    pub light: LightModel,
    pub occupancy: OccupancyModel,
    pub climate: ClimatePolicy,
    /// Per-minute chance of each manual override while the room is occupied.
    pub manual_override_probability: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            temperature: TemperatureModel::default(),
            humidity: HumidityModel::default(),
            light: LightModel::default(),
            occupancy: OccupancyModel::default(),
            climate: ClimatePolicy::default(),
            manual_override_probability: 0.01,
        }
    }
}

impl SimulationConfig {
    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.manual_override_probability) {
            bail!(
                "manual override probability out of range: expected 0-1, got {}",
                self.manual_override_probability
            );
        }

        if !(self.temperature.noise_celsius >= 0.0 && self.humidity.noise_percent >= 0.0) {
            bail!("noise amplitudes must be non-negative");
        }

        if self.humidity.min_percent > self.humidity.max_percent {
            bail!(
                "humidity bounds inverted: {} > {}",
                self.humidity.min_percent,
                self.humidity.max_percent
            );
        }

        if self.light.day_range.is_empty() || self.light.night_range.is_empty() {
            bail!("light level ranges must not be empty");
        }

        Ok(())
    }
}

/// Seeded generator when `seed` is given, entropy-seeded otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Produces one [`Reading`] per simulated minute.
///
/// The only state carried between steps is the set of present badge tokens.
/// Every step draws from `rng` in a fixed order: temperature noise, humidity
/// noise, light level, occupancy, then the two override flags (only while
/// someone is present).
pub struct EnvironmentSimulator<'a, R> {
    roster: &'a Roster,
    tokens: Vec<BadgeToken>,
    config: SimulationConfig,
    occupancy: OccupancySampler,
    rng: R,
    present_tokens: IndexSet<BadgeToken>,
}

impl<'a, R: Rng> EnvironmentSimulator<'a, R> {
    pub fn new(roster: &'a Roster, config: SimulationConfig, rng: R) -> Result<Self> {
        config.validate().context("invalid simulation config")?;
        let occupancy = config
            .occupancy
            .sampler()
            .context("invalid occupancy model")?;

        Ok(Self {
            roster,
            tokens: roster.badge_tokens().into_iter().cloned().collect(),
            config,
            occupancy,
            rng,
            present_tokens: IndexSet::new(),
        })
    }

    /// Seeds the occupants the first step carries forward.
    pub fn with_present_tokens(mut self, present_tokens: IndexSet<BadgeToken>) -> Result<Self> {
        if let Some(unknown) = present_tokens.iter().find(|t| self.roster.get(t).is_none()) {
            bail!("badge token not in roster: {unknown}");
        }

        self.present_tokens = present_tokens;
        Ok(self)
    }

    pub fn present_tokens(&self) -> &IndexSet<BadgeToken> {
        &self.present_tokens
    }

    pub fn step(&mut self, sequence_id: u64, timestamp: NaiveDateTime) -> Reading {
        let temperature_celsius = self.config.temperature.sample(timestamp, &mut self.rng);
        let humidity_percent = self.config.humidity.sample(temperature_celsius, &mut self.rng);
        let light_level = self.config.light.sample(timestamp, &mut self.rng);

        if let Some(present) = self.occupancy.transition(&self.tokens, &mut self.rng) {
            self.present_tokens = present;
        }

        let occupied = !self.present_tokens.is_empty();
        let p = self.config.manual_override_probability;
        let manual_light_override = occupied && self.rng.gen_bool(p);
        let manual_climate_override = occupied && self.rng.gen_bool(p);

        let mean_preferred = if occupied {
            self.roster.mean_preferred_temperature(&self.present_tokens)
        } else {
            None
        };
        let climate = self
            .config
            .climate
            .decide(temperature_celsius, humidity_percent, mean_preferred);

        Reading {
            sequence_id,
            timestamp,
            temperature_celsius,
            humidity_percent,
            light_level,
            present_tokens: self.present_tokens.clone(),
            manual_light_override,
            manual_climate_override,
            climate,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeDelta};

    use super::*;
    use crate::office::{ClimateState, FanSpeed};

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn token(s: &str) -> BadgeToken {
        s.parse().unwrap()
    }

    fn run(config: SimulationConfig, seed: u64, minutes: i64) -> Vec<Reading> {
        let roster = Roster::builtin().unwrap();
        let mut simulator =
            EnvironmentSimulator::new(&roster, config, StdRng::seed_from_u64(seed)).unwrap();

        (0..minutes)
            .map(|i| simulator.step(i as u64 + 1, start() + TimeDelta::minutes(i)))
            .collect()
    }

    #[test]
    fn same_seed_reproduces_the_same_readings() {
        let a = run(SimulationConfig::default(), 42, 600);
        let b = run(SimulationConfig::default(), 42, 600);

        for (a, b) in a.iter().zip(&b) {
            assert_eq!(a.temperature_celsius, b.temperature_celsius);
            assert_eq!(a.humidity_percent, b.humidity_percent);
            assert_eq!(a.light_level, b.light_level);
            assert_eq!(a.present_tokens, b.present_tokens);
            assert!(a.present_tokens.iter().eq(b.present_tokens.iter()));
            assert_eq!(a.climate, b.climate);
        }
    }

    #[test]
    fn certain_continuity_carries_occupants_forward() {
        let roster = Roster::builtin().unwrap();
        let config = SimulationConfig {
            occupancy: OccupancyModel {
                continuity_probability: 1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let previous: IndexSet<BadgeToken> = [token("6C227B1C"), token("AC71771C")].into();
        let mut simulator = EnvironmentSimulator::new(&roster, config, StdRng::seed_from_u64(9))
            .unwrap()
            .with_present_tokens(previous.clone())
            .unwrap();

        for i in 0..120 {
            let reading = simulator.step(i + 1, start() + TimeDelta::minutes(i as i64));
            assert_eq!(reading.present_tokens, previous);
            assert_eq!(reading.occupant_count(), 2);
        }
    }

    #[test]
    fn empty_room_never_runs_the_unit_or_overrides() {
        let config = SimulationConfig {
            occupancy: OccupancyModel {
                continuity_probability: 1.0,
                ..Default::default()
            },
            manual_override_probability: 1.0,
            ..Default::default()
        };

        for reading in run(config, 5, 1440) {
            assert_eq!(reading.occupant_count(), 0);
            assert_eq!(reading.climate, ClimateState::OFF);
            assert!(!reading.manual_light_override);
            assert!(!reading.manual_climate_override);
        }
    }

    #[test]
    fn climate_tracks_the_mean_preference_of_present_people() {
        let roster = Roster::builtin().unwrap();
        let config = SimulationConfig {
            temperature: TemperatureModel {
                noise_celsius: 0.0,
                ..Default::default()
            },
            occupancy: OccupancyModel {
                continuity_probability: 1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        // 18 and 26 average to 22; 06:00 sits at the 32 degree peak.
        let present: IndexSet<BadgeToken> = [token("8E0F3503"), token("8CE3721C")].into();
        let mut simulator = EnvironmentSimulator::new(&roster, config, StdRng::seed_from_u64(1))
            .unwrap()
            .with_present_tokens(present)
            .unwrap();

        let reading = simulator.step(1, start() + TimeDelta::hours(6));

        assert_eq!(reading.temperature_celsius, 32.0);
        assert!(reading.climate.on);
        assert_eq!(reading.climate.fan_speed, FanSpeed::High);
        assert_eq!(
            reading.climate.humidify,
            reading.humidity_percent < 55.0
        );
    }

    #[test]
    fn rejects_unknown_prior_occupants() {
        let roster = Roster::builtin().unwrap();
        let result = EnvironmentSimulator::new(
            &roster,
            SimulationConfig::default(),
            StdRng::seed_from_u64(1),
        )
        .unwrap()
        .with_present_tokens([token("DEADBEEF")].into());

        assert!(result.is_err());
    }

    #[test]
    fn rejects_invalid_override_probability() {
        let roster = Roster::builtin().unwrap();
        let config = SimulationConfig {
            manual_override_probability: -0.1,
            ..Default::default()
        };

        assert!(EnvironmentSimulator::new(&roster, config, StdRng::seed_from_u64(1)).is_err());
    }
}
