use chrono::{NaiveDateTime, TimeDelta};
use rand::Rng;

use crate::{
    office::Reading,
    simulation::{EnvironmentSimulator, Horizon},
};

/// Walks a [`Horizon`] minute by minute, numbering readings from 1.
pub struct Readings<'a, R> {
    simulator: EnvironmentSimulator<'a, R>,
    next_timestamp: NaiveDateTime,
    end: NaiveDateTime,
    next_sequence_id: u64,
    remaining: u64,
}

impl<'a, R: Rng> Readings<'a, R> {
    pub fn new(simulator: EnvironmentSimulator<'a, R>, horizon: &Horizon) -> Self {
        Self {
            simulator,
            next_timestamp: horizon.start(),
            end: horizon.end(),
            next_sequence_id: 1,
            remaining: horizon.minutes(),
        }
    }
}

impl<R: Rng> Iterator for Readings<'_, R> {
    type Item = Reading;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_timestamp >= self.end {
            return None;
        }

        let reading = self
            .simulator
            .step(self.next_sequence_id, self.next_timestamp);

        self.next_timestamp += TimeDelta::minutes(1);
        self.next_sequence_id += 1;
        self.remaining -= 1;

        Some(reading)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}
