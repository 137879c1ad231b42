use anyhow::{Context as _, Result, bail};
use indexmap::IndexSet;
use rand::{
    Rng,
    distributions::{Distribution, WeightedIndex},
    seq::SliceRandom,
};

use crate::office::BadgeToken;

#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyModel {
    /// Chance that the previous minute's occupants are kept as they are.
    pub continuity_probability: f64,
    /// Relative weight of each headcount, indexed by headcount.
    pub headcount_weights: Vec<u32>,
}

impl Default for OccupancyModel {
    fn default() -> Self {
        Self {
            continuity_probability: 0.85,
            headcount_weights: vec![50, 20, 15, 10, 5],
        }
    }
}

impl OccupancyModel {
    pub fn sampler(&self) -> Result<OccupancySampler> {
        if !(0.0..=1.0).contains(&self.continuity_probability) {
            bail!(
                "continuity probability out of range: expected 0-1, got {}",
                self.continuity_probability
            );
        }

        let headcount = WeightedIndex::new(&self.headcount_weights)
            .context("invalid headcount weights")?;

        Ok(OccupancySampler {
            continuity_probability: self.continuity_probability,
            headcount,
        })
    }
}

#[derive(Debug, Clone)]
pub struct OccupancySampler {
    continuity_probability: f64,
    headcount: WeightedIndex<u32>,
}

impl OccupancySampler {
    /// Returns `None` when the occupants stay as they were, otherwise a fresh
    /// set of distinct tokens drawn from `tokens`.
    pub fn transition<R: Rng>(
        &self,
        tokens: &[BadgeToken],
        rng: &mut R,
    ) -> Option<IndexSet<BadgeToken>> {
        if rng.r#gen::<f64>() < self.continuity_probability {
            return None;
        }

        let headcount = self.headcount.sample(rng).min(tokens.len());

        Some(tokens.choose_multiple(rng, headcount).cloned().collect())
    }
}
