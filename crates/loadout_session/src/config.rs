//! Configuration for a build session.

use loadout_foundation::{DefName, Error, Result};

/// Configuration for a build session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Fixed point budget. `None` takes the budget from the build's cost
    /// right after initialization, so a fresh build has zero points left.
    pub starting_points: Option<i64>,

    /// Race whose hair resolution serves races with no specialization.
    pub baseline_race: DefName,

    /// Seed for picking scenario animal variants and random pets.
    pub rng_seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_points: None,
            baseline_race: DefName::new("Human"),
            rng_seed: 0,
        }
    }
}

impl SessionConfig {
    /// Builder method to fix the point budget.
    #[must_use]
    pub fn with_starting_points(mut self, points: i64) -> Self {
        self.starting_points = Some(points);
        self
    }

    /// Builder method to set the baseline race.
    #[must_use]
    pub fn with_baseline_race(mut self, race: impl Into<DefName>) -> Self {
        self.baseline_race = race.into();
        self
    }

    /// Builder method to set the RNG seed.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the baseline race name is empty.
    pub fn validate(&self) -> Result<()> {
        if self.baseline_race.is_empty() {
            return Err(Error::invalid_config("baseline race is empty"));
        }
        Ok(())
    }
}
