//! A fair die.

use serde::{Deserialize, Serialize};

use super::config::DEFAULT_SIDES;
use super::rng::GameRng;

/// A die with a fixed number of sides.
///
/// The die holds no randomness of its own; the owning game lends it a
/// `GameRng` for every roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    sides: u32,
}

impl Die {
    /// Create a die with `sides` faces numbered `1..=sides`.
    #[must_use]
    pub fn new(sides: u32) -> Self {
        assert!(sides >= 1, "Die must have at least 1 side");
        Self { sides }
    }

    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Roll the die, returning a value in `1..=sides`.
    pub fn roll(&self, rng: &mut GameRng) -> u32 {
        rng.gen_range_inclusive(1, self.sides)
    }
}

impl Default for Die {
    fn default() -> Self {
        Self::new(DEFAULT_SIDES)
    }
}
