//! Game constants and run configuration.
//!
//! The rules of Pig are fixed: a six-sided die and a winning score of 100.
//! The only run-time knob is the optional time limit, which is validated
//! here before any game is built.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PigError;

/// Score at which a player wins.
pub const WINNING_SCORE: u32 = 100;

/// Faces on the game die.
pub const DEFAULT_SIDES: u32 = 6;

/// Turn total at which the computer player banks its points.
pub const COMPUTER_HOLD_AT: u32 = 10;

/// Time limit used when timed mode is requested without a value.
pub const DEFAULT_TIME_LIMIT: TimeLimit = TimeLimit(60);

/// A positive wall-clock limit in whole seconds.
///
/// ```
/// use pig::core::TimeLimit;
///
/// let limit: TimeLimit = "90".parse().unwrap();
/// assert_eq!(limit.as_secs(), 90);
/// assert!("0".parse::<TimeLimit>().is_err());
/// assert!("soon".parse::<TimeLimit>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct TimeLimit(u64);

impl TimeLimit {
    /// Create a time limit, rejecting zero.
    pub fn new(secs: u64) -> Result<Self, PigError> {
        if secs == 0 {
            return Err(PigError::InvalidTimeLimit(
                "time limit must be greater than zero".to_string(),
            ));
        }
        Ok(Self(secs))
    }

    #[must_use]
    pub const fn as_secs(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn as_duration(self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl TryFrom<u64> for TimeLimit {
    type Error = PigError;

    fn try_from(secs: u64) -> Result<Self, Self::Error> {
        Self::new(secs)
    }
}

impl From<TimeLimit> for u64 {
    fn from(limit: TimeLimit) -> Self {
        limit.0
    }
}

impl Default for TimeLimit {
    fn default() -> Self {
        DEFAULT_TIME_LIMIT
    }
}

impl FromStr for TimeLimit {
    type Err = PigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let secs = s
            .trim()
            .parse::<u64>()
            .map_err(|_| PigError::InvalidTimeLimit(format!("'{}' is not a whole number of seconds", s.trim())))?;
        Self::new(secs)
    }
}

impl fmt::Display for TimeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
