//! Roll/hold decisions and the computer heuristic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::config::{COMPUTER_HOLD_AT, WINNING_SCORE};
use crate::error::PigError;

/// A player's choice within a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Roll the die again.
    Roll,
    /// Bank the turn total and end the turn.
    Hold,
}

impl FromStr for Decision {
    type Err = PigError;

    /// Accepts `r`/`roll` and `h`/`hold`, ignoring case and surrounding space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "roll" => Ok(Decision::Roll),
            "h" | "hold" => Ok(Decision::Hold),
            other => Err(PigError::InvalidDecision(other.to_string())),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Roll => write!(f, "roll"),
            Decision::Hold => write!(f, "hold"),
        }
    }
}

/// The computer's fixed policy: keep rolling until the turn is worth
/// `COMPUTER_HOLD_AT` points, then bank.
#[must_use]
pub fn computer_decision(score: u32, turn_total: u32) -> Decision {
    if score < WINNING_SCORE && turn_total < COMPUTER_HOLD_AT {
        Decision::Roll
    } else {
        Decision::Hold
    }
}
