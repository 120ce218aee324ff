//! Events emitted while a game is played.
//!
//! The engine never prints. It reports what happened through
//! `Frontend::notify`, and the front end decides how to show it.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::rules::GameResult;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player's turn begins.
    TurnStarted { player: PlayerId },
    /// A die was rolled. `turn_total` is the total after applying it.
    Rolled {
        player: PlayerId,
        value: u32,
        turn_total: u32,
    },
    /// The roll was a 1; the turn total is lost and the turn is over.
    Busted { player: PlayerId },
    /// The player banked `banked` points, bringing their score to `score`.
    Held {
        player: PlayerId,
        banked: u32,
        score: u32,
    },
    /// Standings before a turn.
    Scores,
    /// Whole seconds left on the clock before a turn.
    TimeRemaining { secs: u64 },
    /// The deadline passed before the game was decided.
    TimeExpired,
    /// The game is over.
    Finished(GameResult),
}

impl GameEvent {
    /// The player the event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::TurnStarted { player }
            | GameEvent::Rolled { player, .. }
            | GameEvent::Busted { player }
            | GameEvent::Held { player, .. } => Some(*player),
            _ => None,
        }
    }
}
