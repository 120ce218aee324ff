//! # pig
//!
//! The dice game Pig for two players, human or computer, with an optional
//! time limit.
//!
//! ## Rules
//!
//! On your turn, roll a six-sided die as often as you like. Each roll adds
//! to your turn total, except a 1, which wipes the turn total and ends your
//! turn. Hold to bank the turn total into your score. The first player to
//! reach 100 wins.
//!
//! ## Design
//!
//! - **Injected randomness**: the die rolls with a seedable `GameRng` owned
//!   by the game, so any game can be replayed from its seed.
//! - **Frontend seam**: the engine never reads input or prints. Human
//!   decisions come from a `Frontend`, which also receives every event.
//! - **Composition over wrapping**: `TimedGame` owns a `Game` and adds a
//!   deadline checked at turn boundaries.
//!
//! ## Modules
//!
//! - `core`: Die, players, RNG, constants
//! - `rules`: Decisions, computer policy, game results
//! - `game`: Turn sequencing, timed games, events, frontends
//! - `cli`: Console front end for the `pig` binary (feature `cli`)

pub mod core;
pub mod error;
pub mod game;
pub mod rules;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use crate::core::{
    create_player, Die, GameRng, GameRngState, Player, PlayerId, PlayerKind, PlayerMap, TimeLimit,
    WINNING_SCORE,
};

pub use crate::error::PigError;

pub use crate::rules::{computer_decision, Decision, GameResult};

pub use crate::game::{
    Clock, Frontend, Game, GameEvent, ManualClock, Recorder, SystemClock, TimedGame, TurnOutcome,
};
