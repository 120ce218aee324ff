//! Core game types: die, players, RNG, constants.
//!
//! These are the leaf building blocks; `game` drives them.

pub mod config;
pub mod die;
pub mod player;
pub mod rng;

pub use config::{TimeLimit, COMPUTER_HOLD_AT, DEFAULT_SIDES, DEFAULT_TIME_LIMIT, WINNING_SCORE};
pub use die::Die;
pub use player::{create_player, Player, PlayerId, PlayerKind, PlayerMap};
pub use rng::{GameRng, GameRngState};
