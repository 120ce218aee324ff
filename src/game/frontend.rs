//! The seam between the engine and whatever drives it.
//!
//! A `Frontend` supplies the decisions of human players and receives every
//! `GameEvent`. The console binary implements it with prompts and printed
//! lines; `Recorder` implements it with a fixed script, for tests and
//! unattended games.

use std::collections::VecDeque;

use crate::core::{Player, PlayerMap};
use crate::error::PigError;
use crate::rules::Decision;

use super::event::GameEvent;

pub trait Frontend {
    /// Ask for a human player's next decision.
    ///
    /// Blocks for as long as the front end needs; the engine does not
    /// interrupt a pending decision.
    fn decide(&mut self, player: &Player) -> Result<Decision, PigError>;

    /// Observe an event. `players` is the state after the event.
    fn notify(&mut self, _event: &GameEvent, _players: &PlayerMap<Player>) {}
}

/// Frontend that answers from a script and records every event.
///
/// Once the script runs out, every further decision is `fallback`.
#[derive(Clone, Debug)]
pub struct Recorder {
    script: VecDeque<Decision>,
    fallback: Decision,
    events: Vec<GameEvent>,
}

impl Recorder {
    /// A recorder that always answers `fallback`.
    #[must_use]
    pub fn new(fallback: Decision) -> Self {
        Self {
            script: VecDeque::new(),
            fallback,
            events: Vec::new(),
        }
    }

    /// A recorder that plays `script` in order, then `fallback`.
    #[must_use]
    pub fn scripted(script: impl IntoIterator<Item = Decision>, fallback: Decision) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of scripted decisions not yet consumed.
    #[must_use]
    pub fn remaining_script(&self) -> usize {
        self.script.len()
    }
}

impl Frontend for Recorder {
    fn decide(&mut self, _player: &Player) -> Result<Decision, PigError> {
        Ok(self.script.pop_front().unwrap_or(self.fallback))
    }

    fn notify(&mut self, event: &GameEvent, _players: &PlayerMap<Player>) {
        self.events.push(event.clone());
    }
}
