//! Time-boxed games.
//!
//! `TimedGame` owns a `Game` and checks a deadline at every turn boundary.
//! The check is polled, never preemptive: a human deliberating over a
//! single roll/hold prompt can run past the deadline, and the overshoot is
//! only noticed when the turn ends.
//!
//! When time runs out with nobody at the winning score, the higher score
//! wins and equal scores tie.

use std::time::Duration;

use log::info;

use crate::core::{PlayerId, TimeLimit};
use crate::error::PigError;
use crate::rules::GameResult;

use super::clock::{Clock, SystemClock};
use super::event::GameEvent;
use super::frontend::Frontend;
use super::game::Game;

/// A `Game` with a deadline, measured on `C` from construction.
#[derive(Debug)]
pub struct TimedGame<C: Clock = SystemClock> {
    game: Game,
    clock: C,
    start: Duration,
    time_limit: TimeLimit,
}

impl TimedGame<SystemClock> {
    /// Time-box `game` against the wall clock, starting now.
    pub fn new(game: Game, time_limit: TimeLimit) -> Self {
        Self::with_clock(game, time_limit, SystemClock::new())
    }
}

impl<C: Clock> TimedGame<C> {
    /// Time-box `game` against `clock`, starting at the clock's current time.
    pub fn with_clock(game: Game, time_limit: TimeLimit, clock: C) -> Self {
        let start = clock.now();
        Self {
            game,
            clock,
            start,
            time_limit,
        }
    }

    /// The wrapped game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The configured limit.
    pub fn time_limit(&self) -> TimeLimit {
        self.time_limit
    }

    /// Time since the game was built.
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_sub(self.start)
    }

    /// Time left before the deadline, zero once it has passed.
    pub fn remaining(&self) -> Duration {
        self.time_limit.as_duration().saturating_sub(self.elapsed())
    }

    /// Has the deadline passed?
    pub fn is_expired(&self) -> bool {
        self.elapsed() >= self.time_limit.as_duration()
    }

    /// Hand the turn to the other seat.
    pub fn switch_player(&mut self) {
        self.game.switch_player();
    }

    /// Play one turn unless the deadline has already passed.
    ///
    /// Returns `Some(result)` when the game was decided, either by the
    /// deadline or by the turn's player reaching the winning score.
    pub fn play_turn<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> Result<Option<GameResult>, PigError> {
        if self.is_expired() {
            return Ok(Some(self.finish(true, frontend)));
        }

        self.game.play_turn(frontend)?;

        if self.game.current().is_winner() {
            return Ok(Some(self.finish(false, frontend)));
        }
        Ok(None)
    }

    /// Play until someone wins or the deadline passes.
    pub fn play_game<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> Result<GameResult, PigError> {
        while self.game.winner().is_none() && !self.is_expired() {
            frontend.notify(
                &GameEvent::TimeRemaining {
                    secs: self.remaining().as_secs(),
                },
                self.game.players(),
            );
            frontend.notify(&GameEvent::Scores, self.game.players());

            if let Some(result) = self.play_turn(frontend)? {
                return Ok(result);
            }
            self.switch_player();
        }

        let time_limit_exceeded = self.game.winner().is_none() && self.is_expired();
        Ok(self.finish(time_limit_exceeded, frontend))
    }

    /// Decide the game from the current scores.
    ///
    /// A player at the winning score wins, Player 1 checked first. Failing
    /// that, an expired clock gives the game to the higher score; a game
    /// that is neither won nor out of time is a tie.
    pub fn determine_winner(&self, time_limit_exceeded: bool) -> GameResult {
        let players = self.game.players();
        if players[PlayerId::ONE].is_winner() {
            GameResult::Winner(PlayerId::ONE)
        } else if players[PlayerId::TWO].is_winner() {
            GameResult::Winner(PlayerId::TWO)
        } else if time_limit_exceeded {
            GameResult::by_score(players)
        } else {
            GameResult::Draw
        }
    }

    fn finish<F: Frontend + ?Sized>(&self, time_limit_exceeded: bool, frontend: &mut F) -> GameResult {
        let result = self.determine_winner(time_limit_exceeded);
        let players = self.game.players();

        // A player at the winning score takes the game even after the deadline.
        if time_limit_exceeded && self.game.winner().is_none() {
            info!("time limit of {} reached after {:?}", self.time_limit, self.elapsed());
            frontend.notify(&GameEvent::TimeExpired, players);
        }
        match result {
            GameResult::Winner(seat) => info!("{} wins with {}", players[seat].name(), players[seat].score()),
            GameResult::Draw => info!("game tied at {}", players[PlayerId::ONE].score()),
        }
        frontend.notify(&GameEvent::Finished(result), players);
        result
    }
}
