//! Turn sequencing and win detection.

use log::{debug, info};

use crate::core::{Die, GameRng, GameRngState, Player, PlayerId, PlayerMap};
use crate::error::PigError;
use crate::rules::{Decision, GameResult};

use super::event::GameEvent;
use super::frontend::Frontend;

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Rolled a 1; nothing was banked.
    Busted,
    /// Held, banking `banked` points.
    Held { banked: u32 },
}

/// A two-player game of Pig.
///
/// Owns both players, the die, and the RNG the die rolls with.
/// Player 1 takes the first turn.
#[derive(Clone, Debug)]
pub struct Game {
    players: PlayerMap<Player>,
    current: PlayerId,
    die: Die,
    rng: GameRng,
    turns: u32,
}

impl Game {
    /// Seat `one` and `two` with a fresh six-sided die rolling on `rng`.
    pub fn new(one: Player, two: Player, rng: GameRng) -> Self {
        Self {
            players: PlayerMap::from_pair(one, two),
            current: PlayerId::ONE,
            die: Die::default(),
            rng,
            turns: 0,
        }
    }

    /// Both players by seat.
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// The player in seat `id`.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// The seat whose turn it is.
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// The player whose turn it is.
    pub fn current(&self) -> &Player {
        &self.players[self.current]
    }

    /// The game die.
    pub fn die(&self) -> &Die {
        &self.die
    }

    /// Turns completed so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Snapshot of the dice RNG, for replaying from this point.
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// The seat that has reached the winning score, if any.
    pub fn winner(&self) -> Option<PlayerId> {
        PlayerId::all().find(|&id| self.players[id].is_winner())
    }

    /// Hand the turn to the other seat.
    pub fn switch_player(&mut self) {
        self.current = self.current.other();
    }

    /// Play one full turn for the current player.
    ///
    /// Does not switch players afterwards.
    pub fn play_turn<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> Result<TurnOutcome, PigError> {
        let seat = self.current;
        frontend.notify(&GameEvent::TurnStarted { player: seat }, &self.players);

        let outcome = loop {
            let decision = match self.players[seat].make_decision() {
                Some(decision) => decision,
                None => frontend.decide(&self.players[seat])?,
            };

            match decision {
                Decision::Roll => {
                    let player = &mut self.players[seat];
                    let value = player.roll_die(&self.die, &mut self.rng);
                    let turn_total = player.turn_total();
                    debug!("{} rolled {} (turn total {})", player.name(), value, turn_total);

                    frontend.notify(
                        &GameEvent::Rolled {
                            player: seat,
                            value,
                            turn_total,
                        },
                        &self.players,
                    );

                    if value == 1 {
                        frontend.notify(&GameEvent::Busted { player: seat }, &self.players);
                        break TurnOutcome::Busted;
                    }
                }
                Decision::Hold => {
                    let player = &mut self.players[seat];
                    let banked = player.hold();
                    let score = player.score();
                    debug!("{} held {} (score {})", player.name(), banked, score);

                    frontend.notify(
                        &GameEvent::Held {
                            player: seat,
                            banked,
                            score,
                        },
                        &self.players,
                    );
                    break TurnOutcome::Held { banked };
                }
            }
        };

        self.turns += 1;
        Ok(outcome)
    }

    /// Play turns until someone reaches the winning score.
    ///
    /// The game ends as soon as the player who just finished a turn has
    /// won; the opponent does not get another turn.
    pub fn play_game<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> Result<GameResult, PigError> {
        let result = loop {
            if let Some(winner) = self.winner() {
                break GameResult::Winner(winner);
            }

            frontend.notify(&GameEvent::Scores, &self.players);
            self.play_turn(frontend)?;

            if self.current().is_winner() {
                break GameResult::Winner(self.current);
            }
            self.switch_player();
        };

        if let GameResult::Winner(seat) = result {
            info!(
                "{} wins with {} after {} turns",
                self.players[seat].name(),
                self.players[seat].score(),
                self.turns
            );
        }
        frontend.notify(&GameEvent::Finished(result), &self.players);
        Ok(result)
    }
}
