//! Terminal front end: dialoguer prompts in, plain text lines out.

use dialoguer::Input;

use crate::core::{Player, PlayerId, PlayerMap};
use crate::error::PigError;
use crate::game::{Frontend, GameEvent};
use crate::rules::{Decision, GameResult};

/// Prompts on stdin and prints every event as a line on stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct Console;

impl Frontend for Console {
    fn decide(&mut self, _player: &Player) -> Result<Decision, PigError> {
        let answer: String = Input::new()
            .with_prompt("Enter 'r' to roll or 'h' to hold")
            .validate_with(|s: &String| -> Result<(), String> {
                s.parse::<Decision>().map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(|e| PigError::Prompt(e.to_string()))?;
        answer.parse()
    }

    fn notify(&mut self, event: &GameEvent, players: &PlayerMap<Player>) {
        for line in describe(event, players) {
            println!("{}", line);
        }
    }
}

/// Ask for a line of free text. An empty answer is returned as-is.
pub fn prompt(text: &str) -> Result<String, PigError> {
    Input::new()
        .with_prompt(text)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| PigError::Prompt(e.to_string()))
}

/// The lines printed for an event.
pub fn describe(event: &GameEvent, players: &PlayerMap<Player>) -> Vec<String> {
    let name = |id: PlayerId| players[id].name().to_string();

    match event {
        GameEvent::TurnStarted { player } => vec![format!("{}'s turn:", name(*player))],
        GameEvent::Rolled { value, turn_total, .. } => vec![
            format!("Rolled: {}", value),
            format!("Current Turn Total: {}", turn_total),
        ],
        GameEvent::Busted { player } => vec![format!("{} rolled a 1. Turn over.", name(*player))],
        GameEvent::Held { player, .. } => vec![format!("{} decided to hold.", name(*player))],
        GameEvent::Scores => {
            let one = &players[PlayerId::ONE];
            let two = &players[PlayerId::TWO];
            vec![format!(
                "Current Scores: {}: {}, {}: {}",
                one.name(),
                one.score(),
                two.name(),
                two.score()
            )]
        }
        GameEvent::TimeRemaining { secs } => vec![format!("Time Remaining: {} seconds", secs)],
        GameEvent::TimeExpired => vec!["Time limit exceeded!".to_string()],
        GameEvent::Finished(GameResult::Winner(seat)) => {
            let winner = &players[*seat];
            vec![format!("{} wins with a score of {}!", winner.name(), winner.score())]
        }
        GameEvent::Finished(GameResult::Draw) => vec!["It's a tie!".to_string()],
    }
}
