//! Command line front end for the `pig` binary.

mod console;

pub use console::{describe, prompt, Console};

use clap::Parser;
use log::info;

use crate::core::{create_player, GameRng, Player, PlayerId, PlayerKind, TimeLimit};
use crate::error::PigError;
use crate::game::{Game, TimedGame};
use crate::rules::GameResult;

/// Play Pig: roll to build a turn total, hold to bank it, first to 100 wins.
#[derive(Parser, Debug, Clone)]
#[command(name = "pig", version, about)]
pub struct Args {
    /// Stop the game when a time limit runs out
    #[arg(long)]
    pub timed: bool,

    /// Time limit in seconds; implies --timed and skips the prompt
    #[arg(long, value_name = "SECS")]
    pub time_limit: Option<TimeLimit>,

    /// Player 1 type (human or computer); prompted when absent
    #[arg(long, value_name = "TYPE")]
    pub player1: Option<PlayerKind>,

    /// Player 2 type (human or computer); prompted when absent
    #[arg(long, value_name = "TYPE")]
    pub player2: Option<PlayerKind>,

    /// Seed the dice for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log game internals to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Whether the game should be time-boxed.
    pub fn is_timed(&self) -> bool {
        self.timed || self.time_limit.is_some()
    }
}

/// Initialize terminal logging on stderr.
pub fn log(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

/// Set up the players and play one game on the console.
pub fn run(args: &Args) -> Result<GameResult, PigError> {
    let one = seat(args.player1, PlayerId::ONE)?;
    let two = seat(args.player2, PlayerId::TWO)?;

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!("dice seed {}", rng.seed());

    let mut game = Game::new(one, two, rng);
    let mut console = Console;

    if args.is_timed() {
        let time_limit = match args.time_limit {
            Some(limit) => limit,
            None => time_limit_from_answer(&prompt(&format!(
                "Enter time limit in seconds (default {})",
                TimeLimit::default().as_secs()
            ))?)?,
        };
        TimedGame::new(game, time_limit).play_game(&mut console)
    } else {
        game.play_game(&mut console)
    }
}

/// Parse the answer to the time limit prompt; a blank answer takes the default.
fn time_limit_from_answer(answer: &str) -> Result<TimeLimit, PigError> {
    if answer.trim().is_empty() {
        Ok(TimeLimit::default())
    } else {
        answer.parse()
    }
}

fn seat(kind: Option<PlayerKind>, id: PlayerId) -> Result<Player, PigError> {
    let name = id.to_string();
    match kind {
        Some(kind) => Ok(Player::new(name, kind)),
        None => {
            let tag = prompt(&format!("Enter {} type (human or computer)", name.to_lowercase()))?;
            create_player(&tag, name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["pig"]).unwrap();
        assert!(!args.is_timed());
        assert_eq!(args.player1, None);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn test_args_full() {
        let args = Args::try_parse_from([
            "pig",
            "--time-limit",
            "30",
            "--player1",
            "computer",
            "--player2",
            "human",
            "--seed",
            "7",
            "-v",
        ])
        .unwrap();

        assert!(args.is_timed());
        assert_eq!(args.time_limit, Some(TimeLimit::new(30).unwrap()));
        assert_eq!(args.player1, Some(PlayerKind::Computer));
        assert_eq!(args.player2, Some(PlayerKind::Human));
        assert_eq!(args.seed, Some(7));
        assert!(args.verbose);
    }

    #[test]
    fn test_args_reject_bad_values() {
        assert!(Args::try_parse_from(["pig", "--time-limit", "0"]).is_err());
        assert!(Args::try_parse_from(["pig", "--time-limit", "soon"]).is_err());
        assert!(Args::try_parse_from(["pig", "--player1", "robot"]).is_err());
    }

    #[test]
    fn test_blank_time_limit_answer_uses_default() {
        assert_eq!(time_limit_from_answer("").unwrap(), TimeLimit::default());
        assert_eq!(time_limit_from_answer("  ").unwrap().as_secs(), 60);
        assert_eq!(time_limit_from_answer("25").unwrap().as_secs(), 25);
        assert!(matches!(time_limit_from_answer("0"), Err(PigError::InvalidTimeLimit(_))));
        assert!(matches!(time_limit_from_answer("ten"), Err(PigError::InvalidTimeLimit(_))));
    }

    #[test]
    fn test_computer_game_runs_without_prompts() {
        let args = Args::try_parse_from(["pig", "--player1", "computer", "--player2", "computer", "--seed", "3"])
            .unwrap();

        let result = run(&args).unwrap();
        assert!(result.winner().is_some());
    }
}
