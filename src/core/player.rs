//! Player identification, per-seat storage and player state.
//!
//! ## PlayerId
//!
//! Seat identifier for the two players of a game.
//!
//! ## PlayerMap
//!
//! Fixed two-seat storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! Name, banked score and current turn total, plus the kind tag that decides
//! where the player's roll/hold decisions come from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::config::WINNING_SCORE;
use super::die::Die;
use super::rng::GameRng;
use crate::error::PigError;
use crate::rules::{computer_decision, Decision};

/// Seat identifier. Seats are 0-based: `PlayerId::ONE` is seat 0.
///
/// Only the two seats exist; deserialization rejects any other index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first seat, who takes the opening turn.
    pub const ONE: PlayerId = PlayerId(0);
    /// The second seat.
    pub const TWO: PlayerId = PlayerId(1);

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// Both seats in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::ONE, PlayerId::TWO].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = PigError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 | 1 => Ok(PlayerId(index)),
            _ => Err(PigError::InvalidSeat(index)),
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-seat data storage for the two players.
///
/// ```
/// use pig::core::{PlayerId, PlayerMap};
///
/// let mut scores = PlayerMap::new(|_| 0u32);
/// scores[PlayerId::TWO] = 15;
/// assert_eq!(scores[PlayerId::ONE], 0);
/// assert_eq!(scores[PlayerId::TWO], 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a PlayerMap from the two seats' values in order.
    pub fn from_pair(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Where a player's decisions come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Decisions are supplied by the front end.
    Human,
    /// Decisions follow the fixed hold-at-10 heuristic.
    Computer,
}

impl FromStr for PlayerKind {
    type Err = PigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "computer" => Ok(PlayerKind::Computer),
            _ => Err(PigError::InvalidPlayerType(s.trim().to_string())),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Computer => write!(f, "computer"),
        }
    }
}

/// A Pig player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    score: u32,
    turn_total: u32,
}

impl Player {
    /// Create a player with a zero score and turn total.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            score: 0,
            turn_total: 0,
        }
    }

    #[must_use]
    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Human)
    }

    #[must_use]
    pub fn computer(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Computer)
    }

    /// Start the player from a banked score, e.g. to resume a game.
    #[must_use]
    pub fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn turn_total(&self) -> u32 {
        self.turn_total
    }

    /// Roll `die` and apply the result to the turn total.
    ///
    /// Returns the rolled value; a 1 means the turn total was lost.
    pub fn roll_die(&mut self, die: &Die, rng: &mut GameRng) -> u32 {
        let value = die.roll(rng);
        self.apply_roll(value)
    }

    /// Apply an already-rolled value to the turn total.
    pub fn apply_roll(&mut self, value: u32) -> u32 {
        if value == 1 {
            self.turn_total = 0;
        } else {
            self.turn_total += value;
        }
        value
    }

    /// Bank the turn total into the score. Returns the amount banked.
    pub fn hold(&mut self) -> u32 {
        let banked = self.turn_total;
        self.score += banked;
        self.turn_total = 0;
        banked
    }

    /// Has this player reached the winning score?
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.score >= WINNING_SCORE
    }

    /// The player's own decision, if it makes its own.
    ///
    /// Computer players decide from their score and turn total alone.
    /// Human players return `None`; their decision comes from the front end.
    #[must_use]
    pub fn make_decision(&self) -> Option<Decision> {
        match self.kind {
            PlayerKind::Computer => Some(computer_decision(self.score, self.turn_total)),
            PlayerKind::Human => None,
        }
    }
}

/// Build a player from a type tag (`"human"` or `"computer"`).
///
/// ```
/// use pig::core::{create_player, PlayerKind};
///
/// let bot = create_player("computer", "Player 2").unwrap();
/// assert_eq!(bot.kind(), PlayerKind::Computer);
/// assert!(create_player("robot", "Player 2").is_err());
/// ```
pub fn create_player(tag: &str, name: impl Into<String>) -> Result<Player, PigError> {
    let kind = tag.parse::<PlayerKind>()?;
    Ok(Player::new(name, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::ONE.index(), 0);
        assert_eq!(PlayerId::TWO.index(), 1);
        assert_eq!(PlayerId::ONE.other(), PlayerId::TWO);
        assert_eq!(PlayerId::TWO.other(), PlayerId::ONE);
        assert_eq!(format!("{}", PlayerId::ONE), "Player 1");

        let seats: Vec<_> = PlayerId::all().collect();
        assert_eq!(seats, vec![PlayerId::ONE, PlayerId::TWO]);
    }

    #[test]
    fn test_player_id_only_two_seats() {
        assert_eq!(PlayerId::try_from(0), Ok(PlayerId::ONE));
        assert_eq!(PlayerId::try_from(1), Ok(PlayerId::TWO));
        assert_eq!(PlayerId::try_from(2), Err(PigError::InvalidSeat(2)));
        assert_eq!(u8::from(PlayerId::TWO), 1);
    }

    #[test]
    fn test_player_id_serde_rejects_unknown_seat() {
        assert_eq!(serde_json::to_string(&PlayerId::TWO).unwrap(), "1");
        assert_eq!(serde_json::from_str::<PlayerId>("0").unwrap(), PlayerId::ONE);
        assert!(serde_json::from_str::<PlayerId>("2").is_err());
        assert!(serde_json::from_str::<PlayerId>("255").is_err());
    }

    #[test]
    fn test_player_map() {
        let mut map = PlayerMap::new(|p| p.index() as u32 * 10);
        assert_eq!(map[PlayerId::ONE], 0);
        assert_eq!(map[PlayerId::TWO], 10);

        map[PlayerId::ONE] = 5;
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::ONE, &5), (PlayerId::TWO, &10)]);
    }

    #[test]
    fn test_new_player_is_zeroed() {
        let player = Player::human("Ada");
        assert_eq!(player.name(), "Ada");
        assert_eq!(player.score(), 0);
        assert_eq!(player.turn_total(), 0);
        assert!(!player.is_winner());
    }

    #[test]
    fn test_scenario_roll_then_bust() {
        let mut player = Player::human("Player 1");

        assert_eq!(player.apply_roll(4), 4);
        assert_eq!(player.turn_total(), 4);
        assert_eq!(player.apply_roll(5), 5);
        assert_eq!(player.turn_total(), 9);
        assert_eq!(player.apply_roll(1), 1);
        assert_eq!(player.turn_total(), 0);
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_scenario_roll_then_hold() {
        let mut player = Player::human("Player 1");
        player.apply_roll(4);
        player.apply_roll(5);
        assert_eq!(player.turn_total(), 9);

        player.apply_roll(3);
        assert_eq!(player.turn_total(), 12);

        assert_eq!(player.hold(), 12);
        assert_eq!(player.score(), 12);
        assert_eq!(player.turn_total(), 0);
    }

    #[test]
    fn test_roll_die_uses_die() {
        let mut player = Player::computer("Bot");
        let mut rng = GameRng::new(42);
        let die = Die::default();

        let mut expected_total = 0;
        for _ in 0..50 {
            let value = player.roll_die(&die, &mut rng);
            assert!((1..=6).contains(&value));
            if value == 1 {
                expected_total = 0;
            } else {
                expected_total += value;
            }
            assert_eq!(player.turn_total(), expected_total);
        }
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_winning_threshold() {
        assert!(!Player::human("a").with_score(99).is_winner());
        assert!(Player::human("a").with_score(100).is_winner());
        assert!(Player::human("a").with_score(130).is_winner());
    }

    #[test]
    fn test_human_has_no_own_decision() {
        assert_eq!(Player::human("a").make_decision(), None);
        assert_eq!(Player::computer("b").make_decision(), Some(Decision::Roll));
    }

    #[test]
    fn test_computer_scenario() {
        let mut bot = Player::computer("Bot").with_score(95);
        assert_eq!(bot.make_decision(), Some(Decision::Roll));

        bot.apply_roll(6);
        bot.apply_roll(4);
        assert_eq!(bot.turn_total(), 10);
        assert_eq!(bot.score(), 95);
        assert_eq!(bot.make_decision(), Some(Decision::Hold));
    }

    #[test]
    fn test_create_player() {
        let human = create_player("human", "Player 1").unwrap();
        assert_eq!(human.kind(), PlayerKind::Human);
        assert_eq!(human.name(), "Player 1");
        assert_eq!(human.score(), 0);

        let bot = create_player(" Computer ", "Player 2").unwrap();
        assert_eq!(bot.kind(), PlayerKind::Computer);
    }

    #[test]
    fn test_create_player_rejects_unknown_tag() {
        assert_eq!(
            create_player("wizard", "Player 1"),
            Err(PigError::InvalidPlayerType("wizard".to_string()))
        );
        assert!(create_player("", "Player 1").is_err());
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::computer("Bot").with_score(40);
        player.apply_roll(5);

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
