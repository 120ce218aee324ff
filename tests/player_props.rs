//! Property tests for roll, hold and the win threshold.

use pig::{computer_decision, create_player, Decision, Player, PlayerKind, WINNING_SCORE};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_roll_adds_or_busts(start in 0u32..200, rolls in prop::collection::vec(1u32..=6, 0..40)) {
        let mut player = Player::human("p").with_score(start);
        let mut expected = 0;

        for roll in rolls {
            let before_score = player.score();
            prop_assert_eq!(player.apply_roll(roll), roll);
            expected = if roll == 1 { 0 } else { expected + roll };
            prop_assert_eq!(player.turn_total(), expected);
            prop_assert_eq!(player.score(), before_score);
        }
    }

    #[test]
    fn prop_hold_absorbs_turn_total(start in 0u32..200, rolls in prop::collection::vec(2u32..=6, 0..20)) {
        let mut player = Player::human("p").with_score(start);
        for roll in rolls {
            player.apply_roll(roll);
        }
        let turn_total = player.turn_total();

        prop_assert_eq!(player.hold(), turn_total);
        prop_assert_eq!(player.score(), start + turn_total);
        prop_assert_eq!(player.turn_total(), 0);
    }

    #[test]
    fn prop_winner_iff_threshold_and_monotonic(start in 0u32..300, banked in prop::collection::vec(0u32..30, 0..10)) {
        let mut player = Player::human("p").with_score(start);
        let mut was_winner = player.is_winner();
        prop_assert_eq!(was_winner, start >= WINNING_SCORE);

        for points in banked {
            if points > 1 {
                player.apply_roll(points);
            }
            player.hold();
            prop_assert_eq!(player.is_winner(), player.score() >= WINNING_SCORE);
            prop_assert!(!was_winner || player.is_winner());
            was_winner = player.is_winner();
        }
    }

    #[test]
    fn prop_computer_player_matches_policy(score in 0u32..150, rolls in prop::collection::vec(2u32..=6, 0..6)) {
        let mut bot = create_player("computer", "bot").unwrap().with_score(score);
        for roll in rolls {
            bot.apply_roll(roll);
        }
        prop_assert_eq!(bot.make_decision(), Some(computer_decision(bot.score(), bot.turn_total())));
    }
}

#[test]
fn test_factory_kinds() {
    assert_eq!(create_player("human", "a").unwrap().kind(), PlayerKind::Human);
    assert_eq!(create_player("computer", "b").unwrap().kind(), PlayerKind::Computer);
    assert!(create_player("alien", "c").is_err());
}

#[test]
fn test_computer_scenario_from_ninety_five() {
    let mut bot = create_player("computer", "bot").unwrap().with_score(95);
    assert_eq!(bot.make_decision(), Some(Decision::Roll));
    bot.apply_roll(5);
    bot.apply_roll(5);
    assert_eq!(bot.make_decision(), Some(Decision::Hold));
}
