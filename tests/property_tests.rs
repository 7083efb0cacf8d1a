//! Property tests over random seeds and action sequences.

use proptest::prelude::*;

use kuhn_poker::{KuhnPoker, PlayerId};

/// Play indices until the hand ends; returns the number of actions taken.
fn play_out(game: &mut KuhnPoker, choices: &[bool]) -> usize {
    let mut taken = 0;
    for &bet in choices {
        if game.is_terminal() {
            break;
        }
        game.apply_index(i64::from(bet)).unwrap();
        taken += 1;
    }
    taken
}

proptest! {
    #[test]
    fn prop_hands_end_zero_sum_within_three_actions(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<bool>(), 3),
    ) {
        let mut game = KuhnPoker::from_seed(seed);
        let taken = play_out(&mut game, &choices);

        prop_assert!(game.is_terminal());
        prop_assert!((2..=3).contains(&taken));
        let payoff = game.payoff().unwrap();
        prop_assert_eq!(payoff.sum(), 0);
        prop_assert!(payoff.get(PlayerId::P0).abs() <= 2);
    }

    #[test]
    fn prop_info_set_hides_opponent_card(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<bool>(), 0..=3),
    ) {
        let mut game = KuhnPoker::from_seed(seed);
        play_out(&mut game, &choices);

        let deal = game.deal();
        for player in PlayerId::all() {
            let info = game.info_set(player);
            prop_assert!(info.starts_with(deal.card(player).symbol()));
            prop_assert!(!info.contains(deal.card(player.opponent()).symbol()));
            prop_assert_eq!(info.len(), 2 + game.history().len());
        }
    }

    #[test]
    fn prop_invalid_index_never_mutates(
        seed in any::<u64>(),
        index in prop_oneof![i64::MIN..0i64, 2..i64::MAX],
        choices in prop::collection::vec(any::<bool>(), 0..=3),
    ) {
        let mut game = KuhnPoker::from_seed(seed);
        play_out(&mut game, &choices);
        let before = game.state().clone();

        let err = game.apply_index(index).unwrap_err();
        if before.is_terminal() {
            prop_assert!(err.is_illegal_state());
        } else {
            prop_assert!(err.is_invalid_action());
        }
        prop_assert_eq!(game.state(), &before);
    }

    #[test]
    fn prop_reset_deals_distinct_cards(seed in any::<u64>(), hands in 1usize..20) {
        let mut game = KuhnPoker::from_seed(seed);
        for _ in 0..hands {
            let (a, b) = game.reset().as_pair();
            prop_assert_ne!(a, b);
            prop_assert_eq!(game.current_player(), Some(PlayerId::P0));
        }
    }
}
