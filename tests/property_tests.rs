//! Property tests over deck construction and match checking.

use proptest::prelude::*;
use rust_spotit::{build_deck, DeckError, MatchGame, Order};

proptest! {
    /// Every prime-power order in the displayable range builds a deck
    /// that passes full validation.
    #[test]
    fn prime_power_orders_build(n in 2i64..=13) {
        prop_assume!(Order::new(n).unwrap().is_prime_power());

        let deck = build_deck(n).unwrap();
        prop_assert_eq!(deck.len(), (n * n + n + 1) as usize);
        prop_assert!(deck.validate().is_ok());
    }

    /// Every order below the supported minimum is rejected up front.
    #[test]
    fn small_orders_are_rejected(n in -1000i64..2) {
        prop_assert_eq!(build_deck(n), Err(DeckError::InvalidOrder { order: n }));
    }

    /// Dealing never pairs a card with itself, whatever the seed.
    #[test]
    fn deal_is_always_distinct(seed in any::<u64>()) {
        let mut game = MatchGame::builder().order(3).seed(seed).build().unwrap();
        for _ in 0..20 {
            let round = game.deal();
            prop_assert_ne!(round.left, round.right);
        }
    }

    /// A submission matches exactly when the two on-card picks are the
    /// same symbol, which can only be the shared one.
    #[test]
    fn submit_matches_iff_picks_are_equal(
        seed in any::<u64>(),
        left_slot in 0usize..4,
        right_slot in 0usize..4,
    ) {
        let mut game = MatchGame::builder().order(3).seed(seed).build().unwrap();
        let round = game.deal();

        let left_pick = game.deck().card(round.left).unwrap().symbols()[left_slot];
        let right_pick = game.deck().card(round.right).unwrap().symbols()[right_slot];

        let outcome = game.submit(round, left_pick, right_pick).unwrap();
        prop_assert_eq!(outcome.is_match(), left_pick == right_pick);
    }
}
