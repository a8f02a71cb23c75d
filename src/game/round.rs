//! A dealt round: two distinct cards and the outcome of a pick.

use serde::{Deserialize, Serialize};

use crate::core::symbol::{CardIndex, SymbolId};
use crate::deck::Deck;

/// Two distinct cards dealt for one round.
///
/// In a validated deck the two cards share exactly one symbol, and
/// finding it is the game. `left`/`right` only name the display slots;
/// the pair is otherwise unordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Round {
    /// First dealt card.
    pub left: CardIndex,
    /// Second dealt card.
    pub right: CardIndex,
}

impl Round {
    /// Create a round over two distinct cards.
    pub(crate) fn new(left: CardIndex, right: CardIndex) -> Self {
        debug_assert_ne!(left, right, "a round needs two distinct cards");
        Self { left, right }
    }

    /// The one symbol both cards hold.
    ///
    /// Returns `None` if either index is outside `deck`; a round must be
    /// resolved against the deck it was dealt from. For rounds dealt by
    /// [`MatchGame::deal`](super::MatchGame::deal) against its own deck
    /// this is always `Some`.
    #[must_use]
    pub fn common_symbol(&self, deck: &Deck) -> Option<SymbolId> {
        let left = deck.card(self.left)?;
        let right = deck.card(self.right)?;
        left.shared_with(right).first().copied()
    }
}

/// Result of submitting two picked symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Both picks were the shared symbol.
    Match {
        /// The symbol both players picked.
        symbol: SymbolId,
    },
    /// The picks differ.
    Mismatch,
}

impl MatchOutcome {
    /// Check if this outcome is a match.
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, MatchOutcome::Match { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::order::Order;

    #[test]
    fn test_common_symbol_of_reference_cards() {
        let deck = Deck::build(Order::new(2).unwrap()).unwrap();
        let round = Round::new(CardIndex::new(0), CardIndex::new(1));

        // Reference cards share exactly the root symbol.
        assert_eq!(round.common_symbol(&deck), Some(SymbolId::new(0)));
    }

    #[test]
    fn test_common_symbol_out_of_range() {
        let deck = Deck::build(Order::new(2).unwrap()).unwrap();
        let round = Round::new(CardIndex::new(0), CardIndex::new(99));

        assert_eq!(round.common_symbol(&deck), None);
    }

    #[test]
    fn test_outcome_flags() {
        assert!(MatchOutcome::Match {
            symbol: SymbolId::new(3)
        }
        .is_match());
        assert!(!MatchOutcome::Mismatch.is_match());
    }
}
