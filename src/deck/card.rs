//! A single card: a fixed-size set of unique symbols.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::symbol::SymbolId;

/// A card in a deck.
///
/// Holds exactly `n + 1` unique symbols for a deck of order `n`. Symbol
/// order within the card follows the construction and carries no meaning;
/// comparison helpers treat the card as a set.
///
/// Cards are only created by the deck builder, so a `Card` taken from a
/// validated [`Deck`](super::Deck) always satisfies the uniqueness
/// invariant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// SmallVec keeps every order the bundled alphabets can display
    /// (n ≤ 7, so 8 symbols per card) inline without heap allocation.
    symbols: SmallVec<[SymbolId; 8]>,
}

impl Card {
    /// Create a card from construction output.
    pub(crate) fn from_symbols(symbols: SmallVec<[SymbolId; 8]>) -> Self {
        Self { symbols }
    }

    /// Number of symbols on this card.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the card has no symbols. Never true for built decks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check if the card holds a symbol.
    #[must_use]
    pub fn contains(&self, symbol: SymbolId) -> bool {
        self.symbols.contains(&symbol)
    }

    /// The card's symbols in construction order.
    #[must_use]
    pub fn symbols(&self) -> &[SymbolId] {
        &self.symbols
    }

    /// Iterate over the card's symbols.
    pub fn iter(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.symbols.iter().copied()
    }

    /// Symbols this card shares with another.
    ///
    /// For two distinct cards of a validated deck this always yields
    /// exactly one symbol.
    #[must_use]
    pub fn shared_with(&self, other: &Card) -> Vec<SymbolId> {
        let other_set: FxHashSet<SymbolId> = other.iter().collect();
        self.iter().filter(|s| other_set.contains(s)).collect()
    }
}
