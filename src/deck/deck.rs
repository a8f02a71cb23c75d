//! The deck: a validated, immutable collection of cards.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::error::{DeckError, InvariantViolation};
use super::{builder, validate};
use crate::core::order::Order;
use crate::core::symbol::CardIndex;

/// A full projective-plane deck.
///
/// Immutable after construction: `n² + n + 1` cards of `n + 1` symbols
/// each, any two distinct cards sharing exactly one symbol, all symbols of
/// the universe covered. [`Deck::build`] only returns decks for which
/// validation has passed.
///
/// ## Example
///
/// ```
/// use rust_spotit::{Deck, Order};
///
/// let deck = Deck::build(Order::new(2).unwrap()).unwrap();
/// assert_eq!(deck.len(), 7);
///
/// let first = deck.cards().first().unwrap();
/// assert_eq!(first.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    order: Order,
    cards: Vec<Card>,
}

impl Deck {
    /// Build and validate the deck for an order.
    ///
    /// Deterministic: the same order always yields the same deck. Fails
    /// with [`DeckError::Invariant`] if the constructed cards violate the
    /// deck invariants, which happens exactly when the order is not a
    /// prime power. No partial deck is ever returned.
    pub fn build(order: Order) -> Result<Self, DeckError> {
        builder::build(order)
    }

    /// Assemble a deck from construction output. Callers must validate.
    pub(crate) fn from_parts(order: Order, cards: Vec<Card>) -> Self {
        Self { order, cards }
    }

    /// The order this deck was built for.
    #[must_use]
    pub const fn order(&self) -> Order {
        self.order
    }

    /// Number of cards: `n² + n + 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards. Never true for built decks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by index.
    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.as_usize())
    }

    /// All cards in construction order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over the cards in construction order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Iterate over all valid card indices.
    pub fn indices(&self) -> impl Iterator<Item = CardIndex> {
        (0..self.cards.len() as u32).map(CardIndex::new)
    }

    /// Re-check the deck invariants.
    ///
    /// Always passes for decks returned by [`Deck::build`]; exposed so
    /// that callers holding a deserialized deck can verify it before use.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        validate::validate(self.order, &self.cards)
    }
}
