//! Deck error types.
//!
//! Construction is all-or-nothing: callers either get a fully validated
//! deck or one of these errors. Invariant violations name the offending
//! card(s) and symbol so a failure is diagnosable without replaying the
//! construction.

use thiserror::Error;

use crate::core::symbol::{CardIndex, SymbolId};

/// Errors from deck construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// The requested order is outside the supported domain.
    #[error("invalid order {order}: supported orders are 2..=65535")]
    InvalidOrder { order: i64 },

    /// Post-construction validation failed.
    ///
    /// Either the order is not a prime power (the construction is not
    /// guaranteed there) or the builder itself is defective. A deck that
    /// fails validation is never returned.
    #[error("deck invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

/// A specific violation of the deck invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A card holds the wrong number of symbols.
    #[error("{card} holds {found} symbols, expected {expected}")]
    WrongCardSize {
        card: CardIndex,
        found: usize,
        expected: usize,
    },

    /// A card repeats a symbol.
    #[error("{card} repeats {symbol}")]
    DuplicateSymbol { card: CardIndex, symbol: SymbolId },

    /// A card holds a symbol outside the universe.
    #[error("{card} holds {symbol}, outside the {universe}-symbol universe")]
    SymbolOutOfRange {
        card: CardIndex,
        symbol: SymbolId,
        universe: usize,
    },

    /// Two cards share more or fewer than one symbol.
    #[error("{first} and {second} share {found} symbols, expected exactly 1")]
    SharedCount {
        first: CardIndex,
        second: CardIndex,
        found: usize,
    },

    /// The deck holds the wrong number of cards.
    #[error("deck holds {found} cards, expected {expected}")]
    WrongDeckSize { found: usize, expected: usize },

    /// A universe symbol appears on no card.
    #[error("{symbol} never appears on any card")]
    UncoveredSymbol { symbol: SymbolId },
}
