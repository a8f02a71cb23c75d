//! Finite-projective-plane deck construction.
//!
//! ## Construction
//!
//! For an order `n` the symbol universe is `0..n² + n + 1`, with symbol
//! `0` as the distinguished root. Cards are emitted in two blocks:
//!
//! 1. **Reference block** (`n + 1` cards): card `i` holds the root plus
//!    the contiguous symbols `i*n + 1 ..= i*n + n`. The blocks partition
//!    `1..=n² + n`, so these cards pairwise intersect in exactly the root.
//!
//! 2. **Remaining block** (`n × n` cards): card `(i, j)` holds symbol
//!    `i + 1` plus, for each `k`, the symbol `n + 1 + k*n + (k*i + j) % n`,
//!    the line of slope `i` and intercept `j` through the affine plane.
//!    For a fixed slope the `n` lines are disjoint outside `i + 1`; lines
//!    of different slopes meet in exactly one point.
//!
//! The construction is deterministic and RNG-free. It is guaranteed to
//! satisfy the deck invariants when `n` is a prime power; for any order
//! the result is checked by `validate` before a deck is returned.

use log::{debug, error};
use smallvec::SmallVec;

use super::card::Card;
use super::deck::Deck;
use super::error::DeckError;
use super::validate;
use crate::core::order::Order;
use crate::core::symbol::SymbolId;

/// Build and validate a deck, validating the order first.
///
/// Convenience wrapper over [`Order::new`] + [`Deck::build`] for callers
/// holding a raw integer (e.g. straight from a preference dialog).
///
/// ```
/// use rust_spotit::{build_deck, DeckError};
///
/// let deck = build_deck(3).unwrap();
/// assert_eq!(deck.len(), 13);
///
/// assert!(matches!(build_deck(1), Err(DeckError::InvalidOrder { .. })));
/// ```
pub fn build_deck(order: i64) -> Result<Deck, DeckError> {
    Deck::build(Order::new(order)?)
}

/// Construct the cards for an order and validate them into a deck.
pub(crate) fn build(order: Order) -> Result<Deck, DeckError> {
    let cards = construct(order);

    if let Err(violation) = validate::validate(order, &cards) {
        error!("event=deck_build order={} status=invalid {}", order.get(), violation);
        return Err(violation.into());
    }

    debug!(
        "event=deck_build order={} status=ok cards={} symbols_per_card={}",
        order.get(),
        cards.len(),
        order.symbols_per_card()
    );
    Ok(Deck::from_parts(order, cards))
}

/// Emit the raw card list in construction order.
fn construct(order: Order) -> Vec<Card> {
    let n = order.get();
    let per_card = order.symbols_per_card();
    let mut cards = Vec::with_capacity(order.deck_size());

    // Reference block: the root symbol plus one contiguous slice of n.
    for i in 0..=n {
        let mut symbols: SmallVec<[SymbolId; 8]> = SmallVec::with_capacity(per_card);
        symbols.push(SymbolId::new(0));
        for j in 0..n {
            symbols.push(SymbolId::new(i * n + j + 1));
        }
        cards.push(Card::from_symbols(symbols));
    }

    // Remaining block: the affine line of slope i and intercept j.
    for i in 0..n {
        for j in 0..n {
            let mut symbols: SmallVec<[SymbolId; 8]> = SmallVec::with_capacity(per_card);
            symbols.push(SymbolId::new(i + 1));
            for k in 0..n {
                symbols.push(SymbolId::new(n + 1 + k * n + (k * i + j) % n));
            }
            cards.push(Card::from_symbols(symbols));
        }
    }

    cards
}
