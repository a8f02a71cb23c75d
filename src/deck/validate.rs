//! Deck invariant validation.
//!
//! Checks run cheapest-first and stop at the first violation:
//!
//! 1. deck size is `n² + n + 1`;
//! 2. every card holds `n + 1` unique, in-range symbols;
//! 3. every universe symbol appears on some card;
//! 4. every unordered pair of distinct cards shares exactly one symbol.
//!
//! A violation means either a non-prime-power order or a builder defect.
//! Either way the deck is unusable: the one-shared-symbol guarantee is the
//! fairness contract of the matching game.

use rustc_hash::FxHashSet;

use super::card::Card;
use super::error::InvariantViolation;
use crate::core::order::Order;
use crate::core::symbol::{CardIndex, SymbolId};

/// Check every deck invariant for a card list built for `order`.
pub(crate) fn validate(order: Order, cards: &[Card]) -> Result<(), InvariantViolation> {
    let universe = order.symbol_count();
    let per_card = order.symbols_per_card();

    if cards.len() != order.deck_size() {
        return Err(InvariantViolation::WrongDeckSize {
            found: cards.len(),
            expected: order.deck_size(),
        });
    }

    let mut covered = vec![false; universe];
    let mut sets: Vec<FxHashSet<SymbolId>> = Vec::with_capacity(cards.len());

    for (position, card) in cards.iter().enumerate() {
        let index = CardIndex::new(position as u32);

        if card.len() != per_card {
            return Err(InvariantViolation::WrongCardSize {
                card: index,
                found: card.len(),
                expected: per_card,
            });
        }

        let mut seen = FxHashSet::with_capacity_and_hasher(per_card, Default::default());
        for symbol in card.iter() {
            if symbol.raw() as usize >= universe {
                return Err(InvariantViolation::SymbolOutOfRange {
                    card: index,
                    symbol,
                    universe,
                });
            }
            if !seen.insert(symbol) {
                return Err(InvariantViolation::DuplicateSymbol { card: index, symbol });
            }
            covered[symbol.raw() as usize] = true;
        }
        sets.push(seen);
    }

    if let Some(missing) = covered.iter().position(|&hit| !hit) {
        return Err(InvariantViolation::UncoveredSymbol {
            symbol: SymbolId::new(missing as u32),
        });
    }

    for first in 0..sets.len() {
        for second in first + 1..sets.len() {
            let found = sets[first].intersection(&sets[second]).count();
            if found != 1 {
                return Err(InvariantViolation::SharedCount {
                    first: CardIndex::new(first as u32),
                    second: CardIndex::new(second as u32),
                    found,
                });
            }
        }
    }

    Ok(())
}
