//! The match game session: dealing, checking, scoring.

use log::debug;
use thiserror::Error;

use super::glyphs::GlyphSet;
use super::round::{MatchOutcome, Round};
use crate::core::order::Order;
use crate::core::rng::DealRng;
use crate::core::symbol::{CardIndex, SymbolId};
use crate::deck::{Deck, DeckError};

/// Errors from assembling or playing a match game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Deck construction failed.
    #[error(transparent)]
    Deck(#[from] DeckError),

    /// The chosen alphabet cannot display every symbol of the order.
    #[error("{glyphs} alphabet covers orders up to {max_order}, got {order}")]
    GlyphCapacity {
        glyphs: GlyphSet,
        order: u32,
        max_order: u32,
    },

    /// A submitted round references a card outside the deck.
    #[error("{card} is not in this deck")]
    UnknownCard { card: CardIndex },

    /// A submitted pick is not on the card it was picked from.
    #[error("{symbol} is not on dealt {card}")]
    SymbolNotOnCard { card: CardIndex, symbol: SymbolId },
}

/// A running game over one deck.
///
/// Owns the validated deck, the deal RNG and the score counters. All
/// game state is explicit; there are no module-level globals.
///
/// ## Example
///
/// ```
/// use rust_spotit::MatchGame;
///
/// let mut game = MatchGame::builder().order(2).seed(42).build().unwrap();
///
/// let round = game.deal();
/// let shared = round.common_symbol(game.deck()).unwrap();
///
/// let outcome = game.submit(round, shared, shared).unwrap();
/// assert!(outcome.is_match());
/// assert_eq!(game.correct(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct MatchGame {
    deck: Deck,
    glyphs: Option<GlyphSet>,
    rng: DealRng,
    correct: u32,
    attempts: u32,
}

impl MatchGame {
    /// Start configuring a game.
    #[must_use]
    pub fn builder() -> MatchGameBuilder {
        MatchGameBuilder::new()
    }

    /// Deal the next round: two distinct cards, uniformly at random.
    pub fn deal(&mut self) -> Round {
        let (left, right) = self.rng.distinct_pair(self.deck.len());
        Round::new(CardIndex::new(left as u32), CardIndex::new(right as u32))
    }

    /// Submit the two picked symbols for a round.
    ///
    /// Each pick must be on the card it was picked from; picks the deck
    /// never dealt are caller bugs and are rejected rather than scored.
    /// Equal picks are a match and increment the correct counter.
    pub fn submit(
        &mut self,
        round: Round,
        left_pick: SymbolId,
        right_pick: SymbolId,
    ) -> Result<MatchOutcome, GameError> {
        let left = self
            .deck
            .card(round.left)
            .ok_or(GameError::UnknownCard { card: round.left })?;
        let right = self
            .deck
            .card(round.right)
            .ok_or(GameError::UnknownCard { card: round.right })?;

        if !left.contains(left_pick) {
            return Err(GameError::SymbolNotOnCard {
                card: round.left,
                symbol: left_pick,
            });
        }
        if !right.contains(right_pick) {
            return Err(GameError::SymbolNotOnCard {
                card: round.right,
                symbol: right_pick,
            });
        }

        self.attempts += 1;
        if left_pick == right_pick {
            self.correct += 1;
            Ok(MatchOutcome::Match { symbol: left_pick })
        } else {
            Ok(MatchOutcome::Mismatch)
        }
    }

    /// The deck this game is played on.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The alphabet chosen for display, if any.
    #[must_use]
    pub const fn glyphs(&self) -> Option<GlyphSet> {
        self.glyphs
    }

    /// Rounds answered correctly.
    #[must_use]
    pub const fn correct(&self) -> u32 {
        self.correct
    }

    /// Rounds answered in total.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }
}

/// Builder for [`MatchGame`].
pub struct MatchGameBuilder {
    order: i64,
    seed: u64,
    glyphs: Option<GlyphSet>,
}

impl Default for MatchGameBuilder {
    fn default() -> Self {
        Self {
            order: 2,
            seed: 0,
            glyphs: None,
        }
    }
}

impl MatchGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deck order. Validated at `build` time.
    pub fn order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    /// Seed for the deal RNG. The same seed replays the same rounds.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Alphabet the renderer will use. Checked against the order's
    /// universe at `build` time.
    pub fn glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = Some(glyphs);
        self
    }

    /// Build the deck and assemble the game.
    pub fn build(self) -> Result<MatchGame, GameError> {
        let order = Order::new(self.order)?;

        if let Some(glyphs) = self.glyphs {
            if !glyphs.supports(order) {
                return Err(GameError::GlyphCapacity {
                    glyphs,
                    order: order.get(),
                    max_order: glyphs.max_order(),
                });
            }
        }

        let deck = Deck::build(order)?;
        debug!(
            "event=game_start order={} seed={} cards={}",
            order.get(),
            self.seed,
            deck.len()
        );

        Ok(MatchGame {
            deck,
            glyphs: self.glyphs,
            rng: DealRng::new(self.seed),
            correct: 0,
            attempts: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_is_distinct_and_in_range() {
        let mut game = MatchGame::builder().order(3).seed(7).build().unwrap();
        for _ in 0..200 {
            let round = game.deal();
            assert_ne!(round.left, round.right);
            assert!(game.deck().card(round.left).is_some());
            assert!(game.deck().card(round.right).is_some());
        }
    }

    #[test]
    fn test_counters() {
        let mut game = MatchGame::builder().order(2).seed(1).build().unwrap();
        let round = game.deal();
        let shared = round.common_symbol(game.deck()).unwrap();

        game.submit(round, shared, shared).unwrap();
        assert_eq!(game.correct(), 1);
        assert_eq!(game.attempts(), 1);

        // A wrong pair counts the attempt but not the score.
        let left_other = game
            .deck()
            .card(round.left)
            .unwrap()
            .iter()
            .find(|&s| s != shared)
            .unwrap();
        let outcome = game.submit(round, left_other, shared).unwrap();
        assert_eq!(outcome, MatchOutcome::Mismatch);
        assert_eq!(game.correct(), 1);
        assert_eq!(game.attempts(), 2);
    }

    #[test]
    fn test_rejects_offcard_pick() {
        let mut game = MatchGame::builder().order(2).seed(1).build().unwrap();
        let round = game.deal();
        let shared = round.common_symbol(game.deck()).unwrap();

        // A symbol from some third card that is on neither dealt card.
        let stray = game
            .deck()
            .iter()
            .flat_map(|card| card.iter())
            .find(|&s| {
                !game.deck().card(round.left).unwrap().contains(s)
                    && !game.deck().card(round.right).unwrap().contains(s)
            })
            .unwrap();

        let result = game.submit(round, stray, shared);
        assert_eq!(
            result,
            Err(GameError::SymbolNotOnCard {
                card: round.left,
                symbol: stray
            })
        );
        // Rejected submissions never touch the counters.
        assert_eq!(game.attempts(), 0);
    }

    #[test]
    fn test_glyph_capacity_enforced() {
        let result = MatchGame::builder()
            .order(3)
            .glyphs(GlyphSet::Digits)
            .build();

        assert_eq!(
            result.unwrap_err(),
            GameError::GlyphCapacity {
                glyphs: GlyphSet::Digits,
                order: 3,
                max_order: 2
            }
        );

        assert!(MatchGame::builder()
            .order(2)
            .glyphs(GlyphSet::Digits)
            .build()
            .is_ok());
    }

    #[test]
    fn test_invalid_order_propagates() {
        let result = MatchGame::builder().order(1).build();
        assert!(matches!(
            result,
            Err(GameError::Deck(DeckError::InvalidOrder { order: 1 }))
        ));
    }
}
