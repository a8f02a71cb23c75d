//! # rust-spotit
//!
//! A symbol-matching card game engine built on projective-plane decks.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: Deck construction is a deterministic, side-effect-free
//!    function of the order. Randomness lives only in the round dealer.
//!
//! 2. **Hard Validation**: Every constructed deck is checked against the
//!    one-shared-symbol invariant before it is handed out. A deck that
//!    fails the check is an error, never a warning.
//!
//! 3. **Display Is External**: Symbols are opaque identifiers. Mapping them
//!    to glyphs is an injected lookup (`GlyphSet`), never a builder concern.
//!
//! ## Deck Shape
//!
//! For an order `n`, the deck contains `n² + n + 1` cards of `n + 1`
//! symbols each, drawn from a universe of `n² + n + 1` symbols, and any
//! two distinct cards share exactly one symbol. The construction is the
//! classical finite projective plane of order `n` and is guaranteed valid
//! when `n` is a prime power; other orders are accepted but fail the
//! post-construction validation.
//!
//! ## Modules
//!
//! - `core`: Symbol and card identifiers, validated order, deal RNG
//! - `deck`: Cards, deck construction, invariant validation, errors
//! - `game`: Round dealing, match checking, scoring, glyph alphabets

pub mod core;
pub mod deck;
pub mod game;

// Re-export commonly used types
pub use crate::core::{CardIndex, DealRng, Order, SymbolId};

pub use crate::deck::{build_deck, Card, Deck, DeckError, InvariantViolation};

pub use crate::game::{GameError, GlyphSet, MatchGame, MatchGameBuilder, MatchOutcome, Round};
