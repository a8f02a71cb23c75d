//! The matching game built on top of the deck.
//!
//! A [`MatchGame`] owns a validated deck, a seeded [`DealRng`], and the
//! score counters. Per round it deals two distinct cards; the player picks
//! one symbol from each and the game reports match or mismatch. Rendering,
//! input handling, sounds and timers stay outside this crate; the game
//! layer only provides the data they consume, including the optional
//! [`GlyphSet`] symbol-to-character lookup.
//!
//! [`DealRng`]: crate::core::DealRng

pub mod glyphs;
pub mod round;
pub mod session;

pub use glyphs::GlyphSet;
pub use round::{MatchOutcome, Round};
pub use session::{GameError, MatchGame, MatchGameBuilder};
