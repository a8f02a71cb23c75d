//! Core types: symbol and card identifiers, order, RNG.
//!
//! This module contains the fundamental building blocks shared by the deck
//! and game layers. Nothing here knows how a deck is constructed or how a
//! round is played.

pub mod order;
pub mod rng;
pub mod symbol;

pub use order::Order;
pub use rng::DealRng;
pub use symbol::{CardIndex, SymbolId};
