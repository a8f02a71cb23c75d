//! Symbol and card identification.
//!
//! Both identifiers are opaque: a `SymbolId` says nothing about how the
//! symbol is displayed (see `game::GlyphSet`), and a `CardIndex` is just a
//! position in a deck's creation order, used for external selection only.

use serde::{Deserialize, Serialize};

/// Identifier for a symbol in a deck's universe.
///
/// For a deck of order `n`, valid symbols are `0..n² + n + 1`. Symbol `0`
/// is the distinguished root symbol shared by the reference cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Position of a card within a deck.
///
/// Indices follow construction order: the `n + 1` reference cards first,
/// then the `n × n` remaining cards. The order carries no game meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardIndex(pub u32);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Convert to a slice index.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
