//! Glyph alphabets: the symbol-to-character lookup.
//!
//! The deck only knows opaque symbol identifiers. A `GlyphSet` is the
//! injected lookup a renderer uses to turn them into characters. Each
//! alphabet supports orders up to the largest universe it can cover; the
//! bound is derived from the alphabet length, never hardcoded.

use serde::{Deserialize, Serialize};

use crate::core::order::Order;
use crate::core::symbol::SymbolId;

const MISCELLANEOUS_SYMBOLS: &str =
    "★☺✈☂☕♫⚽❄☀☁☘☮☯✨⚡⚔⚖⚙⌛⏳♛♜♝♞♟♠♣♥♦♭♮⚕⚘⚚⚛⚗⚜⚒⚓⛅⛄∆∏∑αβγδεζηθικλμνξ";
const LETTERS: &str = "ABCÇDEFGHIJKLMNÑOPQRSTUVWXYZabcçdefghijklmnñopqrstuvwxyz";
const DIGITS: &str = "0123456789";

/// A fixed alphabet of display characters.
///
/// ```
/// use rust_spotit::{GlyphSet, SymbolId};
///
/// let glyphs = GlyphSet::Digits;
/// assert_eq!(glyphs.glyph(SymbolId::new(0)), Some('0'));
/// assert_eq!(glyphs.max_order(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlyphSet {
    /// Miscellaneous pictographic symbols (58 glyphs, orders up to 7).
    Symbols,
    /// Upper- and lowercase letters (56 glyphs, orders up to 6).
    Letters,
    /// Decimal digits (10 glyphs, order 2 only).
    Digits,
}

impl GlyphSet {
    /// The raw alphabet backing this set.
    #[must_use]
    const fn alphabet(self) -> &'static str {
        match self {
            GlyphSet::Symbols => MISCELLANEOUS_SYMBOLS,
            GlyphSet::Letters => LETTERS,
            GlyphSet::Digits => DIGITS,
        }
    }

    /// Number of glyphs in this alphabet.
    #[must_use]
    pub fn len(self) -> usize {
        self.alphabet().chars().count()
    }

    /// Glyph alphabets are never empty.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.alphabet().is_empty()
    }

    /// Look up the display character for a symbol.
    ///
    /// Returns `None` when the symbol lies beyond this alphabet.
    #[must_use]
    pub fn glyph(self, symbol: SymbolId) -> Option<char> {
        self.alphabet().chars().nth(symbol.raw() as usize)
    }

    /// Can this alphabet display every symbol of a deck of `order`?
    #[must_use]
    pub fn supports(self, order: Order) -> bool {
        order.symbol_count() <= self.len()
    }

    /// Largest order whose full universe this alphabet covers.
    #[must_use]
    pub fn max_order(self) -> u32 {
        let len = self.len() as u64;
        let mut n = 2u64;
        while (n + 1) * (n + 1) + (n + 1) + 1 <= len {
            n += 1;
        }
        n as u32
    }
}

impl std::fmt::Display for GlyphSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlyphSet::Symbols => write!(f, "symbols"),
            GlyphSet::Letters => write!(f, "letters"),
            GlyphSet::Digits => write!(f, "digits"),
        }
    }
}
