//! Deck order: the single configuration input.
//!
//! An [`Order`] is a validated wrapper around the projective-plane order
//! `n`. Holding an `Order` proves the value is in the supported domain, so
//! the deck layer never re-checks it.
//!
//! ## Supported Domain
//!
//! Orders below 2 are rejected: the construction is undefined there.
//! Orders above `u16::MAX` are rejected so that the symbol universe
//! `n² + n + 1` always fits a `u32` identifier. Within that domain the
//! construction is guaranteed valid only for prime powers; other orders
//! build but fail post-construction validation (see `deck`).

use serde::{Deserialize, Serialize};

use crate::deck::error::DeckError;

/// Validated deck order.
///
/// ```
/// use rust_spotit::Order;
///
/// let order = Order::new(3).unwrap();
/// assert_eq!(order.symbol_count(), 13);
/// assert_eq!(order.symbols_per_card(), 4);
/// assert_eq!(order.deck_size(), 13);
///
/// assert!(Order::new(1).is_err());
/// assert!(Order::new(-4).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order(u16);

impl Order {
    /// Smallest supported order.
    pub const MIN: i64 = 2;

    /// Largest supported order. Keeps `n² + n + 1` within `u32`.
    pub const MAX: i64 = u16::MAX as i64;

    /// Create a validated order.
    ///
    /// Fails with [`DeckError::InvalidOrder`] outside `MIN..=MAX`.
    pub fn new(order: i64) -> Result<Self, DeckError> {
        if (Self::MIN..=Self::MAX).contains(&order) {
            Ok(Self(order as u16))
        } else {
            Err(DeckError::InvalidOrder { order })
        }
    }

    /// Get the raw order value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0 as u32
    }

    /// Size of the symbol universe: `n² + n + 1`.
    #[must_use]
    pub const fn symbol_count(self) -> usize {
        let n = self.0 as u64;
        (n * n + n + 1) as usize
    }

    /// Symbols per card: `n + 1`.
    #[must_use]
    pub const fn symbols_per_card(self) -> usize {
        self.0 as usize + 1
    }

    /// Number of cards in a full deck. Equals `symbol_count`.
    #[must_use]
    pub const fn deck_size(self) -> usize {
        self.symbol_count()
    }

    /// Is this order a prime power?
    ///
    /// The projective-plane construction is provably valid exactly for
    /// these orders. Callers that want to reject other orders up front can
    /// pre-screen with this; `Deck::build` itself relies on validation.
    #[must_use]
    pub fn is_prime_power(self) -> bool {
        let mut n = self.0 as u32;
        let mut p = 2;
        while p * p <= n {
            if n % p == 0 {
                while n % p == 0 {
                    n /= p;
                }
                return n == 1;
            }
            p += 1;
        }
        // No factor up to sqrt(n): n is prime. n >= 2 is guaranteed here.
        true
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Order({})", self.0)
    }
}
