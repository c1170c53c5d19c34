//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::{DeckError, Result};

/// Orders for which a projective plane construction exists and is practical
/// to print: primes and prime powers up to 31.
pub const SUPPORTED_ORDERS: [u32; 17] = [2, 3, 4, 5, 7, 8, 9, 11, 13, 16, 17, 19, 23, 25, 27, 29, 31];

/// Total number of distinct symbols (and cards) for order `n`
///
/// Computed in `u64`, so every `u32` order is representable.
pub fn required_symbol_count(n: u32) -> u64 {
    let n = u64::from(n);
    n * n + n + 1
}

pub fn is_supported(n: u32) -> bool {
    SUPPORTED_ORDERS.contains(&n)
}

pub fn supported_orders() -> &'static [u32] {
    &SUPPORTED_ORDERS
}

/// A checked design order
///
/// Can only be built for values in [`SUPPORTED_ORDERS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Order(u32);

impl Order {
    pub fn new(n: u32) -> Result<Self> {
        if is_supported(n) {
            Ok(Self(n))
        } else {
            Err(DeckError::InvalidOrder { order: n })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Symbols per card (`n + 1`)
    pub fn card_size(self) -> usize {
        self.0 as usize + 1
    }

    /// Cards in a full design, equal to the number of symbols (`n² + n + 1`)
    pub fn symbol_count(self) -> usize {
        required_symbol_count(self.0) as usize
    }
}

impl<'de> Deserialize<'de> for Order {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let n = u32::deserialize(deserializer)?;
        Order::new(n).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque symbol identifier, an index into the image supply
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub u32);

impl Symbol {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One card: an ordered list of symbols
///
/// Order only matters for layout (slot index). The design invariant treats
/// a card as a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(pub Vec<Symbol>);

impl Card {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    pub fn from_ids(ids: &[u32]) -> Self {
        Self(ids.iter().copied().map(Symbol).collect())
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.0.contains(&symbol)
    }

    /// Symbols present on both cards, in this card's order
    pub fn shared_with(&self, other: &Card) -> Vec<Symbol> {
        self.0.iter().copied().filter(|s| other.contains(*s)).collect()
    }

    /// Stable textual key, e.g. `"5_12_3"`
    pub fn key(&self) -> String {
        symbol_key(&self.0)
    }

    /// File stem used by exporters, e.g. `"card_5_12_3"`
    pub fn export_name(&self) -> String {
        format!("card_{}", self.key())
    }
}

pub fn symbol_key(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(|s| s.0.to_string())
        .collect::<Vec<_>>()
        .join("_")
}

/// A validated set of cards for one order
///
/// Only produced by the generation pipeline after the full invariant check
/// has passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Design {
    order: Order,
    cards: Vec<Card>,
}

impl Design {
    pub(crate) fn from_validated(order: Order, cards: Vec<Card>) -> Self {
        Self { order, cards }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}
