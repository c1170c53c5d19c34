//! Seeded random streams
//!
//! Every random decision in the crate comes from a `ChaCha8Rng` seeded from
//! an explicit integer or string. Nothing reads ambient entropy, so layouts
//! and degraded constructions are reproducible from their inputs.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::types::{symbol_key, Symbol};

/// Stream seeded from an integer
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Position-weighted byte sum of `key`
///
/// Order sensitive: `"1_2"` and `"2_1"` differ.
pub fn key_checksum(key: &str) -> u64 {
    key.bytes()
        .enumerate()
        .fold(0u64, |acc, (i, b)| {
            acc.wrapping_add(u64::from(b).wrapping_mul(i as u64 + 1))
        })
}

/// Layout seed for a card, derived from its ordered symbol tuple
pub fn card_seed(symbols: &[Symbol]) -> u64 {
    key_checksum(&symbol_key(symbols))
}

/// Per-slot stream, a function of slot index and symbol id only
pub fn slot_rng(slot: usize, symbol: Symbol) -> ChaCha8Rng {
    let mixed = (slot as u64)
        .wrapping_mul(9999)
        .wrapping_add(u64::from(symbol.0).wrapping_mul(7919))
        .wrapping_mul(0x9E37_79B9_7F4A_7C15);
    seeded(mixed)
}
