//! Closed-form design constructions
//!
//! Symbol layout shared by the projective constructions:
//! - `0..=n` are the points at infinity (the base card)
//! - block `j` (`j = 0..n`) holds symbols `n + 1 + j·n ..= n + (j + 1)·n`
//!
//! Card families:
//! - the base card `0..=n`
//! - `n` cards through symbol `0`, one per block
//! - `n²` cards through symbol `m + 1`, one per (slope `m`, intercept `c`),
//!   taking symbol `(m·j + c) + j·n + n + 1` from every block `j`

use crate::core::types::{Card, Order, Symbol};
use crate::design::field::GaloisField;

pub fn base_card(n: u32) -> Card {
    Card::new((0..=n).map(Symbol).collect())
}

/// Cards through symbol 0, one per block
pub(crate) fn block_cards(n: u32) -> impl Iterator<Item = Card> {
    (1..=n).map(move |i| {
        let mut symbols = Vec::with_capacity(n as usize + 1);
        symbols.push(Symbol(0));
        symbols.extend((1..=n).map(|j| Symbol((i - 1) * n + j + n)));
        Card::new(symbols)
    })
}

/// Full plane for arithmetic `add`/`mul` over `0..n`
fn projective_plane<A, M>(n: u32, add: A, mul: M) -> Vec<Card>
where
    A: Fn(u32, u32) -> u32,
    M: Fn(u32, u32) -> u32,
{
    let mut cards = Vec::with_capacity((n * n + n + 1) as usize);
    cards.push(base_card(n));
    cards.extend(block_cards(n));

    for slope in 0..n {
        for intercept in 0..n {
            let mut symbols = Vec::with_capacity(n as usize + 1);
            symbols.push(Symbol(slope + 1));
            for j in 0..n {
                let offset = add(mul(slope, j), intercept);
                symbols.push(Symbol(offset + j * n + n + 1));
            }
            cards.push(Card::new(symbols));
        }
    }

    cards
}

/// Direct construction
///
/// Uses GF(n) arithmetic, which for prime n is integer arithmetic mod n.
/// Without a field the literal modular formula is used; it only yields a
/// valid design for primes.
pub fn direct(order: Order) -> Vec<Card> {
    let n = order.get();
    match GaloisField::new(n) {
        Some(field) => projective_plane(n, |a, b| field.add(a, b), |a, b| field.mul(a, b)),
        None => projective_plane(n, |a, b| (a + b) % n, |a, b| (a * b) % n),
    }
}

/// Order-9 construction over GF(3²) as Gaussian integers mod 3
///
/// Element `a + b·i` with `i² = −1` is encoded as `3b + a`.
pub fn order_nine() -> Vec<Card> {
    const N: u32 = 9;
    let split = |e: u32| (e % 3, e / 3);
    let join = |re: u32, im: u32| 3 * (im % 3) + re % 3;

    let add = |x: u32, y: u32| {
        let (a, b) = split(x);
        let (c, d) = split(y);
        join(a + c, b + d)
    };
    let mul = |x: u32, y: u32| {
        let (a, b) = split(x);
        let (c, d) = split(y);
        // (a + bi)(c + di) = (ac - bd) + (ad + bc)i, kept non-negative mod 3
        join(a * c + 2 * b * d, a * d + b * c)
    };

    projective_plane(N, add, mul)
}

/// Looser point/line construction used once direct output has failed
///
/// Yields the base card plus `n²` cards, one per (point, line) pair, each
/// taking a contiguous run of `n` symbols. Rarely valid on its own; it is a
/// starting point for local repair.
pub fn general_fallback(order: Order) -> Vec<Card> {
    let n = order.get();
    let mut cards = Vec::with_capacity((n * n + 1) as usize);
    cards.push(base_card(n));

    for point in 1..=n {
        for line in 1..=n {
            let mut symbols = Vec::with_capacity(n as usize + 1);
            symbols.push(Symbol(point));
            symbols.extend((1..=n).map(|k| Symbol(n + 1 + (line - 1) * n + (k - 1))));
            cards.push(Card::new(symbols));
        }
    }

    cards
}
