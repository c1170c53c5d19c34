//! Repair and fallback strategies for candidates that failed validation
//!
//! Every function here works on its own copy of the cards. Nothing is
//! returned to callers of the crate without passing the order check in
//! [`crate::design::validation`].

use ahash::AHashSet;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::core::error::{DeckError, Result};
use crate::core::types::{Card, Order, Symbol};
use crate::design::construction::{base_card, block_cards};
use crate::design::validation::check_for_order;

/// Bound on local repair passes
pub const MAX_REPAIR_PASSES: usize = 5;

/// Shuffled retries per stalled card in the last resort
pub const RANDOM_RETRIES: usize = 16;

/// Lowest symbol id in `0..limit` for which `taken` is false
fn lowest_free(limit: u32, taken: impl Fn(Symbol) -> bool) -> Option<Symbol> {
    (0..limit).map(Symbol).find(|s| !taken(*s))
}

/// One local repair pass
///
/// For each pair sharing more than one symbol, the first shared symbol is
/// kept and the others are replaced in the later card by the lowest id
/// found on neither card. Cards are then deduplicated and topped up with
/// the lowest unused ids.
pub fn repair_pass(cards: &[Card], order: Order) -> Vec<Card> {
    let limit = order.symbol_count() as u32;
    let size = order.card_size();
    let mut cards = cards.to_vec();

    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            let shared = cards[i].shared_with(&cards[j]);
            if shared.len() <= 1 {
                continue;
            }
            let first = cards[i].clone();
            for symbol in &shared[1..] {
                let Some(slot) = cards[j].0.iter().position(|s| s == symbol) else {
                    continue;
                };
                let second = &cards[j];
                if let Some(replacement) =
                    lowest_free(limit, |s| first.contains(s) || second.contains(s))
                {
                    cards[j].0[slot] = replacement;
                }
            }
        }
    }

    for card in cards.iter_mut() {
        let mut seen = AHashSet::with_capacity(size);
        card.0.retain(|s| seen.insert(*s));
        while card.len() < size {
            match lowest_free(limit, |s| seen.contains(&s)) {
                Some(symbol) => {
                    seen.insert(symbol);
                    card.0.push(symbol);
                }
                None => break,
            }
        }
    }

    cards
}

/// Result of a converged repair loop
#[derive(Debug, Clone)]
pub struct Repaired {
    pub cards: Vec<Card>,
    pub passes: usize,
}

/// Run up to `max_passes` repair passes, each on the previous pass's output
///
/// Returns `None` when no pass produced a valid design.
pub fn repair(candidate: &[Card], order: Order, max_passes: usize) -> Option<Repaired> {
    let mut cards = candidate.to_vec();
    for pass in 1..=max_passes {
        cards = repair_pass(&cards, order);
        match check_for_order(&cards, order) {
            Ok(()) => {
                tracing::debug!("Repair converged for order {} after {} passes", order, pass);
                return Some(Repaired { cards, passes: pass });
            }
            Err(e) => {
                tracing::debug!("Repair pass {} for order {} still invalid: {}", pass, order, e);
            }
        }
    }
    None
}

/// Output of the last-resort construction
#[derive(Debug, Clone)]
pub struct LastResort {
    pub cards: Vec<Card>,
    /// True when at least one card needed a shuffled retry
    pub randomized: bool,
}

/// Accepted cards plus an index from symbol to the cards containing it
struct Accepted {
    cards: Vec<Card>,
    containing: Vec<Vec<usize>>,
}

impl Accepted {
    fn new(limit: usize) -> Self {
        Self {
            cards: Vec::new(),
            containing: vec![Vec::new(); limit],
        }
    }

    fn push(&mut self, card: Card) {
        let idx = self.cards.len();
        for symbol in card.symbols() {
            self.containing[symbol.index()].push(idx);
        }
        self.cards.push(card);
    }

    /// Extend a card starting at `start`, taking candidates in order
    ///
    /// A candidate is accepted only when every accepted card containing it
    /// does not yet share a symbol with the card being built.
    fn extend_greedy(&self, start: Symbol, candidates: &[Symbol], size: usize) -> Option<Card> {
        let mut overlap = vec![0usize; self.cards.len()];
        for &idx in &self.containing[start.index()] {
            overlap[idx] += 1;
        }

        let mut symbols = vec![start];
        for &candidate in candidates {
            if symbols.len() == size {
                break;
            }
            if symbols.contains(&candidate) {
                continue;
            }
            let holders = &self.containing[candidate.index()];
            if holders.iter().all(|&idx| overlap[idx] == 0) {
                for &idx in holders {
                    overlap[idx] += 1;
                }
                symbols.push(candidate);
            }
        }

        (symbols.len() == size).then(|| Card::new(symbols))
    }
}

/// Greedy construction used once every closed form has failed
///
/// Starts from the base card and the cards through symbol 0, then builds
/// `n` cards through each point `1..=n` by ascending scan. A stalled card
/// is retried with the candidate order shuffled by `rng`; cards that still
/// cannot be completed are dropped.
pub fn last_resort(order: Order, rng: &mut ChaCha8Rng) -> Result<LastResort> {
    let n = order.get();
    let size = order.card_size();
    let limit = order.symbol_count();

    let mut accepted = Accepted::new(limit);
    accepted.push(base_card(n));
    for card in block_cards(n) {
        accepted.push(card);
    }

    let mut randomized = false;
    for point in 1..=n {
        let start = Symbol(point);
        let mut candidates: Vec<Symbol> =
            (0..limit as u32).map(Symbol).filter(|s| *s != start).collect();

        for _ in 0..n {
            if accepted.cards.len() >= limit {
                break;
            }
            if let Some(card) = accepted.extend_greedy(start, &candidates, size) {
                accepted.push(card);
                continue;
            }

            randomized = true;
            tracing::warn!(
                "Last resort for order {}: card through symbol {} stalled, retrying with shuffled candidates",
                order,
                point
            );
            for _ in 0..RANDOM_RETRIES {
                candidates.shuffle(rng);
                if let Some(card) = accepted.extend_greedy(start, &candidates, size) {
                    accepted.push(card);
                    break;
                }
            }
            candidates.sort();
        }
    }

    if accepted.cards.len() < size {
        return Err(DeckError::ConstructionFailed { order: n });
    }

    Ok(LastResort {
        cards: accepted.cards,
        randomized,
    })
}
