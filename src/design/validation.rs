//! Design invariant checks
//!
//! A candidate card set is a valid design when every card has the same
//! length, no card repeats a symbol, and every pair of cards shares exactly
//! one symbol. Checks run in that order and stop at the first failure.

use ahash::AHashSet;

use crate::core::types::{Card, Order};

/// First invariant violation found in a candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty,
    UnequalCardLength { card: usize, expected: usize, found: usize },
    DuplicateSymbol { card: usize, symbol: u32 },
    SharedCount { first: usize, second: usize, shared: usize },
    WrongCardCount { expected: usize, found: usize },
    WrongCardSize { expected: usize, found: usize },
    SymbolOutOfRange { card: usize, symbol: u32, limit: u32 },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "design has no cards"),
            ValidationError::UnequalCardLength { card, expected, found } => write!(
                f,
                "card {} has {} symbols, expected {}",
                card, found, expected
            ),
            ValidationError::DuplicateSymbol { card, symbol } => {
                write!(f, "card {} repeats symbol {}", card, symbol)
            }
            ValidationError::SharedCount { first, second, shared } => write!(
                f,
                "cards {} and {} share {} symbols",
                first, second, shared
            ),
            ValidationError::WrongCardCount { expected, found } => {
                write!(f, "design has {} cards, expected {}", found, expected)
            }
            ValidationError::WrongCardSize { expected, found } => {
                write!(f, "cards have {} symbols, expected {}", found, expected)
            }
            ValidationError::SymbolOutOfRange { card, symbol, limit } => write!(
                f,
                "card {} uses symbol {} outside 0..{}",
                card, symbol, limit
            ),
        }
    }
}

/// True when `cards` satisfies the pairwise intersection invariant
pub fn validate(cards: &[Card]) -> bool {
    check(cards).is_ok()
}

/// Structural check, reporting the first violation
pub fn check(cards: &[Card]) -> Result<(), ValidationError> {
    let expected = match cards.first() {
        Some(card) if !card.is_empty() => card.len(),
        _ => return Err(ValidationError::Empty),
    };

    for (i, card) in cards.iter().enumerate() {
        if card.len() != expected {
            return Err(ValidationError::UnequalCardLength {
                card: i,
                expected,
                found: card.len(),
            });
        }
    }

    let mut sets = Vec::with_capacity(cards.len());
    for (i, card) in cards.iter().enumerate() {
        let mut seen = AHashSet::with_capacity(card.len());
        for symbol in card.symbols() {
            if !seen.insert(symbol.0) {
                return Err(ValidationError::DuplicateSymbol {
                    card: i,
                    symbol: symbol.0,
                });
            }
        }
        sets.push(seen);
    }

    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            let shared = cards[j]
                .symbols()
                .iter()
                .filter(|s| sets[i].contains(&s.0))
                .count();
            if shared != 1 {
                return Err(ValidationError::SharedCount {
                    first: i,
                    second: j,
                    shared,
                });
            }
        }
    }

    Ok(())
}

/// Full acceptance test for a design of a specific order
///
/// Adds card count, card size and symbol range to [`check`]. Size checks
/// run first since they are cheap.
pub fn check_for_order(cards: &[Card], order: Order) -> Result<(), ValidationError> {
    let limit = order.symbol_count() as u32;

    if cards.len() != order.symbol_count() {
        return Err(ValidationError::WrongCardCount {
            expected: order.symbol_count(),
            found: cards.len(),
        });
    }

    if let Some(card) = cards.iter().find(|c| c.len() != order.card_size()) {
        return Err(ValidationError::WrongCardSize {
            expected: order.card_size(),
            found: card.len(),
        });
    }

    for (i, card) in cards.iter().enumerate() {
        if let Some(symbol) = card.symbols().iter().find(|s| s.0 >= limit) {
            return Err(ValidationError::SymbolOutOfRange {
                card: i,
                symbol: symbol.0,
                limit,
            });
        }
    }

    check(cards)
}

pub fn validate_for_order(cards: &[Card], order: Order) -> bool {
    check_for_order(cards, order).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(raw: &[&[u32]]) -> Vec<Card> {
        raw.iter().map(|ids| Card::from_ids(ids)).collect()
    }

    fn fano() -> Vec<Card> {
        cards(&[
            &[0, 1, 2],
            &[0, 3, 4],
            &[0, 5, 6],
            &[1, 3, 5],
            &[1, 4, 6],
            &[2, 3, 6],
            &[2, 4, 5],
        ])
    }

    #[test]
    fn test_fano_plane_valid() {
        assert!(validate(&fano()));
        assert!(validate_for_order(&fano(), Order::new(2).unwrap()));
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(check(&[]), Err(ValidationError::Empty));
        assert_eq!(check(&[Card::default()]), Err(ValidationError::Empty));
    }

    #[test]
    fn test_unequal_lengths_rejected_first() {
        // Also has a duplicate, but length is checked first
        let set = cards(&[&[0, 1, 2], &[0, 0]]);
        assert!(matches!(
            check(&set),
            Err(ValidationError::UnequalCardLength { card: 1, .. })
        ));
    }

    #[test]
    fn test_duplicate_rejected() {
        let set = cards(&[&[0, 1, 1], &[0, 2, 3]]);
        assert_eq!(
            check(&set),
            Err(ValidationError::DuplicateSymbol { card: 0, symbol: 1 })
        );
    }

    #[test]
    fn test_disjoint_pair_rejected() {
        let set = cards(&[&[0, 1, 2], &[3, 4, 5]]);
        assert_eq!(
            check(&set),
            Err(ValidationError::SharedCount { first: 0, second: 1, shared: 0 })
        );
    }

    #[test]
    fn test_double_overlap_rejected() {
        let set = cards(&[&[0, 1, 2], &[0, 1, 3]]);
        assert!(!validate(&set));
    }

    #[test]
    fn test_order_checks() {
        let order = Order::new(2).unwrap();
        let mut short = fano();
        short.pop();
        assert!(matches!(
            check_for_order(&short, order),
            Err(ValidationError::WrongCardCount { expected: 7, found: 6 })
        ));

        let mut out_of_range = fano();
        out_of_range[6] = Card::from_ids(&[2, 4, 9]);
        assert!(matches!(
            check_for_order(&out_of_range, order),
            Err(ValidationError::SymbolOutOfRange { symbol: 9, .. })
        ));
    }
}
