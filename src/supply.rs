//! Image supply consumed by renderers
//!
//! The crate never loads images. Callers hand over an ordered list of
//! opaque handles (URLs, file paths, texture ids) and symbols are used as
//! indices into it.

use crate::core::error::{DeckError, Result};
use crate::core::types::{Card, Order, Symbol};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSupply<H> {
    handles: Vec<H>,
}

impl<H> ImageSupply<H> {
    pub fn new(handles: Vec<H>) -> Self {
        Self { handles }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Handle for a symbol
    ///
    /// Indices wrap modulo the supply length, so a design larger than the
    /// supply still resolves. Returns `None` only for an empty supply.
    pub fn handle(&self, symbol: Symbol) -> Option<&H> {
        if self.handles.is_empty() {
            return None;
        }
        self.handles.get(symbol.index() % self.handles.len())
    }

    /// Handles for every slot of a card, in slot order
    pub fn handles_for(&self, card: &Card) -> Vec<&H> {
        card.symbols()
            .iter()
            .filter_map(|&symbol| self.handle(symbol))
            .collect()
    }

    /// Require one distinct image per symbol of the full design
    pub fn ensure_capacity(&self, order: Order) -> Result<()> {
        self.ensure_at_least(order.symbol_count())
    }

    /// Require enough images for a single card
    pub fn ensure_minimum(&self, order: Order) -> Result<()> {
        self.ensure_at_least(order.card_size())
    }

    fn ensure_at_least(&self, required: usize) -> Result<()> {
        if self.handles.len() < required {
            return Err(DeckError::InsufficientImages {
                required,
                available: self.handles.len(),
            });
        }
        Ok(())
    }
}

impl<H> FromIterator<H> for ImageSupply<H> {
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supply(count: usize) -> ImageSupply<String> {
        (0..count).map(|i| format!("img_{}.png", i)).collect()
    }

    #[test]
    fn test_handle_wraps() {
        let s = supply(7);
        assert_eq!(s.handle(Symbol(3)).map(String::as_str), Some("img_3.png"));
        assert_eq!(s.handle(Symbol(9)).map(String::as_str), Some("img_2.png"));
    }

    #[test]
    fn test_empty_supply_has_no_handles() {
        let s: ImageSupply<String> = ImageSupply::new(Vec::new());
        assert!(s.handle(Symbol(0)).is_none());
        assert!(s.handles_for(&Card::from_ids(&[0, 1])).is_empty());
    }

    #[test]
    fn test_capacity_checks() {
        let order = Order::new(3).unwrap();
        assert!(supply(13).ensure_capacity(order).is_ok());
        assert!(matches!(
            supply(12).ensure_capacity(order),
            Err(DeckError::InsufficientImages { required: 13, available: 12 })
        ));
        assert!(supply(4).ensure_minimum(order).is_ok());
        assert!(supply(3).ensure_minimum(order).is_err());
    }

    #[test]
    fn test_handles_for_card() {
        let s = supply(7);
        let card = Card::from_ids(&[6, 0, 3]);
        let handles: Vec<&str> = s.handles_for(&card).into_iter().map(String::as_str).collect();
        assert_eq!(handles, vec!["img_6.png", "img_0.png", "img_3.png"]);
    }
}
