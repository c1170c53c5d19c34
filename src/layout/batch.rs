//! Whole-deck layout
//!
//! Cards are independent, so they are laid out in parallel. Results are
//! collected by card index, keeping design order regardless of which card
//! finishes first.

use rayon::prelude::*;

use crate::core::types::{Card, Design};
use crate::layout::engine::LayoutEngine;
use crate::layout::placement::CardLayout;

impl LayoutEngine {
    /// Lay out every card in `cards`, in order
    pub fn layout_cards(&self, cards: &[Card], diameter: f64) -> Vec<CardLayout> {
        cards
            .par_iter()
            .enumerate()
            .map(|(card_index, card)| CardLayout {
                card_index,
                key: card.key(),
                placements: self.layout(card.symbols(), diameter),
            })
            .collect()
    }

    pub fn layout_deck(&self, design: &Design, diameter: f64) -> Vec<CardLayout> {
        let layouts = self.layout_cards(design.cards(), diameter);
        tracing::debug!(
            "Laid out {} cards for order {} at diameter {}",
            layouts.len(),
            design.order(),
            diameter
        );
        layouts
    }
}

/// Lay out a whole design with the default configuration
pub fn layout_deck(design: &Design, diameter: f64) -> Vec<CardLayout> {
    LayoutEngine::default().layout_deck(design, diameter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::generate_design;
    use crate::layout::engine::compute_layout;

    #[test]
    fn test_deck_layout_keeps_card_order() {
        let design = generate_design(5).unwrap();
        let layouts = layout_deck(&design, 800.0);
        assert_eq!(layouts.len(), design.len());
        for (i, (layout, card)) in layouts.iter().zip(design.cards()).enumerate() {
            assert_eq!(layout.card_index, i);
            assert_eq!(layout.key, card.key());
            assert_eq!(layout.placements, compute_layout(card.symbols(), 800.0));
        }
    }
}
